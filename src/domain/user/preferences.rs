use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-user like-notification preferences.
///
/// `None` means "use the site default" from configuration; users only get a
/// concrete value once they change the setting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct NotificationPrefs {
    pub popup_like: Option<bool>,
    pub email_like: Option<bool>,
}

impl NotificationPrefs {
    pub fn resolve(self, popup_default: bool, email_default: bool) -> EffectivePrefs {
        EffectivePrefs {
            popup: self.popup_like.unwrap_or(popup_default),
            email: self.email_like.unwrap_or(email_default),
        }
    }
}

/// Preferences with the config defaults already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivePrefs {
    pub popup: bool,
    pub email: bool,
}

impl EffectivePrefs {
    /// A like toward this user produces no observable notification at all.
    pub fn silent(self) -> bool {
        !self.popup && !self.email
    }
}
