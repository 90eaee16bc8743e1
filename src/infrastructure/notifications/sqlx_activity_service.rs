use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::traits::{ActivityService, LikeActivity};
use crate::domain::user::preferences::NotificationPrefs;

/// Activity recorder backed by the `notifications` table.
///
/// Resolves the recipient's effective preferences first: a popup-enabled
/// recipient gets a notification row, an email-enabled recipient gets the
/// event handed to the external mail transport (logged here), and a fully
/// muted recipient gets nothing.
pub struct SqlxActivityService {
    pool: PgPool,
    popup_default: bool,
    email_default: bool,
}

impl SqlxActivityService {
    pub fn new(pool: PgPool, popup_default: bool, email_default: bool) -> Self {
        Self {
            pool,
            popup_default,
            email_default,
        }
    }
}

#[async_trait]
impl ActivityService for SqlxActivityService {
    async fn record_like(&self, activity: LikeActivity) -> anyhow::Result<()> {
        let prefs = sqlx::query_as::<_, NotificationPrefs>(
            "SELECT popup_like, email_like FROM users WHERE id = $1",
        )
        .bind(activity.recipient_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| anyhow::anyhow!("unknown notification recipient {}", activity.recipient_id))?;

        let effective = prefs.resolve(self.popup_default, self.email_default);
        if effective.silent() {
            tracing::debug!(recipient = %activity.recipient_id, "recipient muted like notifications");
            return Ok(());
        }

        let actor_name: String = sqlx::query_scalar(
            "SELECT COALESCE(NULLIF(display_name, ''), username) FROM users WHERE id = $1",
        )
        .bind(activity.actor_id)
        .fetch_optional(&self.pool)
        .await?
        .unwrap_or_else(|| "Someone".to_string());

        if effective.popup {
            sqlx::query(
                "INSERT INTO notifications (id, user_id, type, title, route, metadata) \
                 VALUES ($1, $2, 'Like', $3, $4, $5)",
            )
            .bind(Uuid::now_v7())
            .bind(activity.recipient_id)
            .bind(format!("{} liked your post.", actor_name))
            .bind(&activity.route)
            .bind(&activity.metadata)
            .execute(&self.pool)
            .await?;
        }
        if effective.email {
            // Mail transport lives outside this service; the hand-off is the
            // structured log event.
            tracing::info!(
                recipient = %activity.recipient_id,
                actor = %activity.actor_id,
                route = %activity.route,
                "like email notification handed off"
            );
        }
        Ok(())
    }
}
