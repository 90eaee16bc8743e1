//! Like-button rendering.
//!
//! Pure functions over plain data: no store access, no I/O. The handler
//! feeds in the fresh count and state; this module only formats them.

use serde::Serialize;
use ts_rs::TS;

use crate::domain::post::entity::PostRef;

pub const LIKE_LABEL: &str = "Like";
pub const UNLIKE_LABEL: &str = "Unlike";

/// Presentational descriptor for one like button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ButtonView {
    /// "Like", or "Unlike" when the viewer already likes the post.
    pub label: String,
    /// Set for viewers without the create-like right.
    pub disabled: bool,
    /// Empty at count zero, the literal count otherwise.
    pub count_display: String,
    pub target_url: String,
}

pub fn render_like_button(
    post: PostRef,
    count: i64,
    liked_by_viewer: bool,
    viewer_can_like: bool,
) -> ButtonView {
    ButtonView {
        label: if liked_by_viewer { UNLIKE_LABEL } else { LIKE_LABEL }.to_string(),
        disabled: !viewer_can_like,
        count_display: if count > 0 {
            count.to_string()
        } else {
            String::new()
        },
        target_url: format!("/plugin/rjlike/{}/{}", post.post_type.as_lower(), post.post_id),
    }
}

/// CSS selector of the button a toggle response replaces.
pub fn target_selector(post: PostRef) -> String {
    format!("#{}_{} a.ReactButton-Like", post.post_type.as_str(), post.post_id)
}

impl ButtonView {
    /// Anchor markup for the DOM patch.
    pub fn to_markup(&self) -> String {
        let has_count = !self.count_display.is_empty();
        let css_class = if has_count { " HasCount" } else { "" };
        let disabled = if self.disabled { "disabled " } else { "" };
        let count_span = if has_count {
            format!("<span class=\"Count\">{}</span>", self.count_display)
        } else {
            String::new()
        };
        format!(
            "<a class=\"Hijack ReactButton ReactButton-Like{css_class}\" \
             href=\"{url}\" {disabled}title=\"{title}\" rel=\"nofollow\">\
             <span class=\"ReactSprite ReactLike\"></span>{count_span}\
             <span class=\"ReactLabel\">{like}</span></a>",
            url = self.target_url,
            title = self.label,
            like = LIKE_LABEL,
        )
    }
}
