use std::sync::Arc;
use uuid::Uuid;

use crate::domain::post::entity::PostRef;
use crate::infrastructure::notifications::traits::{ActivityService, LikeActivity};

/// Fans a successful like out to the activity collaborator.
pub struct NotificationDispatcher {
    activity: Arc<dyn ActivityService>,
}

impl NotificationDispatcher {
    pub fn new(activity: Arc<dyn ActivityService>) -> Self {
        Self { activity }
    }

    /// Notify the post owner about a fresh like.
    ///
    /// Called only on a false-to-true transition; an unlike never notifies,
    /// and a later re-like notifies again. Self-likes are dropped here. A
    /// dispatch failure is logged and swallowed: the like is already
    /// persisted, so the actor's response must still report success.
    pub async fn like_created(&self, actor_id: Uuid, recipient_id: Uuid, post: PostRef) {
        if actor_id == recipient_id {
            tracing::debug!(%actor_id, post = %post, "self-like, skipping notification");
            return;
        }

        let activity = LikeActivity {
            actor_id,
            recipient_id,
            route: post.route(),
            metadata: serde_json::json!({
                "post_type": post.post_type,
                "post_id": post.post_id,
            }),
        };
        if let Err(err) = self.activity.record_like(activity).await {
            tracing::warn!(error = %err, %recipient_id, post = %post, "like notification dispatch failed");
        }
    }

    /// Legacy profile like: the activity is the primary action here, so the
    /// outcome is reported back for the actor's inform message.
    pub async fn profile_liked(
        &self,
        actor_id: Uuid,
        recipient_id: Uuid,
        profile_route: String,
    ) -> bool {
        if actor_id == recipient_id {
            tracing::debug!(%actor_id, "self profile like, skipping notification");
            return false;
        }

        let activity = LikeActivity {
            actor_id,
            recipient_id,
            route: profile_route,
            metadata: serde_json::json!({ "kind": "profile" }),
        };
        match self.activity.record_like(activity).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, %recipient_id, "profile like dispatch failed");
                false
            }
        }
    }
}
