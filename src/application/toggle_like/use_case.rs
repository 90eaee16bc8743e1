use std::sync::Arc;
use uuid::Uuid;

use super::dto::ToggleOutcome;
use crate::domain::{
    like::repository::LikeStore,
    post::entity::PostRef,
    shared::{errors::DomainError, permissions::PermissionSnapshot},
};

/// The toggle-state engine.
///
/// Repeated calls alternate like/unlike; there is no like-only mode here.
/// Self-likes are not blocked at this layer: suppressing them is the
/// presentation layer's choice (omit the button on own content), and the
/// notification side already ignores them.
pub struct ToggleLikeUseCase {
    store: Arc<dyn LikeStore>,
}

impl ToggleLikeUseCase {
    pub fn new(store: Arc<dyn LikeStore>) -> Self {
        Self { store }
    }

    /// Flip the actor's like state on a post.
    ///
    /// Permission is checked before any read or write, so a denied request
    /// has no side effects. The flip is persisted through the store's atomic
    /// upsert, and the returned count is recomputed from the rows rather
    /// than maintained incrementally. A storage failure aborts the whole
    /// toggle; it is never reported as success.
    pub async fn toggle(
        &self,
        actor_id: Uuid,
        perms: PermissionSnapshot,
        post: PostRef,
    ) -> Result<ToggleOutcome, DomainError> {
        if !perms.can_create_like {
            return Err(DomainError::PermissionDenied("likes.create".into()));
        }

        let current = self.store.get_like_state(actor_id, post).await?;
        let liked = !current;
        self.store.set_like_state(actor_id, post, liked).await?;
        let like_count = self.store.get_like_count(post).await?;

        tracing::debug!(%actor_id, post = %post, liked, like_count, "like toggled");
        Ok(ToggleOutcome { liked, like_count })
    }
}
