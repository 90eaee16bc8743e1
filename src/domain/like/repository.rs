use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::post::entity::{PostRef, PostType};
use crate::domain::shared::errors::DomainError;

/// Persistent mapping of (actor, post) to like state, plus the derived
/// aggregates.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Current state for the pair; `false` when no row exists.
    async fn get_like_state(&self, actor_id: Uuid, post: PostRef) -> Result<bool, DomainError>;

    /// Upsert the pair's state in a single atomic storage operation.
    ///
    /// Must be insert-or-update keyed on the natural key, never a
    /// caller-side read-modify-write: two concurrent toggles on the same
    /// pair may both write, but they cannot race an insert against an
    /// insert.
    async fn set_like_state(
        &self,
        actor_id: Uuid,
        post: PostRef,
        liked: bool,
    ) -> Result<(), DomainError>;

    /// Number of actors with an active like on the post. Always a fresh
    /// aggregate over the rows, never a maintained counter.
    async fn get_like_count(&self, post: PostRef) -> Result<i64, DomainError>;

    /// Which of `post_ids` the actor actively likes, in one query.
    async fn get_liked_post_ids(
        &self,
        actor_id: Uuid,
        post_type: PostType,
        post_ids: &[i64],
    ) -> Result<HashSet<i64>, DomainError>;
}
