use async_trait::async_trait;
use uuid::Uuid;

use super::entity::PostRef;
use crate::domain::shared::errors::DomainError;

/// Read-only view into the forum's content subsystem.
///
/// The toggle engine assumes post ids reference real posts; callers resolve
/// existence and ownership here before invoking it.
#[async_trait]
pub trait PostDirectory: Send + Sync {
    /// Owner of the post, or `None` when the post does not exist.
    async fn owner_of(&self, post: PostRef) -> Result<Option<Uuid>, DomainError>;

    /// Ids of all comments in a discussion, for page-render prefetching.
    async fn comment_ids_of(&self, discussion_id: i64) -> Result<Vec<i64>, DomainError>;
}
