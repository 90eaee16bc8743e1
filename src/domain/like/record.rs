use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One actor's like state on one post.
///
/// Keyed by (user, post); the row is kept once created. A retracted like is
/// `liked = false`, not a deleted row, so the aggregate never churns rows.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LikeRecord {
    pub user_id: Uuid,
    pub post_id: i64,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
