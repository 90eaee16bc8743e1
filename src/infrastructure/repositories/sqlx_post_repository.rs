use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    post::{
        entity::{PostRef, PostType},
        repository::PostDirectory,
    },
    shared::errors::DomainError,
};

/// Postgres-backed [`PostDirectory`] over the forum's content tables.
pub struct SqlxPostRepository {
    pub pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostDirectory for SqlxPostRepository {
    async fn owner_of(&self, post: PostRef) -> Result<Option<Uuid>, DomainError> {
        let sql = match post.post_type {
            PostType::Discussion => "SELECT user_id FROM discussions WHERE id = $1",
            PostType::Comment => "SELECT user_id FROM comments WHERE id = $1",
        };
        sqlx::query_scalar::<_, Uuid>(sql)
            .bind(post.post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn comment_ids_of(&self, discussion_id: i64) -> Result<Vec<i64>, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT id FROM comments WHERE discussion_id = $1 ORDER BY id",
        )
        .bind(discussion_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
