use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::{
    like::{record::LikeRecord, repository::LikeStore},
    post::entity::{PostRef, PostType},
    shared::errors::DomainError,
};

/// Postgres-backed [`LikeStore`].
///
/// Each post type has its own like table; the table name always comes from
/// the typed [`PostType::like_table`] map, never from request input.
pub struct SqlxLikeRepository {
    pub pool: PgPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infra(e: sqlx::Error) -> DomainError {
    DomainError::InfrastructureError(e.to_string())
}

#[async_trait]
impl LikeStore for SqlxLikeRepository {
    async fn get_like_state(&self, actor_id: Uuid, post: PostRef) -> Result<bool, DomainError> {
        let (table, id_col) = post.post_type.like_table();
        let sql = format!(
            "SELECT user_id, {id_col} AS post_id, liked, created_at, updated_at \
             FROM {table} WHERE user_id = $1 AND {id_col} = $2"
        );
        let record = sqlx::query_as::<_, LikeRecord>(&sql)
            .bind(actor_id)
            .bind(post.post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infra)?;
        Ok(record.map(|r| r.liked).unwrap_or(false))
    }

    async fn set_like_state(
        &self,
        actor_id: Uuid,
        post: PostRef,
        liked: bool,
    ) -> Result<(), DomainError> {
        let (table, id_col) = post.post_type.like_table();
        // Single upsert keyed on the natural key: concurrent toggles for the
        // same pair cannot race an insert against an insert.
        let sql = format!(
            "INSERT INTO {table} (user_id, {id_col}, liked) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, {id_col}) \
             DO UPDATE SET liked = EXCLUDED.liked, updated_at = NOW()"
        );
        sqlx::query(&sql)
            .bind(actor_id)
            .bind(post.post_id)
            .bind(liked)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        Ok(())
    }

    async fn get_like_count(&self, post: PostRef) -> Result<i64, DomainError> {
        let (table, id_col) = post.post_type.like_table();
        let sql = format!("SELECT COUNT(*) FROM {table} WHERE {id_col} = $1 AND liked");
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(post.post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(infra)
    }

    async fn get_liked_post_ids(
        &self,
        actor_id: Uuid,
        post_type: PostType,
        post_ids: &[i64],
    ) -> Result<HashSet<i64>, DomainError> {
        if post_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let (table, id_col) = post_type.like_table();
        let sql = format!(
            "SELECT {id_col} FROM {table} WHERE user_id = $1 AND {id_col} = ANY($2) AND liked"
        );
        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .bind(actor_id)
            .bind(post_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;
        Ok(ids.into_iter().collect())
    }
}
