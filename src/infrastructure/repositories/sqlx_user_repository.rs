use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{shared::errors::DomainError, user::preferences::NotificationPrefs};

/// Minimal user lookup needed by the like feature: resolving a profile
/// reference and reading/updating notification preferences.
pub struct SqlxUserRepository {
    pub pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
}

impl UserRef {
    /// Name shown to other users, falling back to the username.
    pub fn public_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

fn infra(e: sqlx::Error) -> DomainError {
    DomainError::InfrastructureError(e.to_string())
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRef>, DomainError> {
        sqlx::query_as::<_, UserRef>(
            "SELECT id, username, display_name FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRef>, DomainError> {
        sqlx::query_as::<_, UserRef>(
            "SELECT id, username, display_name FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    pub async fn notification_prefs(
        &self,
        id: Uuid,
    ) -> Result<Option<NotificationPrefs>, DomainError> {
        sqlx::query_as::<_, NotificationPrefs>(
            "SELECT popup_like, email_like FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)
    }

    /// Partial update: absent fields keep their stored value.
    pub async fn update_notification_prefs(
        &self,
        id: Uuid,
        popup_like: Option<bool>,
        email_like: Option<bool>,
    ) -> Result<NotificationPrefs, DomainError> {
        sqlx::query_as::<_, NotificationPrefs>(
            "UPDATE users \
             SET popup_like = COALESCE($2, popup_like), \
                 email_like = COALESCE($3, email_like) \
             WHERE id = $1 \
             RETURNING popup_like, email_like",
        )
        .bind(id)
        .bind(popup_like)
        .bind(email_like)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)?
        .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}
