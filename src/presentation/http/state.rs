use crate::{
    application::{
        notify_like::dispatcher::NotificationDispatcher, toggle_like::use_case::ToggleLikeUseCase,
        view_reactions::use_case::ViewReactionsUseCase,
    },
    config::Config,
    domain::{post::repository::PostDirectory, shared::permissions::PermissionGate},
    infrastructure::repositories::sqlx_user_repository::SqlxUserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub posts: Arc<dyn PostDirectory>,
    pub users: Arc<SqlxUserRepository>,
    pub permission_gate: Arc<dyn PermissionGate>,
    pub toggle_like: Arc<ToggleLikeUseCase>,
    pub view_reactions: Arc<ViewReactionsUseCase>,
    pub dispatcher: Arc<NotificationDispatcher>,
}
