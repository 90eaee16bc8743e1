use super::{
    handlers::{discussions, health, likes, me, profile_likes},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{any, get},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Reaction toggling. The two /plugin endpoints accept any method and
        // answer non-POST with 405 themselves, matching their legacy
        // contract.
        .route("/plugin/rjlike/{post_type}/{post_id}", any(likes::toggle_like))
        .route("/plugin/like/{user_ref}", any(profile_likes::like_profile))
        // Page-render data
        .route(
            "/discussions/{id}/reactions",
            get(discussions::get_discussion_reactions),
        )
        .route(
            "/profile/{user_ref}/like-button",
            get(profile_likes::profile_like_button),
        )
        // Viewer preferences
        .route(
            "/me/preferences",
            get(me::get_notification_preferences).patch(me::update_notification_preferences),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
