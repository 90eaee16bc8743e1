use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, Method},
};
use serde_json::json;

use crate::domain::post::entity::{PostRef, PostType};
use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};
use crate::presentation::view::button::{render_like_button, target_selector};

/// `POST /plugin/rjlike/{post_type}/{post_id}`: toggle the viewer's like.
///
/// Returns a DOM-patch instruction addressing the post's button, not a full
/// page. The endpoint predates method routing, so the POST check is explicit
/// and anything else is answered with 405.
pub async fn toggle_like(
    State(state): State<AppState>,
    method: Method,
    Path((post_type, post_id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let actor_id = claims.actor_id()?;

    let post_type: PostType = post_type.parse()?;
    let post = PostRef::new(post_type, post_id)?;
    let perms = state.permission_gate.snapshot_for(Some(&claims.role));

    // Post existence is this boundary's duty, not the engine's. The owner
    // doubles as the notification target.
    let owner_id = state
        .posts
        .owner_of(post)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {} does not exist", post_type, post_id)))?;

    let outcome = state.toggle_like.toggle(actor_id, perms, post).await?;

    // Only the transition into liked notifies; the dispatcher swallows its
    // own failures because the like is already persisted.
    if outcome.liked {
        state.dispatcher.like_created(actor_id, owner_id, post).await;
    }

    let button = render_like_button(post, outcome.like_count, outcome.liked, perms.can_create_like);
    Ok(Json(json!({
        "target": target_selector(post),
        "markup": button.to_markup(),
        "mode": "ReplaceWith",
        "liked": outcome.liked,
        "like_count": outcome.like_count,
    })))
}
