use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde::Serialize;
use ts_rs::TS;

use crate::domain::post::entity::PostType;
use crate::presentation::http::{
    errors::AppError, middleware::user::decode_optional_user_claims, state::AppState,
};
use crate::presentation::view::button::{ButtonView, render_like_button, target_selector};

/// One rendered like button on a discussion page.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ReactionView {
    pub post_type: PostType,
    pub post_id: i64,
    pub like_count: i64,
    pub liked_by_viewer: bool,
    pub target: String,
    pub button: ButtonView,
}

/// `GET /discussions/{id}/reactions`: like buttons for the discussion and
/// every comment in it, for the current viewer.
///
/// The viewer's own likes are prefetched once for the whole page instead of
/// queried per post.
pub async fn get_discussion_reactions(
    State(state): State<AppState>,
    Path(discussion_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReactionView>>, AppError> {
    let claims = decode_optional_user_claims(&headers, &state.config.jwt_secret);
    let perms = state
        .permission_gate
        .snapshot_for(claims.as_ref().map(|c| c.role.as_str()));
    if !perms.can_see_buttons() {
        return Err(AppError::Forbidden("Missing right: likes.view".into()));
    }
    let viewer = match claims {
        Some(ref c) => Some(c.actor_id()?),
        None => None,
    };

    let reactions = state
        .view_reactions
        .for_discussion(viewer, discussion_id)
        .await?;

    let views = reactions
        .into_iter()
        .map(|r| ReactionView {
            post_type: r.post.post_type,
            post_id: r.post.post_id,
            like_count: r.like_count,
            liked_by_viewer: r.liked_by_viewer,
            target: target_selector(r.post),
            button: render_like_button(
                r.post,
                r.like_count,
                r.liked_by_viewer,
                perms.can_create_like,
            ),
        })
        .collect();
    Ok(Json(views))
}
