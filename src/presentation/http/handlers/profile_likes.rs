use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, Method},
};
use serde_json::json;
use uuid::Uuid;

use crate::domain::user::value_objects::Username;
use crate::infrastructure::repositories::sqlx_user_repository::UserRef;
use crate::presentation::http::{
    errors::AppError,
    middleware::user::{decode_optional_user_claims, decode_required_user_claims},
    state::AppState,
};

async fn resolve_user_ref(state: &AppState, user_ref: String) -> Result<UserRef, AppError> {
    // An id-shaped ref is a user id, anything else is a username.
    let found = match Uuid::parse_str(&user_ref) {
        Ok(id) => state.users.find_by_id(id).await?,
        Err(_) => {
            let username = Username::new(user_ref)
                .map_err(|_| AppError::BadRequest("Invalid user reference".into()))?;
            state.users.find_by_username(&username.value).await?
        }
    };
    found.ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// `POST /plugin/like/{user_ref}`: legacy single-type variant: "like" a
/// user's profile. There is no unlike transition here; every call produces
/// a fresh activity and an inform message for the actor.
pub async fn like_profile(
    State(state): State<AppState>,
    method: Method,
    Path(user_ref): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let actor_id = claims.actor_id()?;
    let perms = state.permission_gate.snapshot_for(Some(&claims.role));
    if !perms.can_create_like {
        return Err(AppError::Forbidden("Missing right: likes.create".into()));
    }

    let target = resolve_user_ref(&state, user_ref).await?;
    let route = format!("/profile/{}", target.username);
    let delivered = state
        .dispatcher
        .profile_liked(actor_id, target.id, route)
        .await;

    let message = if delivered {
        format!("You've liked {}!", target.public_name())
    } else {
        format!("Liking {} failed!", target.public_name())
    };
    Ok(Json(json!({ "message": message })))
}

/// `GET /profile/{user_ref}/like-button`: how (and whether) the like
/// button appears on a profile page.
///
/// Hidden for guests, for the viewer's own profile, and for profiles whose
/// owner would never see the resulting notification. The display mode flag
/// picks between a standalone button and a member-options dropdown entry.
pub async fn profile_like_button(
    State(state): State<AppState>,
    Path(user_ref): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_optional_user_claims(&headers, &state.config.jwt_secret);
    let target = resolve_user_ref(&state, user_ref).await?;

    let viewer_id = match claims {
        Some(ref c) => Some(c.actor_id()?),
        None => None,
    };
    let perms = state
        .permission_gate
        .snapshot_for(claims.as_ref().map(|c| c.role.as_str()));

    let hidden = Json(json!({ "button": serde_json::Value::Null }));
    if !perms.can_create_like || viewer_id == Some(target.id) {
        return Ok(hidden);
    }
    let prefs = state
        .users
        .notification_prefs(target.id)
        .await?
        .unwrap_or_default();
    if prefs
        .resolve(
            state.config.notify_popup_default,
            state.config.notify_email_default,
        )
        .silent()
    {
        // Liking this profile would never be seen; don't offer it.
        return Ok(hidden);
    }

    let placement = if state.config.use_dropdown_button {
        "dropdown"
    } else {
        "button"
    };
    Ok(Json(json!({
        "button": {
            "text": "Like",
            "url": format!("/plugin/like/{}", target.username),
            "placement": placement,
            "css_class": "LikeButton Hijack",
        }
    })))
}
