use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};

/// Stored preference values plus what they currently resolve to once the
/// site defaults are applied.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct NotificationPrefsResponse {
    pub popup_like: Option<bool>,
    pub email_like: Option<bool>,
    pub effective_popup: bool,
    pub effective_email: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePrefsRequest {
    pub popup_like: Option<bool>,
    pub email_like: Option<bool>,
}

/// `GET /me/preferences`: the viewer's like-notification preferences.
pub async fn get_notification_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<NotificationPrefsResponse>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let user_id = claims.actor_id()?;

    let prefs = state
        .users
        .notification_prefs(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let effective = prefs.resolve(
        state.config.notify_popup_default,
        state.config.notify_email_default,
    );
    Ok(Json(NotificationPrefsResponse {
        popup_like: prefs.popup_like,
        email_like: prefs.email_like,
        effective_popup: effective.popup,
        effective_email: effective.email,
    }))
}

/// `PATCH /me/preferences`: update the provided fields, leave the rest.
pub async fn update_notification_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdatePrefsRequest>,
) -> Result<Json<NotificationPrefsResponse>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let user_id = claims.actor_id()?;

    let prefs = state
        .users
        .update_notification_prefs(user_id, body.popup_like, body.email_like)
        .await?;
    let effective = prefs.resolve(
        state.config.notify_popup_default,
        state.config.notify_email_default,
    );
    Ok(Json(NotificationPrefsResponse {
        popup_like: prefs.popup_like,
        email_like: prefs.email_like,
        effective_popup: effective.popup,
        effective_email: effective.email,
    }))
}
