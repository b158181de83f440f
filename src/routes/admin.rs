use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginPayload, LoginResponse, SessionResponse},
    error::Result,
    models::admin_session::AdminSession,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let response = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> Result<impl IntoResponse> {
    state.auth_service.logout(session.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn current_session(Extension(session): Extension<AdminSession>) -> impl IntoResponse {
    Json(SessionResponse {
        email: session.email,
        session_id: session.id,
        created_at: session.created_at,
        expires_at: session.expires_at,
    })
}
