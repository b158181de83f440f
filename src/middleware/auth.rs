use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::utils::token::{decode_token, ADMIN_ROLE};
use crate::AppState;

fn reject(status: StatusCode, code: &str) -> Response {
    (status, Json(json!({ "error": code }))).into_response()
}

/// Admits requests carrying a bearer token for an open admin session.
///
/// On success the token claims and the session row are placed in the
/// request extensions.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return reject(StatusCode::UNAUTHORIZED, "missing_authorization");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return reject(StatusCode::UNAUTHORIZED, "bad_authorization");
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return reject(StatusCode::UNAUTHORIZED, "unsupported_scheme");
    };

    let claims = match decode_token(&state.config.jwt_secret, token.trim()) {
        Ok(claims) => claims,
        Err(_) => return reject(StatusCode::UNAUTHORIZED, "invalid_token"),
    };

    let role = claims.role.clone().unwrap_or_default();
    if !role.eq_ignore_ascii_case(ADMIN_ROLE) {
        return reject(StatusCode::FORBIDDEN, "forbidden");
    }

    let session = match state.auth_service.active_session(claims.sid).await {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };

    req.extensions_mut().insert(claims);
    req.extensions_mut().insert(session);
    next.run(req).await
}
