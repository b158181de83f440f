pub mod admin;
pub mod catalog;
pub mod docs;
pub mod feed;
pub mod health;
pub mod messages;
pub mod secret;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{
    auth::require_admin,
    cors::api_cors,
    rate_limit::{new_rps_state, rps_middleware},
};
use crate::AppState;

/// Room for a maximal Base64 image plus the rest of the form.
fn body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes / 3 * 4 + 64 * 1024
}

pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let base_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api/camps", get(catalog::list_camps))
        .route("/api/fonts", get(catalog::list_fonts))
        .route("/api/openapi.json", get(docs::openapi_json));

    let public_api = Router::new()
        .route("/api/messages", post(messages::create_message))
        .route("/api/secret-passage", post(secret::open_secret_passage))
        .route(
            "/api/secret-messages/:camp/:batch",
            get(secret::list_secret_messages),
        )
        .route(
            "/api/secret-messages/:camp/:batch/stream",
            get(secret::stream_secret_messages),
        )
        .route("/api/admin/login", post(admin::login))
        .layer(from_fn_with_state(
            new_rps_state(config.public_rps),
            rps_middleware,
        ));

    let admin_api = Router::new()
        .route("/api/admin/messages", get(messages::list_messages))
        .route(
            "/api/admin/messages/playback",
            get(messages::playback_schedule),
        )
        .route("/api/admin/messages/stream", get(messages::stream_messages))
        .route("/api/admin/messages/:id", delete(messages::delete_message))
        .route("/api/admin/access-codes", post(secret::create_access_code))
        .route("/api/admin/session", get(admin::current_session))
        .route("/api/admin/logout", post(admin::logout))
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .layer(from_fn_with_state(
            new_rps_state(config.admin_rps),
            rps_middleware,
        ));

    base_routes
        .merge(public_api)
        .merge(admin_api)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit(config.max_image_bytes)))
}
