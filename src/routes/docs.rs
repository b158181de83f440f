use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    auth_dto::{LoginPayload, LoginResponse, SessionResponse},
    message_dto::{
        CreateMessagePayload, CueResponse, MessagePageResponse, MessageResponse, PlaybackResponse,
    },
    secret_dto::{
        AccessCodePayload, AccessCodeResponse, CampResponse, FontResponse, SecretPassagePayload,
        SecretPassageResponse,
    },
};
use crate::models::camp::Camp;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::catalog::list_camps,
        crate::routes::catalog::list_fonts,
        crate::routes::messages::create_message,
        crate::routes::messages::list_messages,
        crate::routes::messages::delete_message,
        crate::routes::messages::playback_schedule,
        crate::routes::messages::stream_messages,
        crate::routes::secret::open_secret_passage,
        crate::routes::secret::list_secret_messages,
        crate::routes::secret::stream_secret_messages,
        crate::routes::secret::create_access_code,
        crate::routes::admin::login,
        crate::routes::admin::logout,
        crate::routes::admin::current_session,
    ),
    components(schemas(
        Camp,
        CreateMessagePayload,
        MessageResponse,
        MessagePageResponse,
        CueResponse,
        PlaybackResponse,
        SecretPassagePayload,
        SecretPassageResponse,
        AccessCodePayload,
        AccessCodeResponse,
        CampResponse,
        FontResponse,
        LoginPayload,
        LoginResponse,
        SessionResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
