use axum::{response::IntoResponse, Json};

use crate::dto::secret_dto::{CampResponse, FontResponse};
use crate::models::{camp::Camp, font::FONT_OPTIONS};

#[utoipa::path(
    get,
    path = "/api/camps",
    responses(
        (status = 200, description = "Known camps", body = [CampResponse])
    )
)]
pub async fn list_camps() -> impl IntoResponse {
    let camps: Vec<CampResponse> = Camp::ALL.into_iter().map(CampResponse::from).collect();
    Json(camps)
}

#[utoipa::path(
    get,
    path = "/api/fonts",
    responses(
        (status = 200, description = "Fonts a message can be written in", body = [FontResponse])
    )
)]
pub async fn list_fonts() -> impl IntoResponse {
    let fonts: Vec<FontResponse> = FONT_OPTIONS.iter().map(FontResponse::from).collect();
    Json(fonts)
}
