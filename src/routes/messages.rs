use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::message_dto::{
        CreateMessagePayload, MessageListQuery, MessagePageResponse, MessageResponse,
        PlaybackQuery, PlaybackResponse,
    },
    error::Result,
    routes::feed::live_feed,
    services::{message_view::MessageView, playback},
    utils::time,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessagePayload,
    responses(
        (status = 201, description = "Message stored", body = MessageResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_message(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateMessagePayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let new_message = payload.into_new_message(state.config.max_image_bytes, time::today())?;
    let message = state.message_service.create(new_message).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    params(
        ("camp" = Option<String>, Query, description = "Camp code or numeric alias; empty for all"),
        ("batch" = Option<String>, Query, description = "Batch number; empty for all"),
        ("page" = Option<usize>, Query, description = "Page number, starting at 1")
    ),
    responses(
        (status = 200, description = "One page of messages", body = MessagePageResponse),
        (status = 400, description = "Invalid filter"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn list_messages(
    State(state): State<AppState>,
    query: std::result::Result<Query<MessageListQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let filter = query.filter()?;
    let all = state.message_service.list_all().await?;

    let mut view = MessageView::new(all);
    view.set_filter(filter);
    view.set_page(query.page.unwrap_or(1));

    Ok(Json(MessagePageResponse::from(&view)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Message not found"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn delete_message(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    state.message_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/messages/playback",
    params(
        ("camp" = Option<String>, Query, description = "Camp code or numeric alias; empty for all"),
        ("batch" = Option<String>, Query, description = "Batch number; empty for all")
    ),
    responses(
        (status = 200, description = "Reveal timings", body = PlaybackResponse),
        (status = 400, description = "Invalid filter"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn playback_schedule(
    State(state): State<AppState>,
    query: std::result::Result<Query<PlaybackQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let filter = query.filter()?;
    let all = state.message_service.list_all().await?;

    let mut view = MessageView::new(all);
    view.set_filter(filter);
    // Nothing matched: play everything instead of an empty reel.
    let reel = if view.filtered().is_empty() {
        view.all()
    } else {
        view.filtered()
    };

    let schedule = playback::schedule(reel, &state.config.closing_message);
    Ok(Json(PlaybackResponse::from(schedule)))
}

#[utoipa::path(
    get,
    path = "/api/admin/messages/stream",
    responses(
        (status = 200, description = "Server-sent events: snapshot, created, deleted"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn stream_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rx = state.feed.subscribe();
    let snapshot = state
        .message_service
        .list_all()
        .await?
        .into_iter()
        .map(MessageResponse::from)
        .collect();
    Ok(live_feed(rx, Default::default(), snapshot))
}
