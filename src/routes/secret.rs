use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        message_dto::MessageResponse,
        secret_dto::{
            AccessCodePayload, AccessCodeResponse, SecretPassagePayload, SecretPassageResponse,
        },
    },
    error::{Error, Result},
    models::{batch::Batch, camp::Camp},
    routes::feed::live_feed,
    services::message_view::MessageFilter,
    utils::access_code::{self, AccessTarget},
    AppState,
};

/// Cohort from the URL; anything unrecognised is reported like a bad code.
fn cohort_from_path(camp: &str, batch: &str) -> Result<AccessTarget> {
    let camp = Camp::parse(camp).ok_or(Error::InvalidAccessCode)?;
    let batch = batch.parse::<Batch>().map_err(|_| Error::InvalidAccessCode)?;
    Ok(AccessTarget { camp, batch })
}

#[utoipa::path(
    post,
    path = "/api/secret-passage",
    request_body = SecretPassagePayload,
    responses(
        (status = 200, description = "Code accepted", body = SecretPassageResponse),
        (status = 400, description = "Missing or invalid code")
    )
)]
#[axum::debug_handler]
pub async fn open_secret_passage(
    payload: std::result::Result<Json<SecretPassagePayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let target = access_code::decode(&payload.code).map_err(|err| {
        tracing::debug!("secret passage rejected: {}", err);
        err
    })?;
    Ok(Json(SecretPassageResponse::from(target)))
}

#[utoipa::path(
    get,
    path = "/api/secret-messages/{camp}/{batch}",
    params(
        ("camp" = String, Path, description = "Camp code or numeric alias"),
        ("batch" = u8, Path, description = "Batch number")
    ),
    responses(
        (status = 200, description = "Messages of the cohort, newest first", body = [MessageResponse]),
        (status = 400, description = "Unknown cohort")
    )
)]
#[axum::debug_handler]
pub async fn list_secret_messages(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path((camp, batch)) = path?;
    let target = cohort_from_path(&camp, &batch)?;
    let messages: Vec<MessageResponse> = state
        .message_service
        .list_cohort(target.camp, target.batch)
        .await?
        .into_iter()
        .map(MessageResponse::from)
        .collect();
    Ok(Json(messages))
}

#[utoipa::path(
    get,
    path = "/api/secret-messages/{camp}/{batch}/stream",
    params(
        ("camp" = String, Path, description = "Camp code or numeric alias"),
        ("batch" = u8, Path, description = "Batch number")
    ),
    responses(
        (status = 200, description = "Server-sent events for the cohort: snapshot, created, deleted"),
        (status = 400, description = "Unknown cohort")
    )
)]
pub async fn stream_secret_messages(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path((camp, batch)) = path?;
    let target = cohort_from_path(&camp, &batch)?;
    let rx = state.feed.subscribe();
    let snapshot = state
        .message_service
        .list_cohort(target.camp, target.batch)
        .await?
        .into_iter()
        .map(MessageResponse::from)
        .collect();
    Ok(live_feed(
        rx,
        MessageFilter::cohort(target.camp, target.batch),
        snapshot,
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/access-codes",
    request_body = AccessCodePayload,
    responses(
        (status = 200, description = "Access code for the cohort", body = AccessCodeResponse),
        (status = 400, description = "Invalid cohort"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn create_access_code(
    payload: std::result::Result<Json<AccessCodePayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let target = AccessTarget {
        camp: payload.camp,
        batch: payload.batch,
    };
    Ok(Json(AccessCodeResponse {
        code: access_code::encode(target.camp, target.batch),
        route: target.route(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_cohort_accepts_aliases_and_hides_failures() {
        let target = cohort_from_path("2", "05").unwrap();
        assert_eq!(target.camp, Camp::Frnt);
        assert_eq!(target.batch.get(), 5);
        assert!(matches!(cohort_from_path("XX", "1"), Err(Error::InvalidAccessCode)));
        assert!(matches!(cohort_from_path("BACK", "100"), Err(Error::InvalidAccessCode)));
    }
}
