//! Sync handlers

use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};

use p2g_core::{validate_sync_request, SyncOutcome, SyncService, SyncTarget};
use p2g_types::models::{
    ErrorResponse, SyncPostRequest, SyncPostResponse, SyncResult, SyncStatusResponse,
};

use crate::state::AppState;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

fn unexpected_error(detail: impl std::fmt::Display) -> ApiError {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unexpected error occurred: {}", detail),
    )
}

/// `POST /api/sync`
///
/// 400 on a malformed or rejected request, 500 when the sync service fails,
/// otherwise 201 if the sync succeeded and 200 if it did not.
pub async fn sync_workouts(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SyncPostResponse>), ApiError> {
    let request = parse_sync_request(&body)?;

    let target = validate_sync_request(request.as_ref()).map_err(|e| {
        tracing::warn!("[Sync] Rejected request: {}", e);
        error_response(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let service = state.sync_service();
    let result = match tokio::spawn(async move { dispatch(service.as_ref(), target).await }).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::error!("[Sync] Sync failed: {}", e);
            return Err(unexpected_error(e));
        },
        Err(e) => {
            tracing::error!("[Sync] Sync task panicked: {}", e);
            return Err(unexpected_error(format!("sync task panicked: {e}")));
        },
    };

    let status = if result.sync_success { StatusCode::CREATED } else { StatusCode::OK };
    tracing::info!(
        "[Sync] Completed: success={} download={} convert={} upload={} errors={}",
        result.sync_success,
        result.peloton_download_success,
        result.conversion_success,
        result.upload_to_garmin_success,
        result.errors.len()
    );

    Ok((status, Json(SyncPostResponse::from(result))))
}

/// An empty body or a JSON `null` is an absent request.
fn parse_sync_request(body: &[u8]) -> Result<Option<SyncPostRequest>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("[Sync] Unparseable request body: {}", e);
        error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
    })
}

async fn dispatch(service: &dyn SyncService, target: SyncTarget) -> SyncOutcome<SyncResult> {
    match target {
        SyncTarget::Count(num_workouts) => {
            tracing::info!("[Sync] Syncing {} most recent workouts", num_workouts);
            service.sync_by_count(num_workouts).await
        },
        SyncTarget::Ids(workout_ids) => {
            tracing::info!("[Sync] Syncing {} workouts by id", workout_ids.len());
            service.sync_by_ids(&workout_ids, None).await
        },
    }
}

/// `GET /api/sync`
pub async fn get_sync_status(State(state): State<AppState>) -> Json<SyncStatusResponse> {
    Json(SyncStatusResponse::from_status(state.auto_sync().enabled, state.sync_status().snapshot()))
}
