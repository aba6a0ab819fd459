//! HTTP API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{SyncServiceStatus, SyncStatus};
use super::sync::SyncResult;

/// Body of `POST /api/sync`.
///
/// Exactly one of the two fields is expected to be set; see
/// `p2g_core::sync::validate_sync_request` for what "set" means.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncPostRequest {
    #[serde(default)]
    pub num_workouts: Option<i32>,
    #[serde(default)]
    pub workout_ids: Option<Vec<String>>,
}

/// Request-level or unexpected failure returned to API callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body of a completed `POST /api/sync`.
///
/// `converToFitSuccess` is the public name of `SyncResult::conversion_success`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncPostResponse {
    pub sync_success: bool,
    pub peloton_download_success: bool,
    pub conver_to_fit_success: bool,
    pub upload_to_garmin_success: bool,
    #[serde(default)]
    pub errors: Vec<ErrorResponse>,
}

impl From<SyncResult> for SyncPostResponse {
    fn from(result: SyncResult) -> Self {
        Self {
            sync_success: result.sync_success,
            peloton_download_success: result.peloton_download_success,
            conver_to_fit_success: result.conversion_success,
            upload_to_garmin_success: result.upload_to_garmin_success,
            errors: result.errors.into_iter().map(|e| ErrorResponse::new(e.message)).collect(),
        }
    }
}

/// Body of `GET /api/sync`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusResponse {
    pub sync_enabled: bool,
    pub sync_status: SyncStatus,
    pub last_sync_time: Option<DateTime<Utc>>,
    pub last_successful_sync_time: Option<DateTime<Utc>>,
    pub next_sync_time: Option<DateTime<Utc>>,
}

impl SyncStatusResponse {
    pub fn from_status(sync_enabled: bool, status: SyncServiceStatus) -> Self {
        Self {
            sync_enabled,
            sync_status: status.status,
            last_sync_time: status.last_sync_time,
            last_successful_sync_time: status.last_successful_sync_time,
            next_sync_time: status.next_sync_time,
        }
    }
}
