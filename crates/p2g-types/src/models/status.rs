//! Automatic sync status records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of the automatic background sync.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    NotRunning,
    Running,
    Stopped,
    UnHealthy,
}

/// Snapshot of the automatic sync bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncServiceStatus {
    pub status: SyncStatus,
    pub last_error_message: Option<String>,
    pub last_sync_time: Option<DateTime<Utc>>,
    pub last_successful_sync_time: Option<DateTime<Utc>>,
    pub next_sync_time: Option<DateTime<Utc>>,
}
