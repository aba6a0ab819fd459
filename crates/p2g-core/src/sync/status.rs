//! Bookkeeping for the automatic background sync.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use p2g_types::models::{SyncResult, SyncServiceStatus, SyncStatus};

const UNKNOWN_FAILURE: &str = "Sync failed without reporting an error.";

/// Thread-safe holder of the current [`SyncServiceStatus`].
#[derive(Debug, Default)]
pub struct SyncStatusTracker {
    inner: RwLock<SyncServiceStatus>,
}

impl SyncStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SyncServiceStatus {
        self.inner.read().clone()
    }

    /// Mark a run as started.
    pub fn begin(&self) {
        let mut status = self.inner.write();
        status.status = SyncStatus::Running;
        status.last_sync_time = Some(Utc::now());
    }

    /// Record the result of a finished run.
    pub fn complete(&self, result: &SyncResult, next_sync_time: Option<DateTime<Utc>>) {
        let mut status = self.inner.write();
        status.next_sync_time = next_sync_time;

        if result.sync_success {
            status.status = SyncStatus::NotRunning;
            status.last_successful_sync_time = status.last_sync_time.or_else(|| Some(Utc::now()));
            status.last_error_message = None;
        } else {
            let message = result
                .errors
                .first()
                .map_or_else(|| UNKNOWN_FAILURE.to_string(), |e| e.message.clone());
            status.status = SyncStatus::UnHealthy;
            status.last_error_message = Some(message);
        }
    }

    /// Record a run that produced no result.
    pub fn fail(&self, message: impl Into<String>, next_sync_time: Option<DateTime<Utc>>) {
        let mut status = self.inner.write();
        status.status = SyncStatus::UnHealthy;
        status.last_error_message = Some(message.into());
        status.next_sync_time = next_sync_time;
    }

    /// Mark the background sync as switched off.
    pub fn stop(&self) {
        let mut status = self.inner.write();
        status.status = SyncStatus::Stopped;
        status.next_sync_time = None;
    }

    pub fn schedule(&self, next_sync_time: DateTime<Utc>) {
        self.inner.write().next_sync_time = Some(next_sync_time);
    }
}
