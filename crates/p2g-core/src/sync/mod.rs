//! Sync interface and the pieces around it.
//!
//! The download, conversion and upload stages live behind [`SyncService`].
//! This module only decides what to ask for and records how it went.

mod remote;
mod status;
mod validation;


pub use remote::RemoteSyncService;
pub use status::SyncStatusTracker;
pub use validation::{validate_sync_request, SyncTarget};

use async_trait::async_trait;

use crate::error::SyncOutcome;
use p2g_types::models::{SyncResult, WorkoutType};

/// Entry point of the download/convert/upload workflow.
///
/// Implementations report per-stage results in [`SyncResult`]; an `Err` means
/// the run could not produce a result at all.
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Sync the `num_workouts` most recent workouts.
    async fn sync_by_count(&self, num_workouts: u32) -> SyncOutcome<SyncResult>;

    /// Sync the given workouts, skipping any whose type is in `exclude`.
    async fn sync_by_ids(
        &self,
        workout_ids: &[String],
        exclude: Option<&[WorkoutType]>,
    ) -> SyncOutcome<SyncResult>;
}
