//! Sync request validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a sync request is rejected before any sync work starts.
///
/// The display strings are part of the public HTTP contract and must not change.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum SyncRequestError {
    /// Neither a positive workout count nor a non-empty id list was given.
    #[error("Either NumWorkouts or WorkoutIds must be set.")]
    NothingToSync,

    /// A positive workout count and a non-empty id list were both given.
    #[error("NumWorkouts and WorkoutIds cannot both be set.")]
    ConflictingTargets,
}
