//! Sync request validation.

use p2g_types::error::SyncRequestError;
use p2g_types::models::SyncPostRequest;

/// What a well-formed sync request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncTarget {
    /// The most recent `n` workouts, `n > 0`.
    Count(u32),
    /// An explicit, non-empty list of workout ids.
    Ids(Vec<String>),
}

/// Collapse the two optional request fields into a single target.
///
/// `num_workouts` counts only when strictly positive and `workout_ids` only when
/// non-empty. A missing request is the same as one with neither field set.
pub fn validate_sync_request(
    request: Option<&SyncPostRequest>,
) -> Result<SyncTarget, SyncRequestError> {
    let Some(request) = request else {
        return Err(SyncRequestError::NothingToSync);
    };

    let count = request.num_workouts.and_then(|n| u32::try_from(n).ok()).filter(|&n| n > 0);
    let ids = request.workout_ids.as_ref().filter(|ids| !ids.is_empty());

    match (count, ids) {
        (None, None) => Err(SyncRequestError::NothingToSync),
        (Some(_), Some(_)) => Err(SyncRequestError::ConflictingTargets),
        (Some(n), None) => Ok(SyncTarget::Count(n)),
        (None, Some(ids)) => Ok(SyncTarget::Ids(ids.clone())),
    }
}
