//! Outcome records produced by the sync workflow.

use serde::{Deserialize, Serialize};

/// One failure encountered during a sync run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Result of a single sync invocation.
///
/// `sync_success` is the overall outcome; the three stage flags are
/// independent of each other. `errors` keeps insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub sync_success: bool,
    #[serde(default)]
    pub peloton_download_success: bool,
    #[serde(default)]
    pub conversion_success: bool,
    #[serde(default)]
    pub upload_to_garmin_success: bool,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl SyncResult {
    /// A result where every stage succeeded.
    pub fn succeeded() -> Self {
        Self {
            sync_success: true,
            peloton_download_success: true,
            conversion_success: true,
            upload_to_garmin_success: true,
            errors: Vec::new(),
        }
    }

    /// A failed result carrying a single error message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self { errors: vec![ErrorDetail::new(message)], ..Self::default() }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(ErrorDetail::new(message));
    }
}

/// Workout categories accepted by the exclusion filter of an id-based sync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    BikeBootcamp,
    Cardio,
    Cycling,
    Meditation,
    Running,
    Strength,
    Stretching,
    Walking,
    Yoga,
    Rowing,
    TreadBootcamp,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_result_uses_camel_case() {
        let mut result = SyncResult::succeeded();
        result.push_error("late");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["syncSuccess"], true);
        assert_eq!(json["pelotonDownloadSuccess"], true);
        assert_eq!(json["conversionSuccess"], true);
        assert_eq!(json["uploadToGarminSuccess"], true);
        assert_eq!(json["errors"][0]["message"], "late");
    }

    #[test]
    fn test_sync_result_tolerates_missing_stage_flags() {
        let result: SyncResult = serde_json::from_str(r#"{"syncSuccess":false}"#).unwrap();
        assert_eq!(result, SyncResult::default());
    }

    #[test]
    fn test_failed_keeps_message() {
        let result = SyncResult::failed("download timed out");
        assert!(!result.sync_success);
        assert_eq!(result.errors, vec![ErrorDetail::new("download timed out")]);
    }

    #[test]
    fn test_workout_type_wire_names() {
        let json = serde_json::to_string(&[WorkoutType::BikeBootcamp, WorkoutType::Yoga]).unwrap();
        assert_eq!(json, r#"["bike_bootcamp","yoga"]"#);
    }
}
