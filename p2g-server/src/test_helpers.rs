//! Test helpers for p2g-server unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use p2g_core::{SyncError, SyncOutcome, SyncService};
use p2g_types::models::{AppConfig, SyncResult, WorkoutType};

use crate::state::AppState;

/// A call observed by [`FakeSyncService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCall {
    ByCount(u32),
    ByIds { workout_ids: Vec<String>, exclude: Option<Vec<WorkoutType>> },
}

enum Behavior {
    Return(SyncResult),
    Fail(String),
    Panic,
}

/// Sync service that records calls and answers with a canned behavior.
pub struct FakeSyncService {
    behavior: Behavior,
    calls: Mutex<Vec<SyncCall>>,
}

impl FakeSyncService {
    pub fn returning(result: SyncResult) -> Arc<Self> {
        Arc::new(Self { behavior: Behavior::Return(result), calls: Mutex::new(Vec::new()) })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self { behavior: Behavior::Fail(message.to_string()), calls: Mutex::new(Vec::new()) })
    }

    pub fn panicking() -> Arc<Self> {
        Arc::new(Self { behavior: Behavior::Panic, calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<SyncCall> {
        self.calls.lock().clone()
    }

    fn answer(&self, call: SyncCall) -> SyncOutcome<SyncResult> {
        self.calls.lock().push(call);
        match &self.behavior {
            Behavior::Return(result) => Ok(result.clone()),
            Behavior::Fail(message) => Err(SyncError::from(message.as_str())),
            Behavior::Panic => panic!("fake sync service panicked"),
        }
    }
}

#[async_trait]
impl SyncService for FakeSyncService {
    async fn sync_by_count(&self, num_workouts: u32) -> SyncOutcome<SyncResult> {
        self.answer(SyncCall::ByCount(num_workouts))
    }

    async fn sync_by_ids(
        &self,
        workout_ids: &[String],
        exclude: Option<&[WorkoutType]>,
    ) -> SyncOutcome<SyncResult> {
        self.answer(SyncCall::ByIds {
            workout_ids: workout_ids.to_vec(),
            exclude: exclude.map(<[WorkoutType]>::to_vec),
        })
    }
}

/// Create a minimal `AppState` around `service` with default configuration.
pub fn test_app_state(service: Arc<FakeSyncService>) -> AppState {
    test_app_state_with_config(service, AppConfig::default())
}

pub fn test_app_state_with_config(service: Arc<FakeSyncService>, config: AppConfig) -> AppState {
    let service: Arc<dyn SyncService> = service;
    AppState::new(service, config)
}
