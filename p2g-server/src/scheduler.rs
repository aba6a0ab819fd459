//! Automatic Sync Scheduler
//!
//! Background task that periodically syncs the most recent workouts.
//!
//! - Enabled via `autoSync.enabled`
//! - Runs every `autoSync.intervalSecs` seconds, first run at startup
//! - Each run syncs `autoSync.numWorkouts` workouts
//! - Outcome is recorded in the sync status tracker and served on `GET /api/sync`

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::state::AppState;

/// Start the automatic sync scheduler as a background tokio task.
///
/// Returns `None` and marks the tracker as stopped when auto sync is disabled.
pub fn start_auto_sync(state: AppState) -> Option<JoinHandle<()>> {
    let settings = state.auto_sync().clone();

    if !settings.enabled {
        state.sync_status().stop();
        tracing::info!("[AutoSync] Automatic sync disabled");
        return None;
    }

    let period = Duration::from_secs(settings.interval_secs);
    state.sync_status().schedule(Utc::now());

    Some(tokio::spawn(async move {
        tracing::info!(
            "[AutoSync] Scheduler started: {} workouts every {}s",
            settings.num_workouts,
            settings.interval_secs
        );

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let tick = ticker.tick().await;
            run_once(&state, settings.num_workouts, tick + period).await;
        }
    }))
}

/// Wall-clock time of the ticker deadline `next_tick`.
fn wall_clock_at(next_tick: Instant) -> Option<DateTime<Utc>> {
    let remaining = next_tick.saturating_duration_since(Instant::now());
    chrono::Duration::from_std(remaining).ok().map(|d| Utc::now() + d)
}

/// Run a single automatic sync and record its outcome.
///
/// `next_tick` is the ticker deadline of the following run.
pub(crate) async fn run_once(state: &AppState, num_workouts: u32, next_tick: Instant) {
    let tracker = state.sync_status();
    tracker.begin();

    let service = state.sync_service();
    let outcome = tokio::spawn(async move { service.sync_by_count(num_workouts).await }).await;
    let next_sync_time = wall_clock_at(next_tick);

    match outcome {
        Err(e) => {
            tracing::error!("[AutoSync] Sync task panicked: {}", e);
            tracker.fail(format!("sync task panicked: {e}"), next_sync_time);
        },
        Ok(Ok(result)) => {
            if result.sync_success {
                tracing::info!("[AutoSync] Synced {} most recent workouts", num_workouts);
            } else {
                tracing::warn!(
                    "[AutoSync] Sync finished with {} error(s)",
                    result.errors.len()
                );
            }
            tracker.complete(&result, next_sync_time);
        },
        Ok(Err(e)) => {
            tracing::error!("[AutoSync] Sync failed: {}", e);
            tracker.fail(e.to_string(), next_sync_time);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_app_state, test_app_state_with_config, FakeSyncService, SyncCall};
    use p2g_types::models::{AppConfig, SyncResult, SyncStatus};

    #[tokio::test]
    async fn test_disabled_scheduler_marks_stopped() {
        let service = FakeSyncService::returning(SyncResult::succeeded());
        let state = test_app_state(service.clone());

        assert!(start_auto_sync(state.clone()).is_none());
        assert_eq!(state.sync_status().snapshot().status, SyncStatus::Stopped);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_run_once_success() {
        let service = FakeSyncService::returning(SyncResult::succeeded());
        let state = test_app_state(service.clone());

        run_once(&state, 5, Instant::now() + Duration::from_secs(60)).await;

        let status = state.sync_status().snapshot();
        assert_eq!(service.calls(), vec![SyncCall::ByCount(5)]);
        assert_eq!(status.status, SyncStatus::NotRunning);
        assert!(status.last_successful_sync_time.is_some());
        assert!(status.next_sync_time.is_some());
    }

    #[tokio::test]
    async fn test_run_once_unsuccessful_result() {
        let service = FakeSyncService::returning(SyncResult::failed("upload rejected"));
        let state = test_app_state(service);

        run_once(&state, 3, Instant::now() + Duration::from_secs(60)).await;

        let status = state.sync_status().snapshot();
        assert_eq!(status.status, SyncStatus::UnHealthy);
        assert_eq!(status.last_error_message.as_deref(), Some("upload rejected"));
        assert!(status.last_successful_sync_time.is_none());
    }

    #[tokio::test]
    async fn test_run_once_service_failure() {
        let service = FakeSyncService::failing("worker offline");
        let state = test_app_state(service);

        run_once(&state, 3, Instant::now() + Duration::from_secs(60)).await;

        let status = state.sync_status().snapshot();
        assert_eq!(status.status, SyncStatus::UnHealthy);
        assert_eq!(status.last_error_message.as_deref(), Some("worker offline"));
    }

    #[tokio::test]
    async fn test_enabled_scheduler_runs_immediately() {
        let service = FakeSyncService::returning(SyncResult::succeeded());
        let mut config = AppConfig::default();
        config.auto_sync.enabled = true;
        config.auto_sync.num_workouts = 7;
        let state = test_app_state_with_config(service.clone(), config);

        let handle = start_auto_sync(state.clone()).expect("scheduler should start");
        assert!(state.sync_status().snapshot().next_sync_time.is_some());
        for _ in 0..50 {
            if !service.calls().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        handle.abort();

        assert_eq!(service.calls().first(), Some(&SyncCall::ByCount(7)));
    }

    #[tokio::test]
    async fn test_run_once_panic_marks_unhealthy() {
        let service = FakeSyncService::panicking();
        let state = test_app_state(service);

        run_once(&state, 3, Instant::now() + Duration::from_secs(60)).await;

        let status = state.sync_status().snapshot();
        assert_eq!(status.status, SyncStatus::UnHealthy);
        assert!(status
            .last_error_message
            .as_deref()
            .is_some_and(|m| m.starts_with("sync task panicked")));
        assert!(status.next_sync_time.is_some());
    }

    #[tokio::test]
    async fn test_next_sync_time_follows_ticker_deadline() {
        let service = FakeSyncService::returning(SyncResult::succeeded());
        let state = test_app_state(service);

        // A deadline already reached reports "now", not "now + interval".
        let before = Utc::now();
        run_once(&state, 5, Instant::now()).await;
        let after = Utc::now();

        let next = state.sync_status().snapshot().next_sync_time.expect("next sync time");
        assert!(next >= before && next <= after);
    }
}
