//! Application State
//!
//! Holds shared state for the server: the sync service, automatic sync
//! bookkeeping and the effective configuration.

use std::sync::Arc;

use p2g_core::{SyncService, SyncStatusTracker};
use p2g_types::models::{AppConfig, AutoSyncConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub sync_service: Arc<dyn SyncService>,
    pub sync_status: SyncStatusTracker,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(sync_service: Arc<dyn SyncService>, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                sync_service,
                sync_status: SyncStatusTracker::new(),
                config,
            }),
        }
    }

    pub fn sync_service(&self) -> Arc<dyn SyncService> {
        Arc::clone(&self.inner.sync_service)
    }

    pub fn sync_status(&self) -> &SyncStatusTracker {
        &self.inner.sync_status
    }

    pub fn auto_sync(&self) -> &AutoSyncConfig {
        &self.inner.config.auto_sync
    }
}
