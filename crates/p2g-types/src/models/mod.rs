//! Domain and wire models for P2G Sync.

mod api;
mod config;
mod status;
mod sync;

pub use api::{ErrorResponse, SyncPostRequest, SyncPostResponse, SyncStatusResponse};
pub use config::{AppConfig, AutoSyncConfig, ServerConfig, WorkerConfig};
pub use status::{SyncServiceStatus, SyncStatus};
pub use sync::{ErrorDetail, SyncResult, WorkoutType};
