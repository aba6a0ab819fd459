//! Core sync logic for P2G Sync.
//!
//! - [`sync`] - the [`SyncService`] seam, request validation, status tracking
//!   and the HTTP-backed worker client
//! - [`config`] - configuration file loading and validation
//! - [`error`] - failure type of the sync interface

pub mod config;
pub mod error;
pub mod sync;

pub use error::{SyncError, SyncOutcome};
pub use sync::{validate_sync_request, RemoteSyncService, SyncService, SyncStatusTracker, SyncTarget};
