//! # P2G Types
//!
//! Wire models, configuration records and error definitions for P2G Sync.
//!
//! - **`error`** - Typed errors for request validation and configuration
//! - **`models`** - Sync results, API payloads, status records, configuration
//!
//! ## Architecture Role
//!
//! `p2g-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        p2g-types (this crate)
//!              │
//!              ▼
//!          p2g-core
//!              │
//!              ▼
//!         p2g-server
//! ```
//!
//! All payload types serialize with camelCase field names to match the
//! public HTTP contract.

pub mod error;
pub mod models;

pub use error::{ConfigError, SyncRequestError};

pub use models::{
    AppConfig, AutoSyncConfig, ErrorDetail, ErrorResponse, ServerConfig, SyncPostRequest,
    SyncPostResponse, SyncResult, SyncServiceStatus, SyncStatus, SyncStatusResponse,
    WorkerConfig, WorkoutType,
};
