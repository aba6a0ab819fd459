//! Application configuration models.

use serde::{Deserialize, Serialize};

/// Full application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Sync worker the daemon forwards sync requests to
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Periodic background sync
    #[serde(default)]
    pub auto_sync: AutoSyncConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: "127.0.0.1".to_string(), port: 8080 }
    }
}

/// Location of the sync worker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerConfig {
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8081".to_string(), timeout_secs: 300 }
    }
}

/// Periodic background sync settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoSyncConfig {
    pub enabled: bool,
    pub interval_secs: u64,
    /// Number of most recent workouts each run syncs
    pub num_workouts: u32,
}

impl Default for AutoSyncConfig {
    fn default() -> Self {
        Self { enabled: false, interval_secs: 3600, num_workouts: 5 }
    }
}
