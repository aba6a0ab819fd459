//! Configuration file loading.

use std::fs;
use std::path::Path;

use p2g_types::error::ConfigError;
use p2g_types::models::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "p2g.json";

/// Load the configuration at `path`, falling back to defaults when the file
/// does not exist.
///
/// Only parses; callers apply CLI/env overrides and then run [`validate_config`].
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("[Config] {} not found, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::from_io_error(path.display().to_string(), &e))?;
    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;

    tracing::info!("[Config] Loaded {}", path.display());
    Ok(config)
}

/// Check values that deserialize fine but cannot work at runtime.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::invalid("server.port", "must be non-zero"));
    }

    let worker_url = url::Url::parse(&config.worker.base_url)
        .map_err(|e| ConfigError::invalid("worker.baseUrl", e.to_string()))?;
    if !matches!(worker_url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid("worker.baseUrl", "scheme must be http or https"));
    }

    if config.worker.timeout_secs == 0 {
        return Err(ConfigError::invalid("worker.timeoutSecs", "must be greater than 0"));
    }

    if config.auto_sync.enabled {
        if config.auto_sync.interval_secs == 0 {
            return Err(ConfigError::invalid("autoSync.intervalSecs", "must be greater than 0"));
        }
        if config.auto_sync.num_workouts == 0 {
            return Err(ConfigError::invalid("autoSync.numWorkouts", "must be greater than 0"));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.auto_sync.enabled);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{ "autoSync": { "enabled": true, "numWorkouts": 10 }, "server": { "port": 9000 } }"#,
        );

        let config = load_config(&path).unwrap();
        assert!(config.auto_sync.enabled);
        assert_eq!(config.auto_sync.num_workouts, 10);
        assert_eq!(config.auto_sync.interval_secs, 3600);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.worker.base_url, "http://127.0.0.1:8081");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(load_config(&path), Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_rejects_zero_interval_when_enabled() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "autoSync": { "enabled": true, "intervalSecs": 0 } }"#);
        let config = load_config(&path).unwrap();

        match validate_config(&config) {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "autoSync.intervalSecs")
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_leaves_validation_to_caller() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "server": { "port": 0 } }"#);

        let mut config = load_config(&path).unwrap();
        assert_eq!(config.server.port, 0);
        assert!(validate_config(&config).is_err());

        config.server.port = 9000;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_interval_is_fine_when_disabled() {
        let mut config = AppConfig::default();
        config.auto_sync.interval_secs = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_worker_url() {
        let mut config = AppConfig::default();
        config.worker.base_url = "ftp://worker".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "worker.baseUrl"
        ));
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }
}
