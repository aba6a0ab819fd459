//! [`SyncService`] backed by an external sync worker reachable over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::SyncService;
use crate::error::{SyncError, SyncOutcome};
use p2g_types::models::{SyncResult, WorkerConfig, WorkoutType};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountRequest {
    num_workouts: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdsRequest<'a> {
    workout_ids: &'a [String],
    exclude: Option<&'a [WorkoutType]>,
}

/// Forwards each sync call to the worker in a single request. No retries.
pub struct RemoteSyncService {
    client: Client,
    base_url: String,
}

impl RemoteSyncService {
    pub fn new(config: &WorkerConfig) -> SyncOutcome<Self> {
        let parsed = url::Url::parse(&config.base_url).map_err(|e| {
            SyncError::Config(format!("invalid worker URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SyncError::Config(format!(
                "unsupported worker URL scheme '{}'",
                parsed.scheme()
            )));
        }

        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> SyncOutcome<SyncResult> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("[Worker] POST {}", url);

        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!("[Worker] {} answered {}: {}", url, status.as_u16(), message);
            return Err(SyncError::Worker { status: status.as_u16(), message });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| SyncError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SyncService for RemoteSyncService {
    async fn sync_by_count(&self, num_workouts: u32) -> SyncOutcome<SyncResult> {
        self.post("/api/sync/count", &CountRequest { num_workouts }).await
    }

    async fn sync_by_ids(
        &self,
        workout_ids: &[String],
        exclude: Option<&[WorkoutType]>,
    ) -> SyncOutcome<SyncResult> {
        self.post("/api/sync/ids", &IdsRequest { workout_ids, exclude }).await
    }
}
