// Analytics API client (GET {base}/dashboard, GET {base}/health)

use std::future::Future;
use std::time::Duration;

use tracing::instrument;

use crate::config::ApiConfig;
use crate::error::CycleError;
use crate::models::{Health, Snapshot};
use crate::version::user_agent;

/// Where a refresh cycle gets its snapshot from.
pub trait SnapshotSource {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, CycleError>>;
}

pub struct HttpSnapshotRepo {
    client: reqwest::Client,
    dashboard_url: String,
    health_url: String,
}

impl HttpSnapshotRepo {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent());
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client: builder.build()?,
            dashboard_url: format!("{}/dashboard", base),
            health_url: format!("{}/health", base),
        })
    }

    pub fn dashboard_url(&self) -> &str {
        &self.dashboard_url
    }

    #[instrument(skip(self), fields(repo = "api", operation = "fetch_snapshot"))]
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, CycleError> {
        let response = self.client.get(&self.dashboard_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CycleError::Status(status));
        }
        let body = response.text().await?;
        Snapshot::from_json(&body)
    }

    #[instrument(skip(self), fields(repo = "api", operation = "health"))]
    pub async fn health(&self) -> Result<Health, CycleError> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CycleError::Status(status));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CycleError::Payload(e.to_string()))
    }
}

impl SnapshotSource for HttpSnapshotRepo {
    async fn fetch(&self) -> Result<Snapshot, CycleError> {
        self.fetch_snapshot().await
    }
}
