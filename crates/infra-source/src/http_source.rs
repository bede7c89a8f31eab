// HTTP job source (remote JSON document)
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use jobboard_core::error::{AppError, Result};
use jobboard_core::port::JobSource;

/// Request timeout for the one-shot document fetch (30s)
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the job document with a single GET (no retries)
pub struct HttpJobSource {
    client: reqwest::Client,
    url: String,
}

impl HttpJobSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch(&self) -> Result<serde_json::Value> {
        debug!(url = %self.url, "Fetching job document");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        debug!(url = %self.url, bytes = body.len(), "Job document received");
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
