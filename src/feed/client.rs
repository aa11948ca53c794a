use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::feed::models::DataResponse;

pub struct FeedClient {
    http_client: Client,
    base_url: String,
}

impl FeedClient {
    /// Build a client for the sensor server configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.source_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn data_url(&self) -> String {
        format!("{}/api/data", self.base_url)
    }

    /// Fetch the latest dashboard payload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` if the request fails, returns an error status,
    /// or the body is not a valid payload.
    pub async fn get_data(&self) -> AppResult<DataResponse> {
        let url = self.data_url();

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "HTTP {status}: {}",
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to get response text: {e}")))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse sensor data response"
            );
            AppError::Upstream(format!("Failed to parse response: {e}"))
        })
    }
}
