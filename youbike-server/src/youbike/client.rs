//! YouBike open-data HTTP client.

use super::error::YouBikeError;
use super::source::{PageLocator, StationSource};
use super::types::RawStationRecord;

/// Default URL for the New Taipei City YouBike 2.0 dataset.
pub const DEFAULT_BASE_URL: &str =
    "https://data.ntpc.gov.tw/api/datasets/010e5b15-3823-4b20-b401-b1cf000550c5/json";

/// Configuration for the YouBike API client.
#[derive(Debug, Clone)]
pub struct YouBikeConfig {
    /// Dataset URL (pages are selected with query parameters)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl YouBikeConfig {
    /// Create a config pointing at the production dataset.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for YouBikeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the YouBike open-data API.
#[derive(Debug, Clone)]
pub struct YouBikeClient {
    http: reqwest::Client,
    base_url: String,
}

impl YouBikeClient {
    /// Create a new YouBike API client.
    pub fn new(config: YouBikeConfig) -> Result<Self, YouBikeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The dataset URL this client reads from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl StationSource for YouBikeClient {
    async fn fetch_page(&self, page: &PageLocator) -> Result<Vec<RawStationRecord>, YouBikeError> {
        tracing::debug!(url = %self.base_url, %page, "fetching station page");

        let response = self
            .http
            .get(&self.base_url)
            .query(&page.query())
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(YouBikeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YouBikeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| YouBikeError::Json {
            message: e.to_string(),
        })
    }
}
