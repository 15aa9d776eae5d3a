use std::sync::Arc;

use tracing::debug;

use super::models::LatestRatesResponse;
use crate::api::transport::HttpTransport;
use crate::api::ApiError;
use crate::config::ExchangeRateConfig;

/// Client for the exchangerate-api.com v4 `latest` endpoint
#[derive(Clone)]
pub struct ExchangeRateClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl ExchangeRateClient {
    pub fn new(config: &ExchangeRateConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn latest_url(&self, base_currency: &str) -> String {
        format!("{}/{}", self.base_url, base_currency)
    }

    /// GET /latest/{base_currency}
    pub async fn get_latest(&self, base_currency: &str) -> Result<LatestRatesResponse, ApiError> {
        let url = self.latest_url(base_currency);
        debug!("GET {}", url);

        let body = self.transport.get(&url).await?;

        serde_json::from_str::<LatestRatesResponse>(&body)
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}
