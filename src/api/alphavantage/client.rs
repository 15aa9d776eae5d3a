use std::sync::Arc;

use reqwest::Url;
use tracing::debug;

use super::models::TimeSeriesDailyResponse;
use crate::api::transport::HttpTransport;
use crate::api::ApiError;
use crate::config::MarketDataConfig;
use crate::utils::errors::redact_api_key;

/// Alpha Vantage client for daily stock prices
#[derive(Clone)]
pub struct AlphaVantageClient {
    transport: Arc<dyn HttpTransport>,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    pub fn new(config: &MarketDataConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Build the `TIME_SERIES_DAILY` URL for a symbol
    pub fn daily_series_url(&self, symbol: &str) -> Result<Url, ApiError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
                ("datatype", "json"),
            ],
        )
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    /// GET ?function=TIME_SERIES_DAILY
    ///
    /// Returns the parsed body as-is; an `Error Message` or a missing series is
    /// not an `Err` here, the caller decides what those mean.
    pub async fn get_daily_series(&self, symbol: &str) -> Result<TimeSeriesDailyResponse, ApiError> {
        let url = self.daily_series_url(symbol)?;
        debug!("GET {}", redact_api_key(url.as_str()));

        let body = self.transport.get(url.as_str()).await?;

        serde_json::from_str::<TimeSeriesDailyResponse>(&body)
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}
