//! Runtime configuration read from the environment (and `.env` via dotenv).
//!
//! `ALPHAVANTAGE_API_KEY` is required and has no default. Everything else
//! falls back to the public provider endpoints and a local bind address.

use std::str::FromStr;

const DEFAULT_ALPHAVANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";
const DEFAULT_EXCHANGE_RATE_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_CHART_WIDTH: u32 = 900;
const DEFAULT_CHART_HEIGHT: u32 = 500;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Market-data provider settings
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Exchange-rate provider settings
#[derive(Debug, Clone)]
pub struct ExchangeRateConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub debug: bool,
    pub market_data: MarketDataConfig,
    pub exchange_rate: ExchangeRateConfig,
    pub chart: ChartConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("ALPHAVANTAGE_API_KEY").ok_or(ConfigError::Missing("ALPHAVANTAGE_API_KEY"))?;

        let market_data = MarketDataConfig {
            base_url: url_or(
                "ALPHAVANTAGE_BASE_URL",
                get("ALPHAVANTAGE_BASE_URL"),
                DEFAULT_ALPHAVANTAGE_BASE_URL,
            )?,
            api_key,
        };

        let exchange_rate = ExchangeRateConfig {
            base_url: url_or(
                "EXCHANGE_RATE_BASE_URL",
                get("EXCHANGE_RATE_BASE_URL"),
                DEFAULT_EXCHANGE_RATE_BASE_URL,
            )?,
        };

        let chart = ChartConfig {
            width: parse_or("CHART_WIDTH", get("CHART_WIDTH"), DEFAULT_CHART_WIDTH)?,
            height: parse_or("CHART_HEIGHT", get("CHART_HEIGHT"), DEFAULT_CHART_HEIGHT)?,
        };

        Ok(AppConfig {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            debug: parse_or("APP_DEBUG", get("APP_DEBUG"), false)?,
            market_data,
            exchange_rate,
            chart,
        })
    }
}

/// Base URLs must be absolute http(s) URLs
fn url_or(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let value = raw.map(|v| v.trim().to_string()).unwrap_or_else(|| default.to_string());
    match reqwest::Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value),
        _ => Err(ConfigError::Invalid { var, value }),
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
