use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::api::alphavantage::{DailyBar, TimeSeriesDailyResponse};
use crate::api::{AlphaVantageClient, ExchangeRateClient, HttpTransport};
use crate::config::AppConfig;
use crate::models::{ExchangeRate, PriceBar, PriceSeries};
use crate::utils::errors::AppError;

/// Currency every provider price is quoted in
pub const BASE_CURRENCY: &str = "USD";

const SERIES_UNAVAILABLE: &str = "Error fetching data. Please check the stock symbol.";
const RATE_UNAVAILABLE: &str = "Error fetching exchange rate.";

/// Fetches a daily series and converts it into the requested currency
#[derive(Clone)]
pub struct MarketDataFetcher {
    stocks: AlphaVantageClient,
    rates: ExchangeRateClient,
}

impl MarketDataFetcher {
    pub fn new(config: &AppConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            stocks: AlphaVantageClient::new(&config.market_data, transport.clone()),
            rates: ExchangeRateClient::new(&config.exchange_rate, transport),
        }
    }

    /// Daily series for `symbol` with prices converted from USD into `currency`
    ///
    /// The exchange rate is only requested once the series has been fetched
    /// and parsed.
    pub async fn fetch_stock_data(&self, symbol: &str, currency: &str) -> Result<PriceSeries, AppError> {
        let response = self.stocks.get_daily_series(symbol).await.map_err(|e| {
            warn!("Market data request for {} failed: {}", symbol, e);
            AppError::upstream(SERIES_UNAVAILABLE)
        })?;

        let mut series = parse_daily_series(response)?;
        debug!("Parsed {} daily bars for {}", series.len(), symbol);

        let rate = self
            .fetch_exchange_rate(BASE_CURRENCY, currency)
            .await
            .ok_or_else(|| AppError::upstream(RATE_UNAVAILABLE))?;

        series.convert(rate);
        if !series.is_finite() {
            warn!("Prices for {} overflow at {} {}/USD", symbol, rate.value(), currency);
            return Err(AppError::upstream(SERIES_UNAVAILABLE));
        }
        info!("Converted {} bars for {} at {} {}/USD", series.len(), symbol, rate.value(), currency);

        Ok(series)
    }

    /// Rate from `base` to `target`, or `None` if the provider has no usable rate
    pub async fn fetch_exchange_rate(&self, base: &str, target: &str) -> Option<ExchangeRate> {
        let response = match self.rates.get_latest(base).await {
            Ok(r) => r,
            Err(e) => {
                warn!("Exchange rate request for {} failed: {}", base, e);
                return None;
            }
        };

        debug!("Rates for {:?} as of {:?}", response.base, response.date);
        match response.rate(target) {
            Some(raw) => {
                let rate = ExchangeRate::new(raw);
                if rate.is_none() {
                    warn!("Provider returned unusable {}->{} rate {}", base, target, raw);
                }
                rate
            }
            None => {
                debug!("No {}->{} rate in provider response", base, target);
                None
            }
        }
    }
}

/// Turn a `TIME_SERIES_DAILY` body into a sorted series
pub fn parse_daily_series(response: TimeSeriesDailyResponse) -> Result<PriceSeries, AppError> {
    if let Some(message) = response.error_message {
        return Err(AppError::upstream(format!("Error: {}", message)));
    }

    let Some(time_series) = response.time_series else {
        if let Some(note) = response.note.or(response.information) {
            warn!("Market data provider declined request: {}", note);
        }
        return Err(AppError::upstream(SERIES_UNAVAILABLE));
    };

    let bars = time_series
        .iter()
        .map(|(date, bar)| parse_bar(date, bar))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PriceSeries::from_bars(bars))
}

fn parse_bar(date: &str, bar: &DailyBar) -> Result<PriceBar, AppError> {
    let invalid = |what: &str, value: &str| {
        warn!("Malformed {} '{}' for {} in market data", what, value, date);
        AppError::upstream(SERIES_UNAVAILABLE)
    };
    // "inf" and "NaN" parse as f64, so only plain non-negative amounts pass
    let number = |what: &str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| invalid(what, value))
    };

    Ok(PriceBar {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid("date", date))?,
        open: number("open", &bar.open)?,
        high: number("high", &bar.high)?,
        low: number("low", &bar.low)?,
        close: number("close", &bar.close)?,
        volume: number("volume", &bar.volume)?,
    })
}
