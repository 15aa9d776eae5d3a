use tracing::{debug, info, warn};

use crate::models::{RequestContext, StockForm};
use crate::services::chart_service::{create_plots, ChartRenderer};
use crate::services::market_data_service::MarketDataFetcher;
use crate::services::validation_service::validate_request;
use crate::utils::errors::AppError;

/// Run one form submission through validate -> fetch -> render
///
/// Stops at the first failure; the context then carries the error message
/// and no charts.
pub async fn handle_submission(
    fetcher: &MarketDataFetcher,
    renderer: &dyn ChartRenderer,
    form: &StockForm,
) -> RequestContext {
    let mut context = RequestContext::from_form(form);

    match build_charts(fetcher, renderer, form).await {
        Ok(fragments) => context.chart_fragments = fragments,
        Err(e) => {
            if e.is_input_error() {
                info!("Rejected submission {:?}/{:?}: {}", form.stock_symbol, form.currency, e);
            } else {
                warn!("Submission {:?}/{:?} failed: {}", form.stock_symbol, form.currency, e);
            }
            context.error = Some(e.to_string());
        }
    }

    context
}

async fn build_charts(
    fetcher: &MarketDataFetcher,
    renderer: &dyn ChartRenderer,
    form: &StockForm,
) -> Result<Vec<String>, AppError> {
    let query = validate_request(form.stock_symbol.as_deref(), form.currency.as_deref())?;

    info!("📈 Chart request for {} in {}", query.symbol, query.currency);

    let series = fetcher.fetch_stock_data(&query.symbol, &query.currency).await?;
    if series.is_empty() {
        debug!("No daily bars for {}, rendering empty charts", query.symbol);
    }

    let fragments = create_plots(renderer, &series, &query.symbol, &query.currency)?;
    info!("Rendered {} charts for {} ({} bars)", fragments.len(), query.symbol, series.len());

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::api::transport::stub::StubTransport;
    use crate::config::{AppConfig, ChartConfig, ExchangeRateConfig, MarketDataConfig};
    use crate::models::ChartSpec;
    use crate::services::chart_service::ChartError;

    const AV: &str = "https://av.test/query";
    const FX: &str = "https://fx.test/latest/USD";

    const TWO_DAYS: &str = r#"{"Time Series (Daily)": {
        "2024-05-02": {"1. open": "10", "2. high": "12", "3. low": "9", "4. close": "11", "5. volume": "100"},
        "2024-05-03": {"1. open": "11", "2. high": "13", "3. low": "10", "4. close": "12", "5. volume": "200"}
    }}"#;

    struct TitleRenderer;

    impl ChartRenderer for TitleRenderer {
        fn render(&self, spec: &ChartSpec) -> Result<String, ChartError> {
            Ok(spec.title.clone())
        }
    }

    fn fetcher(stub: &Arc<StubTransport>) -> MarketDataFetcher {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            debug: false,
            market_data: MarketDataConfig {
                base_url: AV.to_string(),
                api_key: "k".to_string(),
            },
            exchange_rate: ExchangeRateConfig {
                base_url: "https://fx.test/latest".to_string(),
            },
            chart: ChartConfig { width: 600, height: 400 },
        };
        MarketDataFetcher::new(&config, stub.clone())
    }

    fn form(symbol: Option<&str>, currency: Option<&str>) -> StockForm {
        StockForm {
            stock_symbol: symbol.map(str::to_string),
            currency: currency.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_success_produces_three_charts() {
        let stub = Arc::new(
            StubTransport::new()
                .route(AV, TWO_DAYS)
                .route(FX, r#"{"rates":{"USD":1.0}}"#),
        );
        let context = handle_submission(&fetcher(&stub), &TitleRenderer, &form(Some("AAPL"), Some("USD"))).await;

        assert_eq!(context.error, None);
        assert_eq!(
            context.chart_fragments,
            vec![
                "Open and Close Prices for AAPL (USD)",
                "High and Low Prices for AAPL (USD)",
                "All Prices for AAPL (USD)",
            ]
        );
        assert_eq!(context.prediction, None);
        assert_eq!(context.stock_symbol.as_deref(), Some("AAPL"));
    }

    #[tokio::test]
    async fn test_invalid_symbol_skips_network() {
        let stub = Arc::new(StubTransport::new());
        let context = handle_submission(&fetcher(&stub), &TitleRenderer, &form(Some("aapl1"), Some("EUR"))).await;

        assert_eq!(context.error.as_deref(), Some("Invalid stock symbol. Please enter a valid symbol."));
        assert!(context.chart_fragments.is_empty());
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_skips_network() {
        let stub = Arc::new(StubTransport::new());
        for f in [form(None, Some("EUR")), form(Some("AAPL"), Some("")), StockForm::default()] {
            let context = handle_submission(&fetcher(&stub), &TitleRenderer, &f).await;
            assert_eq!(context.error.as_deref(), Some("Please provide both stock symbol and currency."));
            assert!(context.chart_fragments.is_empty());
        }
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_error() {
        let stub = Arc::new(StubTransport::new().route(AV, r#"{"Error Message": "Invalid API call."}"#));
        let context = handle_submission(&fetcher(&stub), &TitleRenderer, &form(Some("FAKE"), Some("EUR"))).await;
        assert_eq!(context.error.as_deref(), Some("Error: Invalid API call."));
        assert!(context.chart_fragments.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_currency() {
        let stub = Arc::new(
            StubTransport::new()
                .route(AV, TWO_DAYS)
                .route(FX, r#"{"rates":{"USD":1.0,"EUR":0.93}}"#),
        );
        let context = handle_submission(&fetcher(&stub), &TitleRenderer, &form(Some("AAPL"), Some("ZZZ"))).await;
        assert_eq!(context.error.as_deref(), Some("Error fetching exchange rate."));
        assert!(context.chart_fragments.is_empty());
    }
}
