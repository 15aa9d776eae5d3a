use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod routes;
mod services;
mod utils;

use crate::api::ReqwestTransport;
use crate::config::AppConfig;
use crate::routes::AppState;
use crate::services::chart_service::SvgChartRenderer;
use crate::services::market_data_service::MarketDataFetcher;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing; RUST_LOG wins over the debug flag
    let default_filter = if config.debug {
        "stock_trend=debug,tower_http=debug"
    } else {
        "stock_trend=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("📈 Starting stock-trend v{}...", env!("CARGO_PKG_VERSION"));
    info!("Market data: {}", config.market_data.base_url);
    info!("Exchange rates: {}", config.exchange_rate.base_url);

    let transport = Arc::new(ReqwestTransport::new());
    let state = AppState {
        fetcher: Arc::new(MarketDataFetcher::new(&config, transport)),
        renderer: Arc::new(SvgChartRenderer::new(config.chart)),
        started_at: Instant::now(),
    };

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };
    info!("Listening on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, routes::router(state)).await {
        error!("Server error: {}", e);
    }
}
