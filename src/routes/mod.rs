use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::services::chart_service::ChartRenderer;
use crate::services::market_data_service::MarketDataFetcher;

pub mod index;
pub mod ping;

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<MarketDataFetcher>,
    pub renderer: Arc<dyn ChartRenderer>,
    pub started_at: Instant,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::show_form).post(index::submit))
        .route("/ping", get(ping::ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
