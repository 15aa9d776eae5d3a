//! Data models shared by the services, routes and page renderer
//!
//! Every model lives for a single request only; nothing here is persisted.

pub mod chart;
pub mod ping;
pub mod price;
pub mod request;

// Re-export commonly used types for convenience
pub use chart::{ChartLine, ChartSpec};
pub use ping::PingMetrics;
pub use price::{ExchangeRate, PriceBar, PriceField, PriceSeries};
pub use request::{RequestContext, StockForm, StockQuery};
