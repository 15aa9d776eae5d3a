pub mod client;
pub mod models;

pub use client::AlphaVantageClient;
pub use models::{DailyBar, TimeSeriesDailyResponse};
