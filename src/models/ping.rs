//! Liveness check models

use serde::Serialize;

/// Service status and uptime information
#[derive(Debug, Serialize)]
pub struct PingMetrics {
    pub status: &'static str,
    pub uptime: String,
    pub uptime_seconds: u64,
}
