use std::time::{Duration, Instant};

use crate::models::PingMetrics;

pub fn get_ping_metrics(start_time: Instant) -> PingMetrics {
    let elapsed = start_time.elapsed();
    PingMetrics {
        status: "ok",
        uptime: format_uptime(elapsed),
        uptime_seconds: elapsed.as_secs(),
    }
}

fn format_uptime(elapsed: Duration) -> String {
    let hours = elapsed.as_secs() / 3600;
    let minutes = (elapsed.as_secs() % 3600) / 60;
    let seconds = elapsed.as_secs() % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
