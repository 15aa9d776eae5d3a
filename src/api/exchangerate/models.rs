use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response from GET /latest/{base}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    /// Currency code -> units of that currency per one unit of `base`
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl LatestRatesResponse {
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }
}
