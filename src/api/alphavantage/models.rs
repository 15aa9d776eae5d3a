use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response from `function=TIME_SERIES_DAILY`
///
/// The provider answers 200 for everything; which of these fields is present
/// tells success (`time_series`) apart from a bad symbol (`error_message`) or
/// throttling (`note` / `information`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeriesDailyResponse {
    #[serde(rename = "Error Message", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(rename = "Note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "Information", default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
    #[serde(rename = "Time Series (Daily)", default, skip_serializing_if = "Option::is_none")]
    pub time_series: Option<BTreeMap<String, DailyBar>>,
}

/// One day of the series; every value arrives as a decimal string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. volume")]
    pub volume: String,
}
