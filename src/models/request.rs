//! Request models for the index page

use serde::Deserialize;

/// Raw form submission; either field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockForm {
    pub stock_symbol: Option<String>,
    pub currency: Option<String>,
}

/// Validated symbol and currency pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuery {
    pub symbol: String,
    pub currency: String,
}

/// State of one request/response cycle, consumed by the page renderer
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub stock_symbol: Option<String>,
    pub currency: Option<String>,
    pub error: Option<String>,
    pub chart_fragments: Vec<String>,
    /// Reserved; nothing produces a prediction yet
    pub prediction: Option<String>,
}

impl RequestContext {
    pub fn from_form(form: &StockForm) -> Self {
        RequestContext {
            stock_symbol: form.stock_symbol.clone(),
            currency: form.currency.clone(),
            ..Default::default()
        }
    }
}
