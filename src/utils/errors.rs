/// Errors that end a single request. The `Display` text is what the user sees
/// on the page, so keep it short and free of internals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Stock symbol or currency was absent or empty
    #[error("Please provide both stock symbol and currency.")]
    MissingField,
    /// Symbol has a non-alphabetic character or is longer than 5 characters
    #[error("Invalid stock symbol. Please enter a valid symbol.")]
    InvalidSymbol,
    /// Either provider failed or returned something we could not use
    #[error("{0}")]
    Upstream(String),
    /// The charting backend failed to draw
    #[error("Error rendering charts: {0}")]
    Render(String),
}

impl AppError {
    pub fn upstream(message: impl Into<String>) -> Self {
        AppError::Upstream(message.into())
    }

    /// True for errors caused by the submitted form rather than a provider
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::MissingField | AppError::InvalidSymbol)
    }
}

/// Replace the value of `apikey=` in a URL so it can be logged
pub fn redact_api_key(url: &str) -> String {
    match url.find("apikey=") {
        Some(start) => {
            let value_start = start + "apikey=".len();
            let value_end = url[value_start..]
                .find('&')
                .map(|i| value_start + i)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::MissingField.to_string(),
            "Please provide both stock symbol and currency."
        );
        assert_eq!(
            AppError::InvalidSymbol.to_string(),
            "Invalid stock symbol. Please enter a valid symbol."
        );
        assert_eq!(
            AppError::upstream("Error fetching exchange rate.").to_string(),
            "Error fetching exchange rate."
        );
    }

    #[test]
    fn test_input_errors() {
        assert!(AppError::MissingField.is_input_error());
        assert!(AppError::InvalidSymbol.is_input_error());
        assert!(!AppError::upstream("x").is_input_error());
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("https://x.test/query?symbol=IBM&apikey=SECRET&datatype=json"),
            "https://x.test/query?symbol=IBM&apikey=***&datatype=json"
        );
        assert_eq!(
            redact_api_key("https://x.test/query?apikey=SECRET"),
            "https://x.test/query?apikey=***"
        );
        assert_eq!(redact_api_key("https://x.test/latest/USD"), "https://x.test/latest/USD");
    }
}
