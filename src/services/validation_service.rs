use crate::models::StockQuery;
use crate::utils::errors::AppError;

/// Longest ticker symbol accepted
pub const MAX_SYMBOL_LEN: usize = 5;

/// Validate the submitted symbol and currency
///
/// The currency is passed through untouched; the exchange-rate provider is
/// the authority on which codes exist.
pub fn validate_request(stock_symbol: Option<&str>, currency: Option<&str>) -> Result<StockQuery, AppError> {
    let (symbol, currency) = match (stock_symbol, currency) {
        (Some(s), Some(c)) if !s.is_empty() && !c.is_empty() => (s, c),
        _ => return Err(AppError::MissingField),
    };

    if !is_valid_symbol(symbol) {
        return Err(AppError::InvalidSymbol);
    }

    Ok(StockQuery {
        symbol: symbol.to_string(),
        currency: currency.to_string(),
    })
}

/// Non-empty, letters only, at most [`MAX_SYMBOL_LEN`] characters
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().count() <= MAX_SYMBOL_LEN && symbol.chars().all(is_letter)
}

/// Alphabetic but not numeric, so letter numbers such as roman numerals are out
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
