pub mod alphavantage;
pub mod exchangerate;
pub mod transport;

pub use alphavantage::AlphaVantageClient;
pub use exchangerate::ExchangeRateClient;
pub use transport::{HttpTransport, ReqwestTransport, TransportError};

/// Error type shared by the provider clients
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure or non-2xx status
    Transport(TransportError),
    /// Body was not the JSON shape we expected
    Deserialization(String),
    /// Could not build the request URL
    InvalidUrl(String),
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Transport(e)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport Error: {}", e),
            ApiError::Deserialization(msg) => write!(f, "Deserialization Error: {}", msg),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
