use std::future::Future;
use std::pin::Pin;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;

/// Boxed future returned by [`HttpTransport::get`]
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>>;

/// Transport-level failure talking to a provider
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Request(String),
    /// Provider answered with a non-2xx status
    #[error("HTTP error ({status}): {body}")]
    Status { status: u16, body: String },
}

/// Minimal GET transport the provider clients are written against, so tests
/// can swap in canned responses
pub trait HttpTransport: Send + Sync {
    /// GET `url` and return the response body
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a>;
}

/// Production transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let http_client = HttpClient::builder()
            .user_agent(concat!("stock-trend/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(async move {
            let response = self
                .http_client
                .get(url)
                .header(ACCEPT, HeaderValue::from_static("application/json"))
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        TransportError::Request(format!("timeout: {}", e))
                    } else if e.is_connect() {
                        TransportError::Request(format!("connection failed: {}", e))
                    } else {
                        TransportError::Request(e.to_string())
                    }
                })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Request(format!("failed to read body: {}", e)))?;

            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(body)
        })
    }
}

/// Canned-response transport for tests
#[cfg(test)]
pub mod stub {
    use super::*;
    use std::sync::Mutex;

    /// Answers each GET with the first route whose prefix matches the URL,
    /// and records every URL it was asked for
    #[derive(Default)]
    pub struct StubTransport {
        routes: Vec<(String, Result<String, TransportError>)>,
        calls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn route(mut self, prefix: &str, body: &str) -> Self {
            self.routes.push((prefix.to_string(), Ok(body.to_string())));
            self
        }

        pub fn fail(mut self, prefix: &str, error: TransportError) -> Self {
            self.routes.push((prefix.to_string(), Err(error)));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl HttpTransport for StubTransport {
        fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
            self.calls.lock().unwrap().push(url.to_string());
            let result = self
                .routes
                .iter()
                .find(|(prefix, _)| url.starts_with(prefix.as_str()))
                .map(|(_, r)| r.clone())
                .unwrap_or_else(|| {
                    Err(TransportError::Status {
                        status: 404,
                        body: format!("no stub for {}", url),
                    })
                });
            Box::pin(async move { result })
        }
    }
}
