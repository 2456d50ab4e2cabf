use crate::shared::Result;
use async_trait::async_trait;

/// A raw HTTP response as seen by the retry layer.
///
/// Only the status code and body are carried; nothing in the pipeline
/// inspects headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True for server errors (>= 500), the only class considered
    /// transient and worth retrying.
    pub fn is_transient_error(&self) -> bool {
        self.status >= 500
    }
}

/// HttpTransport port for issuing outbound GET requests
///
/// This port abstracts the HTTP client so the retry policy and the API
/// clients built on top of it can be tested against scripted responses.
/// Transport-level failures (connection refused, DNS) surface as errors;
/// any response that arrived, whatever its status, is an `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
