use crate::ports::outbound::{HttpResponse, HttpTransport};
use crate::shared::{Result, ScanError};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Retry parameters for transient server errors.
///
/// Delays grow exponentially: `base_delay * 2^(attempt - 1)` after the
/// attempt-th failed try (1-indexed), so the defaults back off 1s then 2s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// RetryingFetcher - the single retry/backoff policy for all outbound requests
///
/// Both upstream APIs (the ranking API and the registry) are reached
/// through this wrapper. Responses with a server error status (>= 500)
/// are retried with exponential backoff up to the attempt ceiling; any
/// other error status fails immediately with the status code attached.
/// Transport-level failures are not retried.
pub struct RetryingFetcher<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: HttpTransport> RetryingFetcher<T> {
    /// Creates a fetcher with the default policy (3 attempts, 1s base delay)
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, RetryPolicy::default())
    }

    /// Creates a fetcher with an explicit retry policy
    pub fn with_policy(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Fetches a URL, retrying transient server errors.
    ///
    /// # Errors
    /// `ScanError::HttpStatus` for a non-success response once the policy
    /// gives up; transport errors are propagated as-is.
    pub async fn fetch(&self, url: &str) -> Result<HttpResponse> {
        let mut attempt = 1;
        loop {
            let response = self.transport.get(url).await?;

            if response.is_success() {
                return Ok(response);
            }

            if response.is_transient_error() && attempt < self.policy.max_attempts {
                let delay = self.policy.base_delay * 2u32.pow(attempt - 1);
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return Err(ScanError::HttpStatus {
                status: response.status,
                url: url.to_string(),
            }
            .into());
        }
    }

    /// Fetches a URL and deserializes the JSON body.
    pub async fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> Result<D> {
        let response = self.fetch(url).await?;
        serde_json::from_str(&response.body)
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }
}
