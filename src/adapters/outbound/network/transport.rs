use crate::ports::outbound::{HttpResponse, HttpTransport};
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// ReqwestTransport adapter for outbound HTTP
///
/// This adapter implements the HttpTransport port on top of an async
/// reqwest client with a fixed timeout and a versioned user agent, so
/// upstream operators can identify this scanner in their logs.
///
/// Cloning is cheap: reqwest clients share their connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new transport with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("attest-scan/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new();
        assert!(transport.is_ok());
    }

    // Integration test - requires network access
    // Uncomment to run against the real registry
    // #[tokio::test]
    // async fn test_get_real() {
    //     let transport = ReqwestTransport::new().unwrap();
    //     let response = transport.get("https://registry.npmjs.org/express").await.unwrap();
    //     assert!(response.is_success());
    // }
}
