use async_trait::async_trait;
use solcasa_application::ports::{ContentFetcher, FetchedContent};
use solcasa_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed fetcher for gateway and home-page content.
pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Gateway(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedContent, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Gateway(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            DomainError::Gateway(format!("Failed to read response from {}: {}", url, e))
        })?;

        debug!(url = %url, status, len = body.len(), "Gateway response received");

        Ok(FetchedContent {
            status,
            content_type,
            body,
        })
    }
}
