use async_trait::async_trait;
use bytes::Bytes;
use solcasa_domain::DomainError;

#[derive(Debug, Clone)]
pub struct FetchedContent {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Outbound HTTP GET against content gateways and the home-page origin.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedContent, DomainError>;
}
