use async_trait::async_trait;
use solcasa_domain::DomainError;
use std::time::Duration;

/// Process-external key-value store with per-entry expiration.
///
/// Values are opaque strings; interpretation (including the explicit negative
/// marker) belongs to `CacheStore`. Expired entries must read as absent.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Insert or overwrite `key`, expiring after `ttl`.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Drop expired entries, returning how many were removed.
    async fn purge_expired(&self) -> Result<u64, DomainError>;

    fn backend_name(&self) -> &'static str;
}
