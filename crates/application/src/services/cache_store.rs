use crate::ports::KvStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use solcasa_domain::{CacheKey, CacheLookup};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Stored form of an explicit negative result.
pub const NEGATIVE_MARKER: &str = "false";

/// Typed adapter over the raw key-value store.
///
/// Positive values are stored as JSON, negatives as the bare `false` marker,
/// so "looked up and absent" never reads like "never looked up". Store
/// failures degrade to `Miss` on read and are dropped on write.
#[derive(Clone)]
pub struct CacheStore {
    kv: Arc<dyn KvStore>,
    min_ttl: Duration,
}

impl CacheStore {
    pub fn new(kv: Arc<dyn KvStore>, min_ttl: Duration) -> Self {
        Self { kv, min_ttl }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> CacheLookup<T> {
        let rendered = key.render();
        let raw = match self.kv.get(&rendered).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %rendered, "Cache MISS");
                return CacheLookup::Miss;
            }
            Err(e) => {
                error!(key = %rendered, error = %e, "Cache read failed, treating as miss");
                return CacheLookup::Miss;
            }
        };

        if raw == NEGATIVE_MARKER {
            debug!(key = %rendered, "Cache NEGATIVE HIT");
            return CacheLookup::NegativeHit;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key = %rendered, "Cache HIT");
                CacheLookup::Hit(value)
            }
            Err(e) => {
                warn!(key = %rendered, error = %e, "Undecodable cache entry, treating as miss");
                CacheLookup::Miss
            }
        }
    }

    pub async fn put<T: Serialize>(&self, key: &CacheKey, value: &T, ttl: Duration) {
        match serde_json::to_string(value) {
            Ok(encoded) => self.write(key, &encoded, ttl).await,
            Err(e) => error!(key = %key, error = %e, "Failed to encode cache value"),
        }
    }

    pub async fn put_negative(&self, key: &CacheKey, ttl: Duration) {
        self.write(key, NEGATIVE_MARKER, ttl).await;
    }

    /// Effective TTL after applying the store floor.
    pub fn effective_ttl(&self, ttl: Duration) -> Duration {
        ttl.max(self.min_ttl)
    }

    async fn write(&self, key: &CacheKey, encoded: &str, ttl: Duration) {
        let rendered = key.render();
        let ttl = self.effective_ttl(ttl);
        match self.kv.put(&rendered, encoded, ttl).await {
            Ok(()) => debug!(key = %rendered, ttl_secs = ttl.as_secs(), "Cache SET"),
            Err(e) => error!(key = %rendered, error = %e, "Cache write failed"),
        }
    }
}
