#![allow(dead_code)]

use async_trait::async_trait;
use solcasa_application::ports::KvStore;
use solcasa_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock KvStore
// ============================================================================

/// Counts purge calls and reports a fixed number of expired rows once.
pub struct MockKvStore {
    expired: Arc<RwLock<u64>>,
    purge_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockKvStore {
    pub fn new() -> Self {
        Self::with_expired(0)
    }

    pub fn with_expired(expired: u64) -> Self {
        Self {
            expired: Arc::new(RwLock::new(expired)),
            purge_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn purge_calls(&self) -> u64 {
        self.purge_calls.load(Ordering::SeqCst)
    }

    pub async fn expired(&self) -> u64 {
        *self.expired.read().await
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl KvStore for MockKvStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), DomainError> {
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        self.purge_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::Cache("mock purge failure".to_string()));
        }
        let mut expired = self.expired.write().await;
        let removed = *expired;
        *expired = 0;
        Ok(removed)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
