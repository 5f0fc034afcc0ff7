use crate::ports::KvStore;
use solcasa_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Removes expired rows from the cache store.
///
/// Reads already ignore expired entries; this keeps the backing storage
/// from growing without bound.
pub struct PurgeExpiredEntriesUseCase {
    kv: Arc<dyn KvStore>,
}

impl PurgeExpiredEntriesUseCase {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    #[instrument(skip(self), fields(backend = self.kv.backend_name()))]
    pub async fn execute(&self) -> Result<u64, DomainError> {
        let removed = self.kv.purge_expired().await?;
        debug!(removed, "Expired cache entries purged");
        Ok(removed)
    }
}
