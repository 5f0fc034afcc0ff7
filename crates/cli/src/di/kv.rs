use crate::bootstrap::init_database;
use solcasa_application::ports::KvStore;
use solcasa_domain::config::{CacheBackend, CacheConfig};
use solcasa_infrastructure::kv::{MemoryKvStore, SqliteKvStore};
use std::sync::Arc;
use tracing::info;

pub async fn build_kv_store(config: &CacheConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    let kv: Arc<dyn KvStore> = match config.backend {
        CacheBackend::Sqlite => {
            let pool = init_database(&config.database_url).await?;
            Arc::new(SqliteKvStore::new(pool))
        }
        CacheBackend::Memory => Arc::new(MemoryKvStore::new()),
    };

    info!(backend = kv.backend_name(), "Cache store ready");
    Ok(kv)
}
