use async_trait::async_trait;
use solcasa_application::ports::KvStore;
use solcasa_domain::DomainError;
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::{error, instrument};

/// `kv_cache` table store. Expiry is a unix timestamp in seconds.
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query_as::<_, (String,)>(
            "SELECT value FROM kv_cache WHERE key = ? AND expires_at > ?",
        )
        .bind(key)
        .bind(Self::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to read cache entry");
            DomainError::Cache(e.to_string())
        })?;

        Ok(row.map(|(value,)| value))
    }

    #[instrument(skip(self, value))]
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let expires_at = Self::now().saturating_add(ttl.as_secs() as i64);

        sqlx::query(
            "INSERT INTO kv_cache (key, value, expires_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, expires_at = excluded.expires_at",
        )
        .bind(key)
        .bind(value)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to write cache entry");
            DomainError::Cache(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM kv_cache WHERE expires_at <= ?")
            .bind(Self::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to purge expired cache entries");
                DomainError::Cache(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
