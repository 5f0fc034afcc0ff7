use serde::{Deserialize, Serialize};

/// Storage backing the key-value cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// SQLite database (durable across restarts)
    #[default]
    Sqlite,
    /// Process-local map, for development and tests
    Memory,
}

/// TTL tiers for the resolution caches, in seconds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Registered domains (registration changes rarely)
    #[serde(default = "default_domain_ttl")]
    pub domain_ttl: u64,

    /// Unregistered domains or failed checks (registration may complete soon)
    #[serde(default = "default_negative_ttl")]
    pub domain_negative_ttl: u64,

    #[serde(default = "default_record_ttl")]
    pub record_ttl: u64,

    #[serde(default = "default_negative_ttl")]
    pub record_negative_ttl: u64,

    #[serde(default = "default_content_ttl")]
    pub content_ttl: u64,

    /// Fallback locators (not registered / no content)
    #[serde(default = "default_negative_ttl")]
    pub content_negative_ttl: u64,

    /// Floor applied to every write (default: 60)
    #[serde(default = "default_min_ttl")]
    pub min_ttl: u64,

    /// Seconds between sweeps of expired rows (default: 300)
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            database_url: default_database_url(),
            domain_ttl: default_domain_ttl(),
            domain_negative_ttl: default_negative_ttl(),
            record_ttl: default_record_ttl(),
            record_negative_ttl: default_negative_ttl(),
            content_ttl: default_content_ttl(),
            content_negative_ttl: default_negative_ttl(),
            min_ttl: default_min_ttl(),
            sweep_interval: default_sweep_interval(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://solcasa-cache.db".to_string()
}

fn default_domain_ttl() -> u64 {
    86_400
}

fn default_record_ttl() -> u64 {
    900
}

fn default_content_ttl() -> u64 {
    600
}

fn default_negative_ttl() -> u64 {
    60
}

fn default_min_ttl() -> u64 {
    60
}

fn default_sweep_interval() -> u64 {
    300
}
