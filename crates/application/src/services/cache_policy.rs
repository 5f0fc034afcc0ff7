use solcasa_domain::config::CacheConfig;
use std::time::Duration;

/// TTL tiers for each cache purpose, positive and negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub domain: Duration,
    pub domain_negative: Duration,
    pub record: Duration,
    pub record_negative: Duration,
    pub content: Duration,
    pub content_negative: Duration,
}

impl CachePolicy {
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            domain: Duration::from_secs(config.domain_ttl),
            domain_negative: Duration::from_secs(config.domain_negative_ttl),
            record: Duration::from_secs(config.record_ttl),
            record_negative: Duration::from_secs(config.record_negative_ttl),
            content: Duration::from_secs(config.content_ttl),
            content_negative: Duration::from_secs(config.content_negative_ttl),
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
