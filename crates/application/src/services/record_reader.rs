use super::cache_policy::CachePolicy;
use super::cache_store::CacheStore;
use super::record_resolver::RecordResolver;
use super::single_flight::SingleFlight;
use solcasa_domain::{CacheKey, CacheLookup, DomainName, RecordType, Resolution};
use std::sync::Arc;

/// Record lookups through the `RECORD_<domain>/<record>` cache tier.
///
/// Values are cached for `record`, absent results for `record_negative`,
/// independently of any content decision built from them.
pub struct CachedRecordReader {
    resolver: Arc<RecordResolver>,
    cache: CacheStore,
    policy: CachePolicy,
    flights: SingleFlight<Resolution>,
}

impl CachedRecordReader {
    pub fn new(resolver: Arc<RecordResolver>, cache: CacheStore, policy: CachePolicy) -> Self {
        Self {
            resolver,
            cache,
            policy,
            flights: SingleFlight::new(),
        }
    }

    pub async fn read(&self, domain: &DomainName, record_type: RecordType) -> Resolution {
        let key = CacheKey::record(domain, record_type);

        match self.cache.get::<String>(&key).await {
            CacheLookup::Hit(value) => return Resolution::Value(value),
            CacheLookup::NegativeHit => return Resolution::Absent,
            CacheLookup::Miss => {}
        }

        self.flights
            .run(&key.render(), || async {
                let resolution = self.resolver.resolve(domain, record_type).await;
                match &resolution {
                    Resolution::Value(value) => {
                        self.cache.put(&key, value, self.policy.record).await
                    }
                    Resolution::Absent => {
                        self.cache.put_negative(&key, self.policy.record_negative).await
                    }
                }
                resolution
            })
            .await
    }
}
