use crate::services::{
    CachePolicy, CacheStore, CachedRecordReader, FallbackPages, RegistrationChecker, SingleFlight,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use solcasa_domain::{
    is_absolute_http_url, CacheKey, CacheLookup, ContentLocator, ContentScheme, DomainName,
    FallbackReason, RecordType, Resolution, CONTENT_PRIORITY,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Resolves a domain to a single content locator.
///
/// Order: content cache → registration check → IPFS, ARWV, SHDW, url
/// (first value wins) → "no content" fallback. The final locator is cached
/// under `CONTENT_<domain>`, fallbacks on the negative tier.
pub struct LocateContentUseCase {
    registration: Arc<RegistrationChecker>,
    records: Arc<CachedRecordReader>,
    cache: CacheStore,
    policy: CachePolicy,
    pages: FallbackPages,
    flights: SingleFlight<ContentLocator>,
}

impl LocateContentUseCase {
    pub fn new(
        registration: Arc<RegistrationChecker>,
        records: Arc<CachedRecordReader>,
        cache: CacheStore,
        policy: CachePolicy,
        pages: FallbackPages,
    ) -> Self {
        Self {
            registration,
            records,
            cache,
            policy,
            pages,
            flights: SingleFlight::new(),
        }
    }

    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn execute(&self, domain: &DomainName) -> ContentLocator {
        let key = CacheKey::content(domain);

        if let CacheLookup::Hit(locator) = self.cache.get::<ContentLocator>(&key).await {
            return locator;
        }

        self.flights
            .run(&key.render(), || self.resolve_and_cache(domain, &key))
            .await
    }

    async fn resolve_and_cache(&self, domain: &DomainName, key: &CacheKey) -> ContentLocator {
        let locator = self.resolve(domain).await;
        let ttl = if locator.is_fallback() {
            self.policy.content_negative
        } else {
            self.policy.content
        };
        self.cache.put(key, &locator, ttl).await;

        info!(locator = %locator, scheme = %locator.scheme, "Content resolved");
        locator
    }

    async fn resolve(&self, domain: &DomainName) -> ContentLocator {
        if !self.registration.is_registered(domain).await {
            return ContentLocator::fallback(
                FallbackReason::NotRegistered,
                self.pages.not_registered(domain),
            );
        }

        for record_type in CONTENT_PRIORITY {
            if let Resolution::Value(value) = self.records.read(domain, record_type).await {
                return to_locator(record_type, value);
            }
            debug!(record = %record_type, "No value, trying next record type");
        }

        ContentLocator::fallback(FallbackReason::NoContent, self.pages.no_content(domain))
    }
}

fn to_locator(record_type: RecordType, value: String) -> ContentLocator {
    match record_type {
        RecordType::Ipfs => ContentLocator::from_ipfs_record(value),
        RecordType::Arweave => ContentLocator::new(ContentScheme::Arweave, value),
        RecordType::Shadow => ContentLocator::new(ContentScheme::ShadowDrive, value),
        _ => ContentLocator::new(ContentScheme::Url, normalize_url_record(value)),
    }
}

/// URL records that are not absolute http(s) URLs are stored base64-encoded.
/// Values that fail to decode to UTF-8 text are kept as-is.
pub fn normalize_url_record(value: String) -> String {
    if is_absolute_http_url(&value) {
        return value;
    }
    STANDARD
        .decode(value.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or(value)
}
