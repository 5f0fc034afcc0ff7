use super::cache_policy::CachePolicy;
use super::cache_store::CacheStore;
use super::single_flight::SingleFlight;
use crate::ports::NameServiceClient;
use solcasa_domain::{CacheKey, CacheLookup, DomainName};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Answers "is this domain registered?" with asymmetric caching: positive
/// answers are kept for the long domain tier, negatives (including upstream
/// failures) for the short one so a pending registration is re-checked soon.
pub struct RegistrationChecker {
    upstream: Arc<dyn NameServiceClient>,
    cache: CacheStore,
    policy: CachePolicy,
    flights: SingleFlight<bool>,
}

impl RegistrationChecker {
    pub fn new(upstream: Arc<dyn NameServiceClient>, cache: CacheStore, policy: CachePolicy) -> Self {
        Self {
            upstream,
            cache,
            policy,
            flights: SingleFlight::new(),
        }
    }

    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn is_registered(&self, domain: &DomainName) -> bool {
        let key = CacheKey::domain_check(domain);

        match self.cache.get::<bool>(&key).await {
            CacheLookup::Hit(registered) => return registered,
            CacheLookup::NegativeHit => return false,
            CacheLookup::Miss => {}
        }

        self.flights
            .run(&key.render(), || self.check_upstream(domain, &key))
            .await
    }

    async fn check_upstream(&self, domain: &DomainName, key: &CacheKey) -> bool {
        match self.upstream.domain_status(domain).await {
            Ok(true) => {
                debug!("Domain registered");
                self.cache.put(key, &true, self.policy.domain).await;
                true
            }
            Ok(false) => {
                debug!("Domain not registered");
                self.cache.put_negative(key, self.policy.domain_negative).await;
                false
            }
            Err(e) => {
                warn!(error = %e, "Registration check failed, caching as unregistered");
                self.cache.put_negative(key, self.policy.domain_negative).await;
                false
            }
        }
    }
}
