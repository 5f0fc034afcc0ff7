use crate::{DomainName, RecordType};
use std::fmt;

/// Purpose-namespaced key into the key-value cache store.
///
/// - `DOMAINCHECK_<slug>` registration status
/// - `RECORD_<slug>/<record>` individual record values
/// - `CONTENT_<slug>` fully resolved content locators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    DomainCheck(DomainName),
    Record(DomainName, RecordType),
    Content(DomainName),
}

impl CacheKey {
    pub fn domain_check(domain: &DomainName) -> Self {
        CacheKey::DomainCheck(domain.clone())
    }

    pub fn record(domain: &DomainName, record_type: RecordType) -> Self {
        CacheKey::Record(domain.clone(), record_type)
    }

    pub fn content(domain: &DomainName) -> Self {
        CacheKey::Content(domain.clone())
    }

    /// Wire form used by the store.
    pub fn render(&self) -> String {
        match self {
            CacheKey::DomainCheck(d) => format!("DOMAINCHECK_{}", d.slug()),
            CacheKey::Record(d, r) => format!("RECORD_{}/{}", d.slug(), r.as_str()),
            CacheKey::Content(d) => format!("CONTENT_{}", d.slug()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
