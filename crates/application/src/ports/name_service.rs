use async_trait::async_trait;
use solcasa_domain::{DomainError, DomainName, RecordType};

/// Payload of the newer-generation record endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordV2 {
    pub deserialized: Option<String>,
    pub stale: bool,
}

/// Upstream name-service API (opaque HTTP service).
///
/// Every method reports transport and payload failures as `Err`; callers
/// decide how to degrade.
#[async_trait]
pub trait NameServiceClient: Send + Sync {
    /// `Ok(true)` when the upstream reports the domain as registered.
    async fn domain_status(&self, domain: &DomainName) -> Result<bool, DomainError>;

    /// Newer-generation record endpoint.
    async fn record_v2(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordV2, DomainError>;

    /// Older-generation record endpoint, returning its raw result value.
    async fn record_v1(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<Option<String>, DomainError>;
}
