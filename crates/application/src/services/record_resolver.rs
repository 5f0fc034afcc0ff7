use crate::ports::NameServiceClient;
use solcasa_domain::{DomainName, RecordType, Resolution};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Fetches a single record, newer API generation first.
///
/// - v2 success: stale → `Absent`, otherwise the deserialized value
/// - v2 failure of any kind → v1; v1 success → its raw value
/// - both failed → `Absent`
///
/// A stale v2 record is a successful answer, so v1 is never consulted for it;
/// v1 still holds the value the owner has since invalidated.
///
/// Performs no caching; callers cache per record type.
pub struct RecordResolver {
    upstream: Arc<dyn NameServiceClient>,
}

impl RecordResolver {
    pub fn new(upstream: Arc<dyn NameServiceClient>) -> Self {
        Self { upstream }
    }

    #[instrument(skip(self), fields(domain = %domain, record = %record_type))]
    pub async fn resolve(&self, domain: &DomainName, record_type: RecordType) -> Resolution {
        let v2_error = match self.upstream.record_v2(domain, record_type).await {
            Ok(record) if record.stale => {
                debug!("Record is stale, treating as absent");
                return Resolution::Absent;
            }
            Ok(record) => return Resolution::from_option(record.deserialized),
            Err(e) => e,
        };

        debug!(error = %v2_error, "record-v2 failed, falling back to record-v1");

        match self.upstream.record_v1(domain, record_type).await {
            Ok(value) => Resolution::from_option(value),
            Err(e) => {
                warn!(v2_error = %v2_error, v1_error = %e, "Both record API generations failed");
                Resolution::Absent
            }
        }
    }
}
