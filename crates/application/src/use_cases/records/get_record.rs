use crate::services::CachedRecordReader;
use solcasa_domain::{DomainName, RecordType, Resolution};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Single-record query behind the `/.well-known/` path.
///
/// Registration is not checked here; a record on an unregistered name
/// simply resolves as absent upstream.
pub struct GetRecordUseCase {
    records: Arc<CachedRecordReader>,
}

impl GetRecordUseCase {
    pub fn new(records: Arc<CachedRecordReader>) -> Self {
        Self { records }
    }

    #[instrument(skip(self), fields(domain = %domain, record = %record_type))]
    pub async fn execute(&self, domain: &DomainName, record_type: RecordType) -> Resolution {
        let resolution = self.records.read(domain, record_type).await;
        debug!(found = !resolution.is_absent(), "Record query finished");
        resolution
    }
}
