use solcasa_application::use_cases::PurgeExpiredEntriesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Periodically removes expired entries from the cache store.
pub struct CacheSweepJob {
    purge: Arc<PurgeExpiredEntriesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(purge: Arc<PurgeExpiredEntriesUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.purge.execute().await {
                            Ok(0) => debug!("Cache sweep found nothing to remove"),
                            Ok(removed) => info!(removed, "Cache sweep completed"),
                            Err(e) => error!(error = %e, "Cache sweep failed"),
                        }
                    }
                }
            }
        });
    }
}
