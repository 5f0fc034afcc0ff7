pub mod kv;
pub mod use_cases;

pub use kv::build_kv_store;
pub use use_cases::UseCases;

use solcasa_api::AppState;
use solcasa_domain::Config;
use solcasa_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;

/// Fully wired application graph.
pub struct Services {
    pub use_cases: UseCases,
    pub app_state: AppState,
}

impl Services {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let kv = build_kv_store(&config.cache).await?;
        let use_cases = UseCases::new(config, kv)?;
        let app_state = use_cases.app_state(config);

        Ok(Self {
            use_cases,
            app_state,
        })
    }

    pub async fn start_jobs(&self, config: &Config, shutdown: CancellationToken) {
        JobRunner::new()
            .with_cache_sweep(
                CacheSweepJob::new(self.use_cases.purge_expired.clone())
                    .with_interval(config.cache.sweep_interval)
                    .with_cancellation(shutdown),
            )
            .start()
            .await;
    }
}
