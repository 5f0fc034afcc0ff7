use solcasa_api::AppState;
use solcasa_application::ports::{ContentFetcher, KvStore, NameServiceClient};
use solcasa_application::services::{
    CachePolicy, CacheStore, CachedRecordReader, FallbackPages, GatewayDispatcher,
    RecordResolver, RegistrationChecker,
};
use solcasa_application::use_cases::{
    GetRecordUseCase, LocateContentUseCase, PurgeExpiredEntriesUseCase,
};
use solcasa_domain::Config;
use solcasa_infrastructure::http::HttpContentFetcher;
use solcasa_infrastructure::upstream::SnsProxyClient;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub locate_content: Arc<LocateContentUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub purge_expired: Arc<PurgeExpiredEntriesUseCase>,
    pub fetcher: Arc<dyn ContentFetcher>,
}

impl UseCases {
    pub fn new(config: &Config, kv: Arc<dyn KvStore>) -> anyhow::Result<Self> {
        let upstream: Arc<dyn NameServiceClient> =
            Arc::new(SnsProxyClient::from_config(&config.upstream)?);
        let fetcher: Arc<dyn ContentFetcher> = Arc::new(HttpContentFetcher::new(
            Duration::from_millis(config.upstream.timeout_ms),
        )?);

        let policy = CachePolicy::from_config(&config.cache);
        let cache = CacheStore::new(kv.clone(), Duration::from_secs(config.cache.min_ttl));

        let registration = Arc::new(RegistrationChecker::new(
            upstream.clone(),
            cache.clone(),
            policy,
        ));
        let records = Arc::new(CachedRecordReader::new(
            Arc::new(RecordResolver::new(upstream)),
            cache.clone(),
            policy,
        ));

        Ok(Self {
            locate_content: Arc::new(LocateContentUseCase::new(
                registration,
                records.clone(),
                cache,
                policy,
                FallbackPages::from_config(&config.gateways),
            )),
            get_record: Arc::new(GetRecordUseCase::new(records)),
            purge_expired: Arc::new(PurgeExpiredEntriesUseCase::new(kv)),
            fetcher,
        })
    }

    pub fn app_state(&self, config: &Config) -> AppState {
        AppState {
            locate_content: self.locate_content.clone(),
            get_record: self.get_record.clone(),
            dispatcher: Arc::new(GatewayDispatcher::new(&config.gateways)),
            fetcher: self.fetcher.clone(),
            http: Arc::new(config.http.clone()),
            home_page: Arc::from(config.gateways.home_page.as_str()),
        }
    }
}
