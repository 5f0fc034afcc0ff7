#![allow(dead_code)]

use async_trait::async_trait;
use solcasa_application::ports::{KvStore, NameServiceClient, RecordV2};
use solcasa_application::services::{
    CachePolicy, CacheStore, CachedRecordReader, FallbackPages, RecordResolver,
    RegistrationChecker,
};
use solcasa_application::use_cases::{GetRecordUseCase, LocateContentUseCase};
use solcasa_domain::config::GatewayConfig;
use solcasa_domain::{DomainError, DomainName, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock KvStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockKvStore {
    entries: Arc<RwLock<HashMap<String, (String, Duration)>>>,
    writes: Arc<RwLock<u64>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value and TTL for `key`
    pub async fn entry(&self, key: &str) -> Option<(String, Duration)> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub async fn seed(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), Duration::from_secs(60)));
    }

    /// Simulate expiry of a single entry
    pub async fn expire(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn write_count(&self) -> u64 {
        *self.writes.read().await
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl KvStore for MockKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Cache("mock store unavailable".to_string()));
        }
        Ok(self.entries.read().await.get(key).map(|(v, _)| v.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Cache("mock store unavailable".to_string()));
        }
        *self.writes.write().await += 1;
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        Ok(0)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

// ============================================================================
// Mock NameServiceClient
// ============================================================================

#[derive(Clone)]
pub enum V2Response {
    Ok(RecordV2),
    Fail,
}

#[derive(Clone, Default)]
pub struct MockNameService {
    registered: Arc<RwLock<HashMap<String, Result<bool, ()>>>>,
    v2: Arc<RwLock<HashMap<(String, RecordType), V2Response>>>,
    v1: Arc<RwLock<HashMap<(String, RecordType), Option<String>>>>,
    calls: Arc<RwLock<Vec<String>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockNameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_registered(&self, domain: &str, registered: bool) {
        self.registered
            .write()
            .await
            .insert(domain.to_string(), Ok(registered));
    }

    pub async fn set_status_error(&self, domain: &str) {
        self.registered
            .write()
            .await
            .insert(domain.to_string(), Err(()));
    }

    /// Configure a fresh record-v2 value
    pub async fn set_v2(&self, domain: &str, record: RecordType, value: &str) {
        self.v2.write().await.insert(
            (domain.to_string(), record),
            V2Response::Ok(RecordV2 {
                deserialized: Some(value.to_string()),
                stale: false,
            }),
        );
    }

    pub async fn set_v2_stale(&self, domain: &str, record: RecordType, value: &str) {
        self.v2.write().await.insert(
            (domain.to_string(), record),
            V2Response::Ok(RecordV2 {
                deserialized: Some(value.to_string()),
                stale: true,
            }),
        );
    }

    pub async fn set_v2_failure(&self, domain: &str, record: RecordType) {
        self.v2
            .write()
            .await
            .insert((domain.to_string(), record), V2Response::Fail);
    }

    pub async fn set_v1(&self, domain: &str, record: RecordType, value: Option<&str>) {
        self.v1
            .write()
            .await
            .insert((domain.to_string(), record), value.map(str::to_string));
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Record types queried through either API generation, deduplicated in order
    pub async fn records_attempted(&self, domain: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for call in self.calls.read().await.iter() {
            if let Some(rest) = call
                .strip_prefix("v2:")
                .or_else(|| call.strip_prefix("v1:"))
            {
                if let Some(record) = rest.strip_prefix(&format!("{domain}/")) {
                    if !seen.iter().any(|r| r == record) {
                        seen.push(record.to_string());
                    }
                }
            }
        }
        seen
    }

    async fn log(&self, call: String) {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl NameServiceClient for MockNameService {
    async fn domain_status(&self, domain: &DomainName) -> Result<bool, DomainError> {
        self.log(format!("status:{}", domain)).await;
        match self.registered.read().await.get(domain.as_str()) {
            Some(Ok(registered)) => Ok(*registered),
            Some(Err(())) => Err(DomainError::Upstream("mock status failure".to_string())),
            None => Ok(false),
        }
    }

    async fn record_v2(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordV2, DomainError> {
        self.log(format!("v2:{}/{}", domain, record_type)).await;
        match self
            .v2
            .read()
            .await
            .get(&(domain.to_string(), record_type))
        {
            Some(V2Response::Ok(record)) => Ok(record.clone()),
            Some(V2Response::Fail) | None => Err(DomainError::UpstreamStatus {
                status: 404,
                url: format!("mock://record-v2/{}/{}", domain, record_type),
            }),
        }
    }

    async fn record_v1(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<Option<String>, DomainError> {
        self.log(format!("v1:{}/{}", domain, record_type)).await;
        match self
            .v1
            .read()
            .await
            .get(&(domain.to_string(), record_type))
        {
            Some(value) => Ok(value.clone()),
            None => Err(DomainError::UpstreamStatus {
                status: 404,
                url: format!("mock://record/{}/{}", domain, record_type),
            }),
        }
    }
}

// ============================================================================
// Pipeline wiring
// ============================================================================

pub struct Pipeline {
    pub upstream: Arc<MockNameService>,
    pub kv: Arc<MockKvStore>,
    pub policy: CachePolicy,
    pub registration: Arc<RegistrationChecker>,
    pub resolver: Arc<RecordResolver>,
    pub records: Arc<CachedRecordReader>,
    pub locate: LocateContentUseCase,
    pub get_record: GetRecordUseCase,
}

pub fn test_policy() -> CachePolicy {
    CachePolicy {
        domain: Duration::from_secs(86_400),
        domain_negative: Duration::from_secs(60),
        record: Duration::from_secs(900),
        record_negative: Duration::from_secs(60),
        content: Duration::from_secs(600),
        content_negative: Duration::from_secs(60),
    }
}

pub fn build_pipeline() -> Pipeline {
    let upstream = Arc::new(MockNameService::new());
    let kv = Arc::new(MockKvStore::new());
    let policy = test_policy();
    let cache = CacheStore::new(kv.clone(), Duration::from_secs(60));

    let registration = Arc::new(RegistrationChecker::new(
        upstream.clone(),
        cache.clone(),
        policy,
    ));
    let resolver = Arc::new(RecordResolver::new(upstream.clone()));
    let records = Arc::new(CachedRecordReader::new(
        resolver.clone(),
        cache.clone(),
        policy,
    ));
    let locate = LocateContentUseCase::new(
        registration.clone(),
        records.clone(),
        cache,
        policy,
        FallbackPages::from_config(&GatewayConfig::default()),
    );
    let get_record = GetRecordUseCase::new(records.clone());

    Pipeline {
        upstream,
        kv,
        policy,
        registration,
        resolver,
        records,
        locate,
        get_record,
    }
}

pub fn domain(raw: &str) -> DomainName {
    DomainName::parse(raw).unwrap()
}
