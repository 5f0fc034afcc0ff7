#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt;
use solcasa_api::{create_gateway_routes, AppState};
use solcasa_application::ports::{ContentFetcher, FetchedContent, NameServiceClient, RecordV2};
use solcasa_application::services::{
    CachePolicy, CacheStore, CachedRecordReader, FallbackPages, GatewayDispatcher,
    RecordResolver, RegistrationChecker,
};
use solcasa_application::use_cases::{GetRecordUseCase, LocateContentUseCase};
use solcasa_domain::config::{CacheConfig, GatewayConfig, HttpConfig};
use solcasa_domain::{DomainError, DomainName, RecordType};
use solcasa_infrastructure::kv::MemoryKvStore;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower::ServiceExt;

// ============================================================================
// Mock NameServiceClient
// ============================================================================

/// Registered names and record-v2 values; everything else fails upstream.
#[derive(Default)]
pub struct MockNameService {
    registered: RwLock<HashSet<String>>,
    records: RwLock<HashMap<(String, RecordType), String>>,
}

impl MockNameService {
    pub async fn register(&self, domain: &str) {
        self.registered.write().await.insert(domain.to_string());
    }

    pub async fn set_record(&self, domain: &str, record: RecordType, value: &str) {
        self.records
            .write()
            .await
            .insert((domain.to_string(), record), value.to_string());
    }
}

#[async_trait]
impl NameServiceClient for MockNameService {
    async fn domain_status(&self, domain: &DomainName) -> Result<bool, DomainError> {
        Ok(self.registered.read().await.contains(domain.as_str()))
    }

    async fn record_v2(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordV2, DomainError> {
        match self
            .records
            .read()
            .await
            .get(&(domain.to_string(), record_type))
        {
            Some(value) => Ok(RecordV2 {
                deserialized: Some(value.clone()),
                stale: false,
            }),
            None => Err(DomainError::UpstreamStatus {
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
        Err(DomainError::UpstreamStatus {
            status: 404,
            url: format!("mock://record/{}/{}", domain, record_type),
        })
    }
}

// ============================================================================
// Mock ContentFetcher
// ============================================================================

#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, (u16, String, String)>>,
    fetched: RwLock<Vec<String>>,
}

impl MockFetcher {
    pub async fn serve(&self, url: &str, status: u16, content_type: &str, body: &str) {
        self.pages.write().await.insert(
            url.to_string(),
            (status, content_type.to_string(), body.to_string()),
        );
    }

    pub async fn fetched(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedContent, DomainError> {
        self.fetched.write().await.push(url.to_string());
        match self.pages.read().await.get(url) {
            Some((status, content_type, body)) => Ok(FetchedContent {
                status: *status,
                content_type: Some(content_type.clone()),
                body: Bytes::from(body.clone()),
            }),
            None => Err(DomainError::Gateway(format!("{} unreachable", url))),
        }
    }
}

// ============================================================================
// App wiring
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub upstream: Arc<MockNameService>,
    pub fetcher: Arc<MockFetcher>,
}

pub fn build_app() -> TestApp {
    let upstream = Arc::new(MockNameService::default());
    let fetcher = Arc::new(MockFetcher::default());
    let gateways = GatewayConfig::default();
    let policy = CachePolicy::from_config(&CacheConfig::default());
    let cache = CacheStore::new(Arc::new(MemoryKvStore::new()), Duration::from_secs(60));

    let registration = Arc::new(RegistrationChecker::new(
        upstream.clone(),
        cache.clone(),
        policy,
    ));
    let records = Arc::new(CachedRecordReader::new(
        Arc::new(RecordResolver::new(upstream.clone())),
        cache.clone(),
        policy,
    ));

    let state = AppState {
        locate_content: Arc::new(LocateContentUseCase::new(
            registration,
            records.clone(),
            cache,
            policy,
            FallbackPages::from_config(&gateways),
        )),
        get_record: Arc::new(GetRecordUseCase::new(records)),
        dispatcher: Arc::new(GatewayDispatcher::new(&gateways)),
        fetcher: fetcher.clone(),
        http: Arc::new(HttpConfig::default()),
        home_page: Arc::from(gateways.home_page.as_str()),
    };

    TestApp {
        router: create_gateway_routes(state),
        upstream,
        fetcher,
    }
}

pub struct TestResponse {
    pub status: u16,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn get(app: &TestApp, host: &str, path: &str) -> TestResponse {
    let request = Request::builder()
        .uri(path)
        .header("host", host)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
