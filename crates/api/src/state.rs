use solcasa_application::ports::ContentFetcher;
use solcasa_application::services::GatewayDispatcher;
use solcasa_application::use_cases::{GetRecordUseCase, LocateContentUseCase};
use solcasa_domain::config::HttpConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub locate_content: Arc<LocateContentUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub dispatcher: Arc<GatewayDispatcher>,
    pub fetcher: Arc<dyn ContentFetcher>,
    pub http: Arc<HttpConfig>,
    /// Origin served for bare gateway hosts, with trailing slash.
    pub home_page: Arc<str>,
}
