use super::EndpointSelector;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use solcasa_application::ports::{NameServiceClient, RecordV2};
use solcasa_domain::config::UpstreamConfig;
use solcasa_domain::{DomainError, DomainName, RecordType};
use std::time::Duration;
use tracing::{debug, instrument};

const STATUS_OK: &str = "ok";

/// `{ "s": "ok" | "error", "result": ... }` as returned by every proxy route.
#[derive(Debug, Deserialize)]
struct Envelope {
    s: String,
    result: Option<Value>,
}

impl Envelope {
    fn is_ok(&self) -> bool {
        self.s == STATUS_OK
    }
}

#[derive(Debug, Deserialize)]
struct RecordV2Payload {
    deserialized: Option<Value>,
    #[serde(default)]
    stale: bool,
}

/// HTTP client for the SNS SDK proxy.
///
/// Each call picks an RPC endpoint at random and passes it as the `rpc`
/// query parameter.
pub struct SnsProxyClient {
    client: reqwest::Client,
    proxy_url: String,
    endpoints: EndpointSelector,
}

impl SnsProxyClient {
    pub fn new(
        proxy_url: &str,
        endpoints: EndpointSelector,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            proxy_url: proxy_url.trim_end_matches('/').to_string(),
            endpoints,
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        Self::new(
            &config.proxy_url,
            EndpointSelector::new(config.rpc_urls.clone())?,
            Duration::from_millis(config.timeout_ms),
        )
    }

    async fn get(&self, path: &str) -> Result<Envelope, DomainError> {
        let url = format!("{}/{}", self.proxy_url, path);
        let rpc = self.endpoints.pick();

        debug!(url = %url, rpc = %rpc, "Querying SNS proxy");

        let response = self
            .client
            .get(&url)
            .query(&[("rpc", rpc)])
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            DomainError::Upstream(format!("Failed to read response from {}: {}", url, e))
        })?;

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::MalformedPayload(format!("{}: {}", url, e)))
    }

    async fn get_ok(&self, path: &str) -> Result<Option<Value>, DomainError> {
        let envelope = self.get(path).await?;
        if !envelope.is_ok() {
            return Err(DomainError::Upstream(format!(
                "SNS proxy answered \"{}\" for {}",
                envelope.s, path
            )));
        }
        Ok(envelope.result)
    }
}

/// Strings pass through; null is absent; other JSON is kept in its text form.
fn value_to_string(value: Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    }
}

#[async_trait]
impl NameServiceClient for SnsProxyClient {
    #[instrument(skip(self), fields(domain = %domain))]
    async fn domain_status(&self, domain: &DomainName) -> Result<bool, DomainError> {
        let envelope = self.get(&format!("resolve/{}", domain)).await?;
        let owner = value_to_string(envelope.result).unwrap_or_default();
        Ok(envelope.s == STATUS_OK && !owner.is_empty())
    }

    #[instrument(skip(self), fields(domain = %domain, record = %record_type))]
    async fn record_v2(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordV2, DomainError> {
        let path = format!("record-v2/{}/{}", domain, record_type);
        let result = self
            .get_ok(&path)
            .await?
            .ok_or_else(|| DomainError::MalformedPayload(format!("{}: missing result", path)))?;

        let payload: RecordV2Payload = serde_json::from_value(result)
            .map_err(|e| DomainError::MalformedPayload(format!("{}: {}", path, e)))?;

        Ok(RecordV2 {
            deserialized: value_to_string(payload.deserialized),
            stale: payload.stale,
        })
    }

    #[instrument(skip(self), fields(domain = %domain, record = %record_type))]
    async fn record_v1(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<Option<String>, DomainError> {
        let result = self
            .get_ok(&format!("record/{}/{}", domain, record_type))
            .await?;
        Ok(value_to_string(result))
    }
}
