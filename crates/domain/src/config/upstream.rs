use serde::{Deserialize, Serialize};

/// Upstream name-service proxy and the RPC endpoints handed to it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the SNS SDK proxy (no trailing slash)
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,

    /// Solana RPC endpoints; one is picked at random per upstream call
    #[serde(default = "default_rpc_urls")]
    pub rpc_urls: Vec<String>,

    /// Per-request timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            rpc_urls: default_rpc_urls(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_proxy_url() -> String {
    "https://sns-sdk-proxy.bonfida.workers.dev".to_string()
}

fn default_rpc_urls() -> Vec<String> {
    vec!["https://api.mainnet-beta.solana.com".to_string()]
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Parse the comma separated endpoint list used by `SOLCASA_RPC_URLS`.
pub fn parse_endpoint_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
