use super::cache::{CacheBackend, CacheConfig};
use super::errors::ConfigError;
use super::gateways::{GatewayConfig, PAYLOAD_PLACEHOLDER};
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::{parse_endpoint_list, UpstreamConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "solcasa.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub gateways: GatewayConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that take precedence over file and environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub cache_backend: Option<CacheBackend>,
}

impl Config {
    /// Load configuration: file (or defaults) → `SOLCASA_*` environment → CLI.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SOLCASA_RPC_URLS") {
            self.upstream.rpc_urls = parse_endpoint_list(&raw);
        }
        if let Some(url) = lookup("SOLCASA_PROXY_URL") {
            self.upstream.proxy_url = url;
        }
        if let Some(url) = lookup("SOLCASA_DATABASE_URL") {
            self.cache.database_url = url;
        }
        if let Some(ttl) = parse_env_u64(&lookup, "SOLCASA_DOMAIN_TTL")? {
            self.cache.domain_ttl = ttl;
        }
        if let Some(ttl) = parse_env_u64(&lookup, "SOLCASA_RECORD_TTL")? {
            self.cache.record_ttl = ttl;
        }
        if let Some(ttl) = parse_env_u64(&lookup, "SOLCASA_CONTENT_TTL")? {
            self.cache.content_ttl = ttl;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(backend) = overrides.cache_backend {
            self.cache.backend = backend;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.rpc_urls.is_empty() {
            return Err(ConfigError::Validation(
                "upstream.rpc_urls must contain at least one endpoint".to_string(),
            ));
        }
        if !self.upstream.proxy_url.starts_with("http://")
            && !self.upstream.proxy_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "upstream.proxy_url must be an http(s) URL, got '{}'",
                self.upstream.proxy_url
            )));
        }

        let c = &self.cache;
        let tiers = [
            ("cache.domain_ttl", c.domain_ttl),
            ("cache.domain_negative_ttl", c.domain_negative_ttl),
            ("cache.record_ttl", c.record_ttl),
            ("cache.record_negative_ttl", c.record_negative_ttl),
            ("cache.content_ttl", c.content_ttl),
            ("cache.content_negative_ttl", c.content_negative_ttl),
        ];
        if let Some((name, _)) = tiers.iter().find(|(_, ttl)| *ttl == 0) {
            return Err(ConfigError::Validation(format!("{} must be > 0", name)));
        }
        let pairs = [
            ("domain", c.domain_ttl, c.domain_negative_ttl),
            ("record", c.record_ttl, c.record_negative_ttl),
            ("content", c.content_ttl, c.content_negative_ttl),
        ];
        for (tier, positive, negative) in pairs {
            if negative >= positive {
                return Err(ConfigError::Validation(format!(
                    "cache.{tier}_negative_ttl ({negative}) must be shorter than cache.{tier}_ttl ({positive})"
                )));
            }
            // Writes are floored to min_ttl, so the tiers must stay apart after flooring
            if positive <= c.min_ttl {
                return Err(ConfigError::Validation(format!(
                    "cache.{tier}_ttl ({positive}) must be longer than cache.min_ttl ({})",
                    c.min_ttl
                )));
            }
        }

        let g = &self.gateways;
        for (name, template) in [
            ("gateways.ipfs", &g.ipfs),
            ("gateways.ipns", &g.ipns),
            ("gateways.arweave", &g.arweave),
            ("gateways.shadow_drive", &g.shadow_drive),
        ] {
            if !template.contains(PAYLOAD_PLACEHOLDER) {
                return Err(ConfigError::Validation(format!(
                    "{} must contain {}",
                    name, PAYLOAD_PLACEHOLDER
                )));
            }
        }

        Ok(())
    }
}

fn parse_env_u64<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value: raw }),
    }
}
