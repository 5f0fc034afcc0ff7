//! Configuration module for the solcasa gateway
//!
//! - `root`: Main configuration, environment and CLI overrides
//! - `server`: HTTP binding
//! - `upstream`: Name-service proxy and RPC endpoints
//! - `cache`: Cache backend and TTL tiers
//! - `gateways`: Per-scheme gateway templates and fallback pages
//! - `http`: Response max-age values
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod gateways;
pub mod http;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::{CacheBackend, CacheConfig};
pub use errors::ConfigError;
pub use gateways::GatewayConfig;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
