//! solcasa Domain Layer
pub mod cache_key;
pub mod config;
pub mod content;
pub mod domain_name;
pub mod errors;
pub mod record;
pub mod resolution;

pub use cache_key::CacheKey;
pub use config::{CliOverrides, Config, ConfigError};
pub use content::{is_absolute_http_url, ContentLocator, ContentScheme, FallbackReason};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use record::{RecordCategory, RecordType, CONTENT_PRIORITY, WELL_KNOWN_RECORDS};
pub use resolution::{CacheLookup, Resolution};
