use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix character of IPNS keys (`k51...`) stored in the IPFS record.
pub const IPNS_KEY_PREFIX: char = 'k';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentScheme {
    /// Immutable IPFS content identifier
    Ipfs,
    /// Mutable IPNS name
    Ipns,
    /// Arweave transaction id
    Arweave,
    /// Shadow Drive storage path
    ShadowDrive,
    /// Plain URL
    Url,
    /// No content; the payload is a human-facing fallback URL
    None,
}

impl ContentScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentScheme::Ipfs => "ipfs",
            ContentScheme::Ipns => "ipns",
            ContentScheme::Arweave => "ar",
            ContentScheme::ShadowDrive => "shdw",
            ContentScheme::Url => "url",
            ContentScheme::None => "none",
        }
    }
}

impl fmt::Display for ContentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a domain resolved to a fallback page instead of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    NotRegistered,
    NoContent,
}

/// Canonical content reference for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLocator {
    pub scheme: ContentScheme,
    pub payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

impl ContentLocator {
    pub fn new(scheme: ContentScheme, payload: impl Into<String>) -> Self {
        Self {
            scheme,
            payload: payload.into(),
            fallback: None,
        }
    }

    /// Classify an IPFS record value: IPNS keys vs immutable CIDs.
    pub fn from_ipfs_record(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.starts_with(IPNS_KEY_PREFIX) {
            Self::new(ContentScheme::Ipns, value)
        } else {
            Self::new(ContentScheme::Ipfs, value)
        }
    }

    pub fn fallback(reason: FallbackReason, url: impl Into<String>) -> Self {
        Self {
            scheme: ContentScheme::None,
            payload: url.into(),
            fallback: Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.scheme == ContentScheme::None
    }
}

impl fmt::Display for ContentLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme {
            ContentScheme::Url | ContentScheme::None => f.write_str(&self.payload),
            scheme => write!(f, "{}://{}", scheme, self.payload),
        }
    }
}

/// Whether `value` is an absolute `http://` or `https://` URL.
pub fn is_absolute_http_url(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
