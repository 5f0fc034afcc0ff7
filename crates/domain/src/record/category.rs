use std::fmt;

/// Externally visible record categories of the `/.well-known/` query path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    /// Records that point at hosted content (IPFS, Arweave, Shadow Drive, URL)
    Content,
    /// Coin addresses keyed by SLIP-44 coin type or ticker
    Address,
    /// Free-text profile records keyed by a namespaced key
    Text,
}

impl RecordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Content => "content",
            RecordCategory::Address => "address",
            RecordCategory::Text => "text",
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
