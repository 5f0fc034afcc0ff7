use super::category::RecordCategory;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name-service record identifiers, spelled the way the upstream record API expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    // Content pointers
    #[serde(rename = "IPFS")]
    Ipfs,
    #[serde(rename = "ARWV")]
    Arweave,
    #[serde(rename = "SHDW")]
    Shadow,
    #[serde(rename = "url")]
    Url,

    // Addresses
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "SOL")]
    Sol,
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "LTC")]
    Ltc,
    #[serde(rename = "DOGE")]
    Doge,

    // Text
    #[serde(rename = "pic")]
    Pic,
    #[serde(rename = "discord")]
    Discord,
    #[serde(rename = "twitter")]
    Twitter,
    #[serde(rename = "reddit")]
    Reddit,
    #[serde(rename = "telegram")]
    Telegram,
    #[serde(rename = "github")]
    Github,
}

/// `(category, key)` pairs accepted on the well-known query path.
///
/// Keys follow ENSIP conventions: SLIP-44 coin types for addresses and
/// reverse-DNS service names for text records.
pub const WELL_KNOWN_RECORDS: &[(&str, &str, RecordType)] = &[
    ("address", "60", RecordType::Eth),
    ("address", "eth", RecordType::Eth),
    ("address", "501", RecordType::Sol),
    ("address", "0", RecordType::Btc),
    ("address", "2", RecordType::Ltc),
    ("address", "3", RecordType::Doge),
    ("text", "avatar", RecordType::Pic),
    ("text", "url", RecordType::Url),
    ("text", "com.discord", RecordType::Discord),
    ("text", "com.twitter", RecordType::Twitter),
    ("text", "com.reddit", RecordType::Reddit),
    ("text", "org.telegram", RecordType::Telegram),
    ("text", "com.github", RecordType::Github),
];

/// Content record types in the order the content locator tries them.
pub const CONTENT_PRIORITY: [RecordType; 4] = [
    RecordType::Ipfs,
    RecordType::Arweave,
    RecordType::Shadow,
    RecordType::Url,
];

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Ipfs => "IPFS",
            RecordType::Arweave => "ARWV",
            RecordType::Shadow => "SHDW",
            RecordType::Url => "url",
            RecordType::Eth => "ETH",
            RecordType::Sol => "SOL",
            RecordType::Btc => "BTC",
            RecordType::Ltc => "LTC",
            RecordType::Doge => "DOGE",
            RecordType::Pic => "pic",
            RecordType::Discord => "discord",
            RecordType::Twitter => "twitter",
            RecordType::Reddit => "reddit",
            RecordType::Telegram => "telegram",
            RecordType::Github => "github",
        }
    }

    pub fn category(&self) -> RecordCategory {
        match self {
            RecordType::Ipfs | RecordType::Arweave | RecordType::Shadow | RecordType::Url => {
                RecordCategory::Content
            }

            RecordType::Eth
            | RecordType::Sol
            | RecordType::Btc
            | RecordType::Ltc
            | RecordType::Doge => RecordCategory::Address,

            RecordType::Pic
            | RecordType::Discord
            | RecordType::Twitter
            | RecordType::Reddit
            | RecordType::Telegram
            | RecordType::Github => RecordCategory::Text,
        }
    }

    /// Look up the record behind a well-known `(category, key)` pair.
    ///
    /// Returns `DomainError::UnknownRecordType` for pairs missing from
    /// [`WELL_KNOWN_RECORDS`].
    pub fn from_well_known(category: &str, key: &str) -> Result<Self, DomainError> {
        WELL_KNOWN_RECORDS
            .iter()
            .find(|(c, k, _)| *c == category && *k == key)
            .map(|(_, _, record)| *record)
            .ok_or_else(|| DomainError::UnknownRecordType(format!("{}/{}", category, key)))
    }

    pub fn is_content(&self) -> bool {
        matches!(self.category(), RecordCategory::Content)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IPFS" => Ok(RecordType::Ipfs),
            "ARWV" => Ok(RecordType::Arweave),
            "SHDW" => Ok(RecordType::Shadow),
            "url" => Ok(RecordType::Url),
            "ETH" => Ok(RecordType::Eth),
            "SOL" => Ok(RecordType::Sol),
            "BTC" => Ok(RecordType::Btc),
            "LTC" => Ok(RecordType::Ltc),
            "DOGE" => Ok(RecordType::Doge),
            "pic" => Ok(RecordType::Pic),
            "discord" => Ok(RecordType::Discord),
            "twitter" => Ok(RecordType::Twitter),
            "reddit" => Ok(RecordType::Reddit),
            "telegram" => Ok(RecordType::Telegram),
            "github" => Ok(RecordType::Github),
            _ => Err(DomainError::UnknownRecordType(s.to_string())),
        }
    }
}
