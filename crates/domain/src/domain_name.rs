use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A normalized (lowercase) name-service domain such as `bob.sol`.
///
/// Labels may hold any Unicode (emoji and accented names included) but never
/// `_`, so replacing `.` with `_` yields a collision-free cache slug. Path,
/// query and whitespace characters are rejected as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().trim_end_matches('.').to_lowercase();

        if normalized.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain cannot be empty".to_string(),
            ));
        }
        if normalized.len() > MAX_DOMAIN_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} characters",
                normalized, MAX_DOMAIN_LEN
            )));
        }

        for label in normalized.split('.') {
            Self::validate_label(label, &normalized)?;
        }

        Ok(Self(Arc::from(normalized.as_str())))
    }

    /// Build a domain from the first two labels of a `<name>.<tld>.<gateway>` host.
    pub fn from_gateway_host(host: &str) -> Result<Self, DomainError> {
        let mut labels = host.split('.');
        match (labels.next(), labels.next(), labels.next(), labels.next()) {
            (Some(name), Some(tld), Some(_), None) => Self::parse(&format!("{}.{}", name, tld)),
            _ => Err(DomainError::InvalidDomainName(format!(
                "'{}' is not a <name>.<tld>.<gateway> host",
                host
            ))),
        }
    }

    fn validate_label(label: &str, domain: &str) -> Result<(), DomainError> {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                domain
            )));
        }
        if label.chars().count() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if let Some(c) = label.chars().find(|c| Self::is_forbidden(*c)) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains invalid character '{}'",
                domain, c
            )));
        }
        Ok(())
    }

    fn is_forbidden(c: char) -> bool {
        matches!(c, '_' | '/' | '\\' | '?' | '#' | '%' | ':' | '@')
            || c.is_whitespace()
            || c.is_control()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First label, e.g. `bob` for `bob.sol`.
    pub fn name(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Cache-key form of the domain (`bob.sol` → `bob_sol`).
    pub fn slug(&self) -> String {
        self.0.replace('.', "_")
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0.to_string()
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
