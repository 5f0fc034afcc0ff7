use percent_encoding::percent_decode_str;
use solcasa_domain::{DomainError, DomainName, RecordType};
use std::borrow::Cow;

pub const WELL_KNOWN_PREFIX: &str = "/.well-known/";

const JSON_SUFFIX: &str = ".json";

/// A parsed `/.well-known/<reversed labels>/<category>/<key>.json` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub domain: DomainName,
    pub record_type: RecordType,
    pub category: String,
    pub key: String,
}

impl RecordQuery {
    /// `<category>/<key>` as requested, e.g. `address/60`.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.category, self.key)
    }
}

/// `None` when `path` is not a well-known path at all.
///
/// Segments are percent-decoded first, so `%F0%9F%8D%8D` reaches the domain
/// parser as `🍍`. Checks run in order: `.json` suffix, record table, then the
/// domain.
pub fn parse_well_known(path: &str) -> Option<Result<RecordQuery, DomainError>> {
    let rest = path.strip_prefix(WELL_KNOWN_PREFIX)?;
    Some(parse_segments(rest))
}

fn parse_segments(rest: &str) -> Result<RecordQuery, DomainError> {
    let mut segments = rest
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect::<Result<Vec<_>, _>>()?;

    let last = segments.pop().unwrap_or_default();
    let key = last
        .strip_suffix(JSON_SUFFIX)
        .ok_or_else(|| DomainError::UnknownRecordType(last.to_string()))?;

    let category = segments.pop().unwrap_or_default();
    let record_type = RecordType::from_well_known(&category, key)?;

    segments.reverse();
    let domain = DomainName::parse(&segments.join("."))?;

    Ok(RecordQuery {
        domain,
        record_type,
        key: key.to_string(),
        category: category.into_owned(),
    })
}

fn decode_segment(segment: &str) -> Result<Cow<'_, str>, DomainError> {
    percent_decode_str(segment).decode_utf8().map_err(|_| {
        DomainError::InvalidDomainName(format!("'{}' is not valid UTF-8", segment))
    })
}
