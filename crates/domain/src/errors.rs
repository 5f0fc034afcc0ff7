use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Record Type \"{0}\" Not Found")]
    UnknownRecordType(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("Cache store error: {0}")]
    Cache(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("No upstream endpoints configured")]
    NoEndpoints,
}
