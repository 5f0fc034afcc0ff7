pub mod headers;

pub use headers::{http_date, json_error, with_cache_headers, with_security_headers};
