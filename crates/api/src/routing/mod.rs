pub mod host;
pub mod well_known;

pub use host::{classify_host, HostClass};
pub use well_known::{parse_well_known, RecordQuery, WELL_KNOWN_PREFIX};
