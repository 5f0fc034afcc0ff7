pub mod category;
pub mod record_type;

pub use category::RecordCategory;
pub use record_type::{RecordType, CONTENT_PRIORITY, WELL_KNOWN_RECORDS};
