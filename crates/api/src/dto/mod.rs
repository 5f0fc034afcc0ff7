pub mod error;
pub mod record;

pub use error::ErrorResponse;
pub use record::RecordResponse;
