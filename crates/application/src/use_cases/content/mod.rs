pub mod locate_content;

pub use locate_content::{normalize_url_record, LocateContentUseCase};
