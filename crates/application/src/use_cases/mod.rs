pub mod cache;
pub mod content;
pub mod records;

pub use cache::PurgeExpiredEntriesUseCase;
pub use content::LocateContentUseCase;
pub use records::GetRecordUseCase;
