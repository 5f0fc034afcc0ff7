pub mod purge_expired;

pub use purge_expired::PurgeExpiredEntriesUseCase;
