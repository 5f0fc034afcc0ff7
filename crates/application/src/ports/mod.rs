pub mod content_fetcher;
pub mod kv_store;
pub mod name_service;

pub use content_fetcher::{ContentFetcher, FetchedContent};
pub use kv_store::KvStore;
pub use name_service::{NameServiceClient, RecordV2};
