pub mod cache_policy;
pub mod cache_store;
pub mod fallback_pages;
pub mod gateway_dispatcher;
pub mod record_reader;
pub mod record_resolver;
pub mod registration_checker;
pub mod single_flight;

pub use cache_policy::CachePolicy;
pub use cache_store::{CacheStore, NEGATIVE_MARKER};
pub use fallback_pages::FallbackPages;
pub use gateway_dispatcher::{GatewayAction, GatewayDispatcher};
pub use record_reader::CachedRecordReader;
pub use record_resolver::RecordResolver;
pub use registration_checker::RegistrationChecker;
pub use single_flight::SingleFlight;
