pub mod mock_kv_store;

pub use mock_kv_store::*;
