pub mod sns_proxy_mock;

pub use sns_proxy_mock::*;
