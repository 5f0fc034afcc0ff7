mod endpoint_selector;
mod sns_proxy;

pub use endpoint_selector::EndpointSelector;
pub use sns_proxy::SnsProxyClient;
