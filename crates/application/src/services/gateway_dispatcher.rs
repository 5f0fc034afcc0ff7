use super::fallback_pages::FallbackPages;
use solcasa_domain::config::gateways::PAYLOAD_PLACEHOLDER;
use solcasa_domain::config::GatewayConfig;
use solcasa_domain::{is_absolute_http_url, ContentLocator, ContentScheme, DomainName};

/// What the HTTP layer should do with a resolved locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayAction {
    /// Fetch this URL and relay the body.
    Proxy { url: String },
    /// Answer with an HTTP redirect.
    Redirect { url: String },
}

/// Maps each content scheme to exactly one gateway URL template.
pub struct GatewayDispatcher {
    ipfs: String,
    ipns: String,
    arweave: String,
    shadow_drive: String,
    pages: FallbackPages,
}

impl GatewayDispatcher {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            ipfs: config.ipfs.clone(),
            ipns: config.ipns.clone(),
            arweave: config.arweave.clone(),
            shadow_drive: config.shadow_drive.clone(),
            pages: FallbackPages::from_config(config),
        }
    }

    /// `path_and_query` is the original request target, e.g. `/docs/?v=2`.
    pub fn plan(
        &self,
        domain: &DomainName,
        locator: &ContentLocator,
        path_and_query: &str,
    ) -> GatewayAction {
        let template = match locator.scheme {
            ContentScheme::Ipfs => &self.ipfs,
            ContentScheme::Ipns => &self.ipns,
            ContentScheme::Arweave => &self.arweave,
            ContentScheme::ShadowDrive => &self.shadow_drive,
            ContentScheme::Url if is_absolute_http_url(&locator.payload) => {
                return GatewayAction::Redirect {
                    url: locator.payload.clone(),
                };
            }
            ContentScheme::None if !locator.payload.is_empty() => {
                return GatewayAction::Redirect {
                    url: locator.payload.clone(),
                };
            }
            ContentScheme::Url | ContentScheme::None => {
                return GatewayAction::Redirect {
                    url: self.pages.lookup(domain),
                };
            }
        };

        let mut url = template.replace(PAYLOAD_PLACEHOLDER, &locator.payload);
        if !path_and_query.is_empty() && path_and_query != "/" {
            if url.ends_with('/') && path_and_query.starts_with('/') {
                url.pop();
            }
            url.push_str(path_and_query);
        }
        GatewayAction::Proxy { url }
    }
}
