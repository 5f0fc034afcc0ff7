use solcasa_domain::config::gateways::{DOMAIN_PLACEHOLDER, NAME_PLACEHOLDER};
use solcasa_domain::config::GatewayConfig;
use solcasa_domain::DomainName;

/// Human-facing pages used when a domain has nothing to serve.
#[derive(Debug, Clone)]
pub struct FallbackPages {
    not_registered: String,
    no_content: String,
    lookup: String,
}

impl FallbackPages {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            not_registered: config.not_registered_url.clone(),
            no_content: config.no_content_url.clone(),
            lookup: config.lookup_url.clone(),
        }
    }

    /// Search page offering the (unregistered) name.
    pub fn not_registered(&self, domain: &DomainName) -> String {
        render(&self.not_registered, domain)
    }

    /// Page for a registered name without content records.
    pub fn no_content(&self, domain: &DomainName) -> String {
        render(&self.no_content, domain)
    }

    /// Generic domain-lookup page.
    pub fn lookup(&self, domain: &DomainName) -> String {
        render(&self.lookup, domain)
    }
}

fn render(template: &str, domain: &DomainName) -> String {
    template
        .replace(NAME_PLACEHOLDER, domain.name())
        .replace(DOMAIN_PLACEHOLDER, domain.as_str())
}
