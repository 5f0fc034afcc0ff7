use serde::{Deserialize, Serialize};

/// Placeholder replaced by the locator payload in gateway templates
pub const PAYLOAD_PLACEHOLDER: &str = "{payload}";
/// Placeholder replaced by the first domain label in fallback templates
pub const NAME_PLACEHOLDER: &str = "{name}";
/// Placeholder replaced by the full domain in the lookup template
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// One outbound HTTP gateway per content scheme, plus fallback pages
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    #[serde(default = "default_ipfs")]
    pub ipfs: String,

    #[serde(default = "default_ipns")]
    pub ipns: String,

    #[serde(default = "default_arweave")]
    pub arweave: String,

    #[serde(default = "default_shadow_drive")]
    pub shadow_drive: String,

    /// Shown for names that are not registered
    #[serde(default = "default_not_registered_url")]
    pub not_registered_url: String,

    /// Shown for registered names without a content record
    #[serde(default = "default_no_content_url")]
    pub no_content_url: String,

    /// Generic lookup page for unrecognized content
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// Marketing site served on the bare gateway host (with trailing slash)
    #[serde(default = "default_home_page")]
    pub home_page: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            ipfs: default_ipfs(),
            ipns: default_ipns(),
            arweave: default_arweave(),
            shadow_drive: default_shadow_drive(),
            not_registered_url: default_not_registered_url(),
            no_content_url: default_no_content_url(),
            lookup_url: default_lookup_url(),
            home_page: default_home_page(),
        }
    }
}

fn default_ipfs() -> String {
    "https://ipfs.io/ipfs/{payload}".to_string()
}

fn default_ipns() -> String {
    "https://ipfs.io/ipns/{payload}".to_string()
}

fn default_arweave() -> String {
    "https://arweave.net/{payload}".to_string()
}

fn default_shadow_drive() -> String {
    "https://shdw-drive.genesysgo.net/{payload}".to_string()
}

fn default_not_registered_url() -> String {
    "https://www.sns.id/search?search={name}".to_string()
}

fn default_no_content_url() -> String {
    "https://www.sns.id/domain?domain={name}".to_string()
}

fn default_lookup_url() -> String {
    "https://www.sns.id/search?search={domain}".to_string()
}

fn default_home_page() -> String {
    "https://namesys-eth.github.io/".to_string()
}
