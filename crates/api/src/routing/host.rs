use solcasa_domain::DomainName;

/// How a request is served, decided by its `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostClass {
    /// `<name>.<tld>.<gateway>`: resolve and serve the domain's content.
    Content(DomainName),
    /// Bare gateway host: relay the home page.
    Home,
    /// Anything else.
    Unsupported,
}

/// Lowercases the host and drops any `:port` suffix before counting labels.
pub fn classify_host(host: Option<&str>) -> HostClass {
    let Some(host) = host else {
        return HostClass::Home;
    };
    let host = strip_port(host.trim()).to_ascii_lowercase();

    match host.split('.').count() {
        0..=2 => HostClass::Home,
        3 => DomainName::from_gateway_host(&host)
            .map(HostClass::Content)
            .unwrap_or(HostClass::Unsupported),
        _ => HostClass::Unsupported,
    }
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}
