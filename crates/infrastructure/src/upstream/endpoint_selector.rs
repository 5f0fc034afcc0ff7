use solcasa_domain::DomainError;

/// Uniform random choice among the configured RPC endpoints.
///
/// Construction rejects an empty list, so `pick` always has a candidate.
#[derive(Debug, Clone)]
pub struct EndpointSelector {
    endpoints: Vec<String>,
}

impl EndpointSelector {
    pub fn new(endpoints: Vec<String>) -> Result<Self, DomainError> {
        let endpoints: Vec<String> = endpoints
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();

        if endpoints.is_empty() {
            return Err(DomainError::NoEndpoints);
        }
        Ok(Self { endpoints })
    }

    pub fn pick(&self) -> &str {
        &self.endpoints[fastrand::usize(..self.endpoints.len())]
    }
}
