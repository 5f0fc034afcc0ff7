use solcasa_domain::DomainError;
use solcasa_infrastructure::upstream::EndpointSelector;
use std::collections::HashSet;

#[test]
fn test_empty_list_rejected() {
    assert_eq!(
        EndpointSelector::new(vec![]).unwrap_err(),
        DomainError::NoEndpoints
    );
    assert_eq!(
        EndpointSelector::new(vec!["  ".to_string(), String::new()]).unwrap_err(),
        DomainError::NoEndpoints
    );
}

#[test]
fn test_single_endpoint_always_chosen() {
    let selector = EndpointSelector::new(vec!["https://a.example".to_string()]).unwrap();
    for _ in 0..10 {
        assert_eq!(selector.pick(), "https://a.example");
    }
}

#[test]
fn test_every_endpoint_eventually_chosen() {
    let endpoints = vec![
        "https://a.example".to_string(),
        "https://b.example".to_string(),
        "https://c.example".to_string(),
    ];
    let selector = EndpointSelector::new(endpoints.clone()).unwrap();

    let seen: HashSet<&str> = (0..500).map(|_| selector.pick()).collect();

    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|s| endpoints.iter().any(|e| e == s)));
}

#[test]
fn test_entries_trimmed() {
    let selector = EndpointSelector::new(vec![" https://a.example ".to_string()]).unwrap();
    assert_eq!(selector.pick(), "https://a.example");
}
