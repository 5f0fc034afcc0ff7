use solcasa_domain::{CacheKey, DomainName, RecordType};
use std::collections::HashSet;

fn domain(raw: &str) -> DomainName {
    DomainName::parse(raw).unwrap()
}

#[test]
fn test_key_formats() {
    let bob = domain("bob.sol");
    assert_eq!(CacheKey::domain_check(&bob).render(), "DOMAINCHECK_bob_sol");
    assert_eq!(CacheKey::record(&bob, RecordType::Ipfs).render(), "RECORD_bob_sol/IPFS");
    assert_eq!(CacheKey::content(&bob).render(), "CONTENT_bob_sol");
}

#[test]
fn test_keys_isolated_across_tlds() {
    let a = domain("alice.sol");
    let b = domain("alice.other");

    let keys: HashSet<String> = [
        CacheKey::domain_check(&a),
        CacheKey::domain_check(&b),
        CacheKey::content(&a),
        CacheKey::content(&b),
    ]
    .iter()
    .map(CacheKey::render)
    .collect();

    assert_eq!(keys.len(), 4);
}

#[test]
fn test_keys_isolated_across_purpose_and_record() {
    let bob = domain("bob.sol");
    let mut keys = HashSet::new();
    keys.insert(CacheKey::domain_check(&bob).render());
    keys.insert(CacheKey::content(&bob).render());
    for (_, _, record) in solcasa_domain::WELL_KNOWN_RECORDS {
        keys.insert(CacheKey::record(&bob, *record).render());
    }
    for record in solcasa_domain::CONTENT_PRIORITY {
        keys.insert(CacheKey::record(&bob, record).render());
    }

    // 2 purpose keys + 15 distinct record types
    assert_eq!(keys.len(), 17);
}

#[test]
fn test_subdomain_does_not_collide_with_sibling() {
    // "a.b.sol" and "a.b_sol" cannot both exist since '_' is rejected
    let nested = domain("a.b.sol");
    assert_eq!(CacheKey::content(&nested).render(), "CONTENT_a_b_sol");
    assert!(DomainName::parse("a_b.sol").is_err());
}

#[test]
fn test_emoji_domain_key() {
    let pineapple = domain("🍍.sol");
    assert_eq!(CacheKey::content(&pineapple).render(), "CONTENT_🍍_sol");
    assert_eq!(
        CacheKey::domain_check(&pineapple).render(),
        "DOMAINCHECK_🍍_sol"
    );
}
