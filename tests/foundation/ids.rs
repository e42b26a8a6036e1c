//! Integration tests for record identifiers

use std::collections::HashSet;

use refgraph_foundation::{AffiliationId, PublicationId};

#[test]
fn affiliation_ids_compare_by_string() {
    assert_eq!(AffiliationId::from("A1"), AffiliationId::new(String::from("A1")));
    assert_ne!(AffiliationId::from("A1"), AffiliationId::from("a1"));
    assert_eq!(AffiliationId::from("xyz").as_str(), "xyz");
}

#[test]
fn affiliation_ids_hash_consistently() {
    let set: HashSet<_> = ["A", "B", "A"].into_iter().map(AffiliationId::from).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn publication_ids_convert_from_integers() {
    let id: PublicationId = 7u64.into();
    assert_eq!(id, PublicationId::new(7));
    assert_eq!(id.get(), 7);
}

#[test]
fn sorted_publication_ids() {
    let mut ids = vec![PublicationId(30), PublicationId(4), PublicationId(100)];
    ids.sort();
    assert_eq!(ids, vec![PublicationId(4), PublicationId(30), PublicationId(100)]);
}
