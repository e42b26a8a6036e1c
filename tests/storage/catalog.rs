//! Integration tests for the catalog facade
//!
//! Tests cross-component consistency between affiliations, publications,
//! and the citation table.

use refgraph_foundation::{AffiliationId, Coord, PublicationId};
use refgraph_storage::Catalog;

fn aid(s: &str) -> AffiliationId {
    AffiliationId::from(s)
}

fn pid(n: u64) -> PublicationId {
    PublicationId(n)
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::new();
    assert_eq!(catalog.affiliation_count(), 0);
    assert_eq!(catalog.publication_count(), 0);
    assert!(catalog.all_affiliations().is_empty());
    assert!(catalog.all_publications().is_empty());
}

#[test]
fn unknown_affiliations_dropped_on_add() {
    let mut catalog = Catalog::new();
    catalog.add_affiliation("A", "a", Coord::new(0, 0));
    assert!(catalog.add_publication(pid(1), "p", 2000, &[aid("X"), aid("A"), aid("Y")]));
    assert_eq!(catalog.publication_affiliations(pid(1)), vec![aid("A")]);
    assert_eq!(catalog.publications_of(&aid("X")), None);
}

#[test]
fn citations_follow_attach_and_remove() {
    let mut catalog = Catalog::new();
    catalog.add_affiliation("A", "a", Coord::new(0, 0));
    catalog.add_publication(pid(1), "p1", 2000, &[]);
    catalog.add_publication(pid(2), "p2", 2001, &[aid("A")]);

    assert!(catalog.add_affiliation_to_publication(&aid("A"), pid(1)));
    assert_eq!(catalog.publications_of(&aid("A")), Some(vec![pid(2), pid(1)]));

    catalog.remove_publication(pid(2));
    assert_eq!(catalog.publications_of(&aid("A")), Some(vec![pid(1)]));
}

#[test]
fn removing_affiliation_never_leaves_dangling_keys() {
    let mut catalog = Catalog::new();
    catalog.add_affiliation("A", "a", Coord::new(0, 0));
    catalog.add_affiliation("B", "b", Coord::new(1, 0));
    catalog.add_publication(pid(1), "p1", 2000, &[aid("A"), aid("B"), aid("A")]);
    catalog.add_publication(pid(2), "p2", 2000, &[aid("A")]);

    assert!(catalog.remove_affiliation(&aid("A")));
    for id in catalog.all_publications() {
        assert!(!catalog.publication_affiliations(id).contains(&aid("A")));
    }
    assert_eq!(catalog.publication_affiliations(pid(1)), vec![aid("B")]);
    assert!(!catalog.add_affiliation_to_publication(&aid("A"), pid(2)));
}

#[test]
fn duplicate_adds_leave_state_unchanged() {
    let mut catalog = Catalog::new();
    assert!(catalog.add_affiliation("A", "first", Coord::new(1, 2)));
    assert!(!catalog.add_affiliation("A", "second", Coord::new(3, 4)));
    assert_eq!(catalog.affiliation_name(&aid("A")), Some("first"));
    assert_eq!(catalog.find_affiliation_with_coord(Coord::new(3, 4)), None);

    assert!(catalog.add_publication(pid(1), "first", 2000, &[aid("A")]));
    assert!(!catalog.add_publication(pid(1), "second", 2001, &[aid("A")]));
    assert_eq!(catalog.publication_name(pid(1)), Some("first"));
    assert_eq!(catalog.publications_of(&aid("A")), Some(vec![pid(1)]));
}
