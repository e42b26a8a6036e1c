//! Integration tests for the publication graph
//!
//! Tests publication records, reference linking, and removal cascades.

use refgraph_foundation::{AffiliationId, Coord, PublicationId};
use refgraph_storage::Catalog;

fn aid(s: &str) -> AffiliationId {
    AffiliationId::from(s)
}

fn pid(n: u64) -> PublicationId {
    PublicationId(n)
}

fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_affiliation("A", "Alpha", Coord::new(0, 0));
    catalog.add_affiliation("B", "Beta", Coord::new(5, 5));
    for (n, year) in [(1, 1990), (2, 2000), (3, 2010), (4, 2020)] {
        catalog.add_publication(pid(n), format!("Paper {n}"), year, &[aid("A")]);
    }
    catalog
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn publication_attributes() {
    let catalog = catalog();
    assert_eq!(catalog.publication_name(pid(3)), Some("Paper 3"));
    assert_eq!(catalog.publication_year(pid(3)), Some(2010));
    assert_eq!(catalog.publication_affiliations(pid(3)), vec![aid("A")]);
    let record = catalog.publication(pid(3)).unwrap();
    assert_eq!(record.parent, None);
    assert!(record.references.is_empty());
}

#[test]
fn all_publications_lists_every_id() {
    let catalog = catalog();
    let mut ids = catalog.all_publications();
    ids.sort();
    assert_eq!(ids, vec![pid(1), pid(2), pid(3), pid(4)]);
}

#[test]
fn affiliation_list_keeps_duplicates_in_order() {
    let mut catalog = catalog();
    catalog.add_affiliation_to_publication(&aid("B"), pid(1));
    catalog.add_affiliation_to_publication(&aid("A"), pid(1));
    assert_eq!(
        catalog.publication_affiliations(pid(1)),
        vec![aid("A"), aid("B"), aid("A")]
    );
}

// =============================================================================
// References
// =============================================================================

#[test]
fn reference_chain() {
    let mut catalog = catalog();
    assert!(catalog.add_reference(pid(1), pid(2)));
    assert!(catalog.add_reference(pid(2), pid(3)));

    assert_eq!(catalog.parent(pid(1)), Some(pid(2)));
    assert_eq!(catalog.parent(pid(2)), Some(pid(3)));
    assert_eq!(catalog.parent(pid(3)), None);
    assert_eq!(catalog.direct_references(pid(3)), vec![pid(2)]);
    assert_eq!(catalog.direct_references(pid(2)), vec![pid(1)]);
}

#[test]
fn reference_to_unknown_publication_fails() {
    let mut catalog = catalog();
    assert!(!catalog.add_reference(pid(1), pid(99)));
    assert!(!catalog.add_reference(pid(99), pid(1)));
    assert_eq!(catalog.parent(pid(1)), None);
    assert!(catalog.direct_references(pid(1)).is_empty());
}

#[test]
fn direct_references_of_unknown_is_empty() {
    let catalog = catalog();
    assert!(catalog.direct_references(pid(42)).is_empty());
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn removing_middle_of_chain() {
    let mut catalog = catalog();
    catalog.add_reference(pid(1), pid(2));
    catalog.add_reference(pid(2), pid(3));

    assert!(catalog.remove_publication(pid(2)));
    assert_eq!(catalog.publication_count(), 3);
    assert_eq!(catalog.parent(pid(1)), None);
    assert!(catalog.direct_references(pid(3)).is_empty());
    assert_eq!(catalog.publications_of(&aid("A")), Some(vec![pid(1), pid(3), pid(4)]));
}

#[test]
fn removing_unknown_publication_fails() {
    let mut catalog = catalog();
    assert!(!catalog.remove_publication(pid(99)));
    assert_eq!(catalog.publication_count(), 4);
}

#[test]
fn removing_leaf_keeps_parent_links() {
    let mut catalog = catalog();
    catalog.add_reference(pid(1), pid(3));
    catalog.add_reference(pid(2), pid(3));

    catalog.remove_publication(pid(1));
    assert_eq!(catalog.direct_references(pid(3)), vec![pid(2)]);
    assert_eq!(catalog.parent(pid(2)), Some(pid(3)));
}

#[test]
fn removed_id_can_be_reused() {
    let mut catalog = catalog();
    catalog.add_reference(pid(1), pid(2));
    catalog.remove_publication(pid(2));
    assert!(catalog.add_publication(pid(2), "Fresh", 2024, &[aid("B")]));
    assert!(catalog.direct_references(pid(2)).is_empty());
    assert!(catalog.publications().referenced_by(pid(2)).is_empty());
    assert_eq!(catalog.publications_of(&aid("B")), Some(vec![pid(2)]));
}
