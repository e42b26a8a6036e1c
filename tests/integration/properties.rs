//! Property tests over random operation sequences
//!
//! Drives the catalog with arbitrary adds, links, and removals and checks
//! that the cross-component links stay consistent.

use std::collections::HashSet;

use proptest::prelude::*;
use refgraph_engine::Query;
use refgraph_foundation::{AffiliationId, Coord, PublicationId};
use refgraph_storage::{Catalog, StoreConfig};

#[derive(Clone, Debug)]
enum Op {
    AddAffiliation(u8, i32, i32),
    AddPublication(u8, Vec<u8>),
    Link(u8, u8),
    Attach(u8, u8),
    MoveAffiliation(u8, i32, i32),
    RemoveAffiliation(u8),
    RemovePublication(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8, -20i32..20, -20i32..20).prop_map(|(a, x, y)| Op::AddAffiliation(a, x, y)),
        (0u8..12, prop::collection::vec(0u8..8, 0..3)).prop_map(|(p, a)| Op::AddPublication(p, a)),
        (0u8..12, 0u8..12).prop_map(|(c, p)| Op::Link(c, p)),
        (0u8..8, 0u8..12).prop_map(|(a, p)| Op::Attach(a, p)),
        (0u8..8, -20i32..20, -20i32..20).prop_map(|(a, x, y)| Op::MoveAffiliation(a, x, y)),
        (0u8..8).prop_map(Op::RemoveAffiliation),
        (0u8..12).prop_map(Op::RemovePublication),
    ]
}

fn aid(n: u8) -> AffiliationId {
    AffiliationId::new(format!("A{n}"))
}

fn pid(n: u8) -> PublicationId {
    PublicationId(u64::from(n))
}

fn apply(catalog: &mut Catalog, op: &Op) {
    match op {
        Op::AddAffiliation(a, x, y) => {
            catalog.add_affiliation(aid(*a), format!("Name {}", 7 - a), Coord::new(*x, *y));
        }
        Op::AddPublication(p, affiliations) => {
            let affiliations: Vec<_> = affiliations.iter().copied().map(aid).collect();
            catalog.add_publication(pid(*p), "p", 2000 + u16::from(*p), &affiliations);
        }
        Op::Link(child, parent) => {
            catalog.add_reference(pid(*child), pid(*parent));
        }
        Op::Attach(a, p) => {
            catalog.add_affiliation_to_publication(&aid(*a), pid(*p));
        }
        Op::MoveAffiliation(a, x, y) => {
            catalog.change_affiliation_coord(&aid(*a), Coord::new(*x, *y));
        }
        Op::RemoveAffiliation(a) => {
            catalog.remove_affiliation(&aid(*a));
        }
        Op::RemovePublication(p) => {
            catalog.remove_publication(pid(*p));
        }
    }
}

fn check_consistent(catalog: &Catalog) -> Result<(), TestCaseError> {
    let affiliations: HashSet<_> = catalog.all_affiliations().into_iter().collect();
    let publications: HashSet<_> = catalog.all_publications().into_iter().collect();

    for id in &publications {
        for a in catalog.publication_affiliations(*id) {
            prop_assert!(affiliations.contains(&a), "{id} keeps removed {a}");
        }
        for r in catalog.direct_references(*id) {
            prop_assert!(publications.contains(&r), "{id} references removed {r}");
        }
        if let Some(parent) = catalog.parent(*id) {
            prop_assert!(publications.contains(&parent), "{id} has removed parent {parent}");
        }
    }
    for a in &affiliations {
        let citing = catalog.publications_of(a).unwrap_or_default();
        for p in citing {
            prop_assert!(publications.contains(&p), "{a} cites removed {p}");
            prop_assert!(catalog.publication_affiliations(p).contains(a));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn links_stay_consistent(ops in prop::collection::vec(op(), 0..60)) {
        let mut catalog = Catalog::new();
        for op in &ops {
            apply(&mut catalog, op);
        }
        check_consistent(&catalog)?;
    }

    #[test]
    fn maintenance_policies_agree(ops in prop::collection::vec(op(), 0..60)) {
        let mut eager = Catalog::new();
        let mut deferred = Catalog::with_config(StoreConfig::deferred());
        for op in &ops {
            apply(&mut eager, op);
            apply(&mut deferred, op);
        }
        prop_assert_eq!(eager.affiliations_alphabetically(), deferred.affiliations_alphabetically());
        prop_assert_eq!(
            eager.affiliations_distance_increasing(),
            deferred.affiliations_distance_increasing()
        );
    }

    #[test]
    fn closures_never_repeat(ops in prop::collection::vec(op(), 0..60), start in 0u8..12) {
        let mut catalog = Catalog::new();
        for op in &ops {
            apply(&mut catalog, op);
        }
        let query = Query::new(&catalog);
        for closure in [query.all_references(pid(start)), query.referenced_by_chain(pid(start))] {
            let unique: HashSet<_> = closure.iter().copied().collect();
            prop_assert_eq!(unique.len(), closure.len());
        }
    }
}
