//! Read-only queries that compose the storage components.
//!
//! This module provides:
//! - Ancestor chains and lowest common ancestor over parent links
//! - Reference closures in both directions
//! - Nearest-affiliation search
//! - Per-affiliation publication listings by year

use std::collections::HashSet;

use refgraph_foundation::{AffiliationId, Coord, PublicationId, Year};
use refgraph_storage::Catalog;

use crate::traversal::{depth_first, parent_chain};

/// Executes queries against a borrowed [`Catalog`].
#[derive(Clone, Copy, Debug)]
pub struct Query<'c> {
    catalog: &'c Catalog,
}

impl<'c> Query<'c> {
    /// Creates a query executor over `catalog`.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// The publication followed by its parent, grandparent, and so on up to
    /// the root. Empty if `id` does not exist.
    ///
    /// A looping parent chain is cut at the first repeat.
    #[must_use]
    pub fn ancestors(&self, id: PublicationId) -> Vec<PublicationId> {
        let graph = self.catalog.publications();
        if !graph.contains(id) {
            return Vec::new();
        }
        parent_chain(id, |p| graph.parent(p))
    }

    /// The deepest publication that is an ancestor of (or equal to) both `a`
    /// and `b`.
    ///
    /// Both ancestor chains are read root-first; the answer is the last
    /// entry of their shared prefix. `None` when the two publications sit in
    /// different trees or either does not exist. Only meaningful while the
    /// parent links form a forest.
    #[must_use]
    pub fn lowest_common_ancestor(&self, a: PublicationId, b: PublicationId) -> Option<PublicationId> {
        let mut chain_a = self.ancestors(a);
        let mut chain_b = self.ancestors(b);
        chain_a.reverse();
        chain_b.reverse();

        chain_a
            .iter()
            .zip(chain_b.iter())
            .take_while(|(x, y)| x == y)
            .last()
            .map(|(x, _)| *x)
    }

    /// Every publication that transitively references `id`, following
    /// reverse edges, in discovery order. Empty if `id` does not exist.
    #[must_use]
    pub fn referenced_by_chain(&self, id: PublicationId) -> Vec<PublicationId> {
        let graph = self.catalog.publications();
        if !graph.contains(id) {
            return Vec::new();
        }
        depth_first(id, |p| graph.referenced_by(p))
    }

    /// Every publication transitively referenced by `id`, following
    /// forward edges, in discovery order. Empty if `id` does not exist.
    #[must_use]
    pub fn all_references(&self, id: PublicationId) -> Vec<PublicationId> {
        let graph = self.catalog.publications();
        if !graph.contains(id) {
            return Vec::new();
        }
        depth_first(id, |p| graph.references(p))
    }

    /// The configured number of affiliations nearest to `coord`.
    #[must_use]
    pub fn closest_to(&self, coord: Coord) -> Vec<AffiliationId> {
        self.closest_to_n(coord, self.catalog.config().nearest_count)
    }

    /// The `count` affiliations nearest to `coord`, closest first, ties
    /// broken by id.
    #[must_use]
    pub fn closest_to_n(&self, coord: Coord, count: usize) -> Vec<AffiliationId> {
        self.catalog.affiliations().closest_to(coord, count)
    }

    /// `(year, id)` of each publication citing `affiliation` published in
    /// `year` or later, sorted by year then id.
    ///
    /// A publication attached to the affiliation more than once is listed
    /// once. Empty if the affiliation does not exist.
    #[must_use]
    pub fn publications_after(&self, affiliation: &AffiliationId, year: Year) -> Vec<(Year, PublicationId)> {
        let graph = self.catalog.publications();
        let Some(citing) = self.catalog.publications_of(affiliation) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut result: Vec<(Year, PublicationId)> = citing
            .into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| graph.year(id).map(|y| (y, id)))
            .filter(|(y, _)| *y >= year)
            .collect();
        result.sort_unstable();
        result
    }

    /// Returns true if `ancestor` lies on the parent chain of `id`
    /// (a publication counts as its own ancestor).
    #[must_use]
    pub fn is_ancestor(&self, ancestor: PublicationId, id: PublicationId) -> bool {
        self.ancestors(id).contains(&ancestor)
    }
}
