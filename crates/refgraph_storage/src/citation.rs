//! Affiliation -> publication cross-reference table.

use std::collections::HashMap;

use refgraph_foundation::{AffiliationId, PublicationId};

/// Maps each affiliation to the publications that cite it, in citation order.
#[derive(Clone, Debug, Default)]
pub struct CitationTable {
    entries: HashMap<AffiliationId, Vec<PublicationId>>,
}

impl CitationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `publication` cites `affiliation`.
    pub fn record(&mut self, affiliation: AffiliationId, publication: PublicationId) {
        self.entries.entry(affiliation).or_default().push(publication);
    }

    /// Publications citing `affiliation`; empty if none were recorded.
    #[must_use]
    pub fn publications(&self, affiliation: &AffiliationId) -> &[PublicationId] {
        self.entries
            .get(affiliation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Removes every citation of `affiliation` by `publication`.
    pub fn forget_publication(&mut self, affiliation: &AffiliationId, publication: PublicationId) {
        if let Some(publications) = self.entries.get_mut(affiliation) {
            publications.retain(|p| *p != publication);
        }
    }

    /// Drops the whole entry for `affiliation`.
    pub fn forget_affiliation(&mut self, affiliation: &AffiliationId) {
        self.entries.remove(affiliation);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
