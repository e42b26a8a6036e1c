//! The unified interface to all storage components.
//!
//! A `Catalog` owns the [`AffiliationIndex`], the [`PublicationGraph`], and
//! the [`CitationTable`], and is the only place where a change in one of them
//! is propagated to the others. Cloning is cheap for the ordered indices
//! (persistent sets) and linear for the maps.

use refgraph_foundation::{AffiliationId, Coord, Name, PublicationId, Year};

use crate::affiliation::{Affiliation, AffiliationIndex};
use crate::citation::CitationTable;
use crate::config::StoreConfig;
use crate::publication::{Publication, PublicationGraph};

/// In-memory store of affiliations and publications.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    config: StoreConfig,
    affiliations: AffiliationIndex,
    publications: PublicationGraph,
    citations: CitationTable,
}

impl Catalog {
    /// Creates an empty catalog with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            affiliations: AffiliationIndex::with_maintenance(config.maintenance),
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the affiliation index.
    #[must_use]
    pub fn affiliations(&self) -> &AffiliationIndex {
        &self.affiliations
    }

    /// Returns the publication graph.
    #[must_use]
    pub fn publications(&self) -> &PublicationGraph {
        &self.publications
    }

    /// Returns the cross-reference table.
    #[must_use]
    pub fn citations(&self) -> &CitationTable {
        &self.citations
    }

    /// Removes all affiliations, publications, and citations.
    pub fn clear_all(&mut self) {
        self.affiliations.clear();
        self.publications.clear();
        self.citations.clear();
        tracing::debug!("cleared catalog");
    }

    // --- Affiliations ---

    /// Returns the number of affiliations.
    #[must_use]
    pub fn affiliation_count(&self) -> usize {
        self.affiliations.len()
    }

    /// All affiliation ids, in no particular order.
    #[must_use]
    pub fn all_affiliations(&self) -> Vec<AffiliationId> {
        self.affiliations.ids()
    }

    /// Adds an affiliation. Returns false if `id` already exists.
    pub fn add_affiliation(
        &mut self,
        id: impl Into<AffiliationId>,
        name: impl Into<Name>,
        coord: Coord,
    ) -> bool {
        self.affiliations.add(id.into(), name, coord)
    }

    /// Bulk-loads affiliations, returning how many were new.
    ///
    /// Ordered listings are rebuilt once, on their next read.
    pub fn load_affiliations<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = (AffiliationId, Name, Coord)>,
    {
        self.affiliations.extend(records)
    }

    /// Gets an affiliation record.
    #[must_use]
    pub fn affiliation(&self, id: &AffiliationId) -> Option<&Affiliation> {
        self.affiliations.get(id)
    }

    /// Gets the name of an affiliation.
    #[must_use]
    pub fn affiliation_name(&self, id: &AffiliationId) -> Option<&str> {
        self.affiliations.name(id)
    }

    /// Gets the coordinate of an affiliation.
    #[must_use]
    pub fn affiliation_coord(&self, id: &AffiliationId) -> Option<Coord> {
        self.affiliations.coord(id)
    }

    /// Affiliation ids sorted by name, ties broken by id.
    ///
    /// May rebuild the name index, hence `&mut self`.
    pub fn affiliations_alphabetically(&mut self) -> Vec<AffiliationId> {
        self.affiliations.alphabetical()
    }

    /// Affiliation ids sorted by squared distance from the origin, ties
    /// broken by id.
    ///
    /// May rebuild the distance index, hence `&mut self`.
    pub fn affiliations_distance_increasing(&mut self) -> Vec<AffiliationId> {
        self.affiliations.by_distance_increasing()
    }

    /// The first-inserted affiliation still located at `coord`.
    #[must_use]
    pub fn find_affiliation_with_coord(&self, coord: Coord) -> Option<AffiliationId> {
        self.affiliations.find_by_coord(coord)
    }

    /// Moves an affiliation. Returns false if `id` does not exist.
    pub fn change_affiliation_coord(&mut self, id: &AffiliationId, coord: Coord) -> bool {
        self.affiliations.set_coord(id, coord)
    }

    /// Removes an affiliation.
    ///
    /// The id is stripped from every publication's affiliation list and its
    /// cross-reference entry is dropped. Returns false if `id` does not exist.
    pub fn remove_affiliation(&mut self, id: &AffiliationId) -> bool {
        if self.affiliations.remove(id).is_none() {
            return false;
        }
        let touched = self.publications.strip_affiliation(id);
        self.citations.forget_affiliation(id);
        tracing::debug!(id = %id, publications = touched, "detached removed affiliation");
        true
    }

    // --- Publications ---

    /// Returns the number of publications.
    #[must_use]
    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    /// All publication ids, in no particular order.
    #[must_use]
    pub fn all_publications(&self) -> Vec<PublicationId> {
        self.publications.ids()
    }

    /// Adds a publication.
    ///
    /// Unknown affiliation ids are dropped silently; each retained one gets a
    /// cross-reference entry. Returns false if `id` already exists.
    pub fn add_publication(
        &mut self,
        id: PublicationId,
        name: impl Into<Name>,
        year: Year,
        affiliations: &[AffiliationId],
    ) -> bool {
        if self.publications.contains(id) {
            tracing::trace!(id = %id, "duplicate publication rejected");
            return false;
        }
        let known: Vec<AffiliationId> = affiliations
            .iter()
            .filter(|a| self.affiliations.contains(a))
            .cloned()
            .collect();
        if known.len() != affiliations.len() {
            tracing::trace!(
                id = %id,
                dropped = affiliations.len() - known.len(),
                "ignored unknown affiliations"
            );
        }
        for affiliation in &known {
            self.citations.record(affiliation.clone(), id);
        }
        self.publications
            .add(id, Publication::new(name, year, known))
    }

    /// Gets a publication record.
    #[must_use]
    pub fn publication(&self, id: PublicationId) -> Option<&Publication> {
        self.publications.get(id)
    }

    /// Gets the title of a publication.
    #[must_use]
    pub fn publication_name(&self, id: PublicationId) -> Option<&str> {
        self.publications.name(id)
    }

    /// Gets the year of a publication.
    #[must_use]
    pub fn publication_year(&self, id: PublicationId) -> Option<Year> {
        self.publications.year(id)
    }

    /// Affiliations of a publication in attachment order; empty if the
    /// publication does not exist.
    #[must_use]
    pub fn publication_affiliations(&self, id: PublicationId) -> Vec<AffiliationId> {
        self.publications.affiliations(id).to_vec()
    }

    /// Makes `parent` the parent of `child`. Returns false unless both exist.
    pub fn add_reference(&mut self, child: PublicationId, parent: PublicationId) -> bool {
        self.publications.add_reference(child, parent)
    }

    /// Direct references (children) of a publication; empty if it does not
    /// exist.
    #[must_use]
    pub fn direct_references(&self, id: PublicationId) -> Vec<PublicationId> {
        self.publications.references(id).to_vec()
    }

    /// Attaches an affiliation to a publication.
    ///
    /// Returns false unless both exist.
    pub fn add_affiliation_to_publication(
        &mut self,
        affiliation: &AffiliationId,
        publication: PublicationId,
    ) -> bool {
        if !self.affiliations.contains(affiliation) {
            tracing::trace!(affiliation = %affiliation, "attach of unknown affiliation");
            return false;
        }
        if !self
            .publications
            .attach_affiliation(publication, affiliation.clone())
        {
            tracing::trace!(publication = %publication, "attach to unknown publication");
            return false;
        }
        self.citations.record(affiliation.clone(), publication);
        tracing::debug!(affiliation = %affiliation, publication = %publication, "attached affiliation");
        true
    }

    /// Publications citing an affiliation, in citation order.
    ///
    /// `None` means the affiliation does not exist; `Some(vec![])` means it
    /// exists but nothing cites it.
    #[must_use]
    pub fn publications_of(&self, affiliation: &AffiliationId) -> Option<Vec<PublicationId>> {
        if !self.affiliations.contains(affiliation) {
            return None;
        }
        Some(self.citations.publications(affiliation).to_vec())
    }

    /// Gets the parent of a publication.
    #[must_use]
    pub fn parent(&self, id: PublicationId) -> Option<PublicationId> {
        self.publications.parent(id)
    }

    /// Removes a publication.
    ///
    /// Detaches it from its affiliations' citation lists and from every
    /// reference list and reverse edge in the graph. Returns false if `id`
    /// does not exist.
    pub fn remove_publication(&mut self, id: PublicationId) -> bool {
        let Some(record) = self.publications.remove(id) else {
            return false;
        };
        for affiliation in &record.affiliations {
            self.citations.forget_publication(affiliation, id);
        }
        true
    }
}
