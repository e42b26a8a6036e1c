//! Publication records and the reference graph.
//!
//! Each publication has at most one parent and any number of references
//! (children). Edges are stored twice so traversal works in both
//! directions without scanning every record:
//! - Forward: parent -> `references` (children)
//! - Reverse: child -> `referenced_by` (every parent it was ever linked to)
//!
//! `add_reference` is the only way to assign a parent. It performs no cycle
//! check; traversals guard themselves with a visited set.

use std::collections::HashMap;

use refgraph_foundation::{AffiliationId, Name, PublicationId, Year};

/// A publication record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Publication {
    /// Title.
    pub name: Name,
    /// Publication year.
    pub year: Year,
    /// Affiliations in attachment order (duplicates allowed).
    pub affiliations: Vec<AffiliationId>,
    /// Parent publication, if one was assigned.
    pub parent: Option<PublicationId>,
    /// Direct references (children), in link order.
    pub references: Vec<PublicationId>,
}

impl Publication {
    /// Creates a publication with no parent and no references.
    #[must_use]
    pub fn new(name: impl Into<Name>, year: Year, affiliations: Vec<AffiliationId>) -> Self {
        Self {
            name: name.into(),
            year,
            affiliations,
            parent: None,
            references: Vec::new(),
        }
    }
}

/// Owns every publication plus the reverse-edge map.
#[derive(Clone, Debug, Default)]
pub struct PublicationGraph {
    records: HashMap<PublicationId, Publication>,
    /// Reverse index: child -> parents, in link order.
    referenced_by: HashMap<PublicationId, Vec<PublicationId>>,
}

impl PublicationGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of publications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no publications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks if a publication exists.
    #[must_use]
    pub fn contains(&self, id: PublicationId) -> bool {
        self.records.contains_key(&id)
    }

    /// Gets a record.
    #[must_use]
    pub fn get(&self, id: PublicationId) -> Option<&Publication> {
        self.records.get(&id)
    }

    /// All publication ids, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<PublicationId> {
        self.records.keys().copied().collect()
    }

    /// Gets the title of a publication.
    #[must_use]
    pub fn name(&self, id: PublicationId) -> Option<&str> {
        self.records.get(&id).map(|p| p.name.as_str())
    }

    /// Gets the year of a publication.
    #[must_use]
    pub fn year(&self, id: PublicationId) -> Option<Year> {
        self.records.get(&id).map(|p| p.year)
    }

    /// Affiliations of a publication; empty if it does not exist.
    #[must_use]
    pub fn affiliations(&self, id: PublicationId) -> &[AffiliationId] {
        self.records
            .get(&id)
            .map(|p| p.affiliations.as_slice())
            .unwrap_or_default()
    }

    /// Gets the parent of a publication.
    #[must_use]
    pub fn parent(&self, id: PublicationId) -> Option<PublicationId> {
        self.records.get(&id).and_then(|p| p.parent)
    }

    /// Direct references (children); empty if the publication does not exist.
    #[must_use]
    pub fn references(&self, id: PublicationId) -> &[PublicationId] {
        self.records
            .get(&id)
            .map(|p| p.references.as_slice())
            .unwrap_or_default()
    }

    /// Publications that directly reference `id` (reverse edges).
    #[must_use]
    pub fn referenced_by(&self, id: PublicationId) -> &[PublicationId] {
        self.referenced_by
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Adds a publication whose affiliation list has already been validated.
    ///
    /// Returns false without changing anything if `id` already exists.
    pub fn add(&mut self, id: PublicationId, publication: Publication) -> bool {
        if self.records.contains_key(&id) {
            tracing::trace!(id = %id, "duplicate publication rejected");
            return false;
        }
        tracing::debug!(id = %id, year = publication.year, "added publication");
        self.records.insert(id, publication);
        true
    }

    /// Makes `parent` the parent of `child`.
    ///
    /// Appends `child` to the parent's references and `parent` to the child's
    /// reverse edges. Linking again re-parents the child; earlier edges are
    /// kept. Returns false unless both publications exist.
    pub fn add_reference(&mut self, child: PublicationId, parent: PublicationId) -> bool {
        if !self.records.contains_key(&child) {
            tracing::trace!(child = %child, parent = %parent, "reference from unknown publication");
            return false;
        }
        let Some(parent_record) = self.records.get_mut(&parent) else {
            tracing::trace!(child = %child, parent = %parent, "reference to unknown publication");
            return false;
        };
        parent_record.references.push(child);
        if let Some(child_record) = self.records.get_mut(&child) {
            child_record.parent = Some(parent);
        }
        self.referenced_by.entry(child).or_default().push(parent);
        tracing::debug!(child = %child, parent = %parent, "linked publications");
        true
    }

    /// Appends an affiliation to a publication's list.
    ///
    /// The caller checks that the affiliation exists. Returns false if the
    /// publication does not exist.
    pub fn attach_affiliation(&mut self, id: PublicationId, affiliation: AffiliationId) -> bool {
        let Some(record) = self.records.get_mut(&id) else {
            return false;
        };
        record.affiliations.push(affiliation);
        true
    }

    /// Strips an affiliation from every publication's list.
    ///
    /// Returns the number of publications that mentioned it.
    pub fn strip_affiliation(&mut self, affiliation: &AffiliationId) -> usize {
        let mut touched = 0;
        for record in self.records.values_mut() {
            let before = record.affiliations.len();
            record.affiliations.retain(|a| a != affiliation);
            if record.affiliations.len() != before {
                touched += 1;
            }
        }
        touched
    }

    /// Removes a publication and every edge that mentions it.
    ///
    /// Children that named it as parent lose their parent. Returns the
    /// removed record so the caller can prune its affiliation links, or
    /// `None` if `id` does not exist.
    pub fn remove(&mut self, id: PublicationId) -> Option<Publication> {
        let Some(record) = self.records.remove(&id) else {
            tracing::trace!(id = %id, "removal of unknown publication");
            return None;
        };

        // Children: drop the reverse edge back to `id` and orphan them.
        for child in &record.references {
            if let Some(parents) = self.referenced_by.get_mut(child) {
                parents.retain(|p| *p != id);
                if parents.is_empty() {
                    self.referenced_by.remove(child);
                }
            }
            if let Some(child_record) = self.records.get_mut(child) {
                if child_record.parent == Some(id) {
                    child_record.parent = None;
                }
            }
        }

        // Every other publication: `id` may sit in any references list.
        for other in self.records.values_mut() {
            other.references.retain(|r| *r != id);
        }

        self.referenced_by.remove(&id);
        tracing::debug!(id = %id, "removed publication");
        Some(record)
    }

    /// Removes every publication.
    pub fn clear(&mut self) {
        self.records.clear();
        self.referenced_by.clear();
    }
}
