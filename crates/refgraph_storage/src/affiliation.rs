//! Affiliation records and their secondary indices.
//!
//! The primary map owns every record. Three derived structures sit beside
//! it:
//! - a name index ordered by `(name, id)`
//! - a distance index ordered by `(squared distance from origin, id)`
//! - a coordinate reverse index `coord -> ids at that coord`
//!
//! The ordered indices may go stale (see [`IndexMaintenance`]); the
//! coordinate index is always kept exact.

use std::collections::HashMap;

use refgraph_foundation::{AffiliationId, Coord, Distance, Name, squared_distance};

use crate::config::IndexMaintenance;
use crate::index::SortedIndex;

/// A named, geolocated record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affiliation {
    /// Display name.
    pub name: Name,
    /// Location.
    pub coord: Coord,
}

/// Owns all affiliation records plus the indices derived from them.
#[derive(Clone, Debug, Default)]
pub struct AffiliationIndex {
    records: HashMap<AffiliationId, Affiliation>,
    by_name: SortedIndex<Name>,
    by_distance: SortedIndex<Distance>,
    /// Ids per coordinate, in insertion order. Empty buckets are removed.
    by_coord: HashMap<Coord, Vec<AffiliationId>>,
    maintenance: IndexMaintenance,
}

impl AffiliationIndex {
    /// Creates an empty index with eager maintenance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with the given maintenance policy.
    #[must_use]
    pub fn with_maintenance(maintenance: IndexMaintenance) -> Self {
        Self {
            maintenance,
            ..Self::default()
        }
    }

    /// Returns the maintenance policy.
    #[must_use]
    pub fn maintenance(&self) -> IndexMaintenance {
        self.maintenance
    }

    /// Number of affiliations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no affiliations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks if an affiliation exists.
    #[must_use]
    pub fn contains(&self, id: &AffiliationId) -> bool {
        self.records.contains_key(id)
    }

    /// Gets a record.
    #[must_use]
    pub fn get(&self, id: &AffiliationId) -> Option<&Affiliation> {
        self.records.get(id)
    }

    /// Gets the name of an affiliation.
    #[must_use]
    pub fn name(&self, id: &AffiliationId) -> Option<&str> {
        self.records.get(id).map(|a| a.name.as_str())
    }

    /// Gets the coordinate of an affiliation.
    #[must_use]
    pub fn coord(&self, id: &AffiliationId) -> Option<Coord> {
        self.records.get(id).map(|a| a.coord)
    }

    /// All affiliation ids, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<AffiliationId> {
        self.records.keys().cloned().collect()
    }

    /// Adds an affiliation.
    ///
    /// Returns false without changing anything if `id` already exists.
    pub fn add(&mut self, id: AffiliationId, name: impl Into<Name>, coord: Coord) -> bool {
        if self.records.contains_key(&id) {
            tracing::trace!(id = %id, "duplicate affiliation rejected");
            return false;
        }
        let name = name.into();
        self.index_insert(&id, &name, coord);
        self.by_coord.entry(coord).or_default().push(id.clone());
        tracing::debug!(id = %id, %coord, "added affiliation");
        self.records.insert(id, Affiliation { name, coord });
        true
    }

    /// Bulk-loads affiliations, skipping ids that already exist.
    ///
    /// The ordered indices are marked stale instead of being updated per
    /// record, so the whole batch costs one rebuild on the next ordered read.
    /// Returns the number of records added.
    pub fn extend<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = (AffiliationId, Name, Coord)>,
    {
        self.by_name.mark_stale();
        self.by_distance.mark_stale();

        let mut added = 0;
        for (id, name, coord) in records {
            if self.records.contains_key(&id) {
                continue;
            }
            self.by_coord.entry(coord).or_default().push(id.clone());
            self.records.insert(id, Affiliation { name, coord });
            added += 1;
        }
        tracing::debug!(added, "bulk-loaded affiliations");
        added
    }

    /// Moves an affiliation to a new coordinate.
    ///
    /// Returns false if `id` does not exist.
    pub fn set_coord(&mut self, id: &AffiliationId, coord: Coord) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            tracing::trace!(id = %id, "coordinate change for unknown affiliation");
            return false;
        };
        let old = std::mem::replace(&mut record.coord, coord);

        match self.maintenance {
            IndexMaintenance::Eager => {
                self.by_distance
                    .remove(old.distance_from_origin(), id.clone());
                self.by_distance
                    .insert(coord.distance_from_origin(), id.clone());
            }
            IndexMaintenance::Deferred => self.by_distance.mark_stale(),
        }

        self.unbucket(id, old);
        self.by_coord.entry(coord).or_default().push(id.clone());
        tracing::debug!(id = %id, from = %old, to = %coord, "moved affiliation");
        true
    }

    /// Removes an affiliation and every index entry that mentions it.
    ///
    /// Returns the removed record, or `None` if `id` does not exist.
    pub fn remove(&mut self, id: &AffiliationId) -> Option<Affiliation> {
        let Some(record) = self.records.remove(id) else {
            tracing::trace!(id = %id, "removal of unknown affiliation");
            return None;
        };

        match self.maintenance {
            IndexMaintenance::Eager => {
                self.by_name.remove(record.name.clone(), id.clone());
                self.by_distance
                    .remove(record.coord.distance_from_origin(), id.clone());
            }
            IndexMaintenance::Deferred => {
                self.by_name.mark_stale();
                self.by_distance.mark_stale();
            }
        }
        self.unbucket(id, record.coord);
        tracing::debug!(id = %id, "removed affiliation");
        Some(record)
    }

    /// Ids sorted by name, ties broken by id.
    pub fn alphabetical(&mut self) -> Vec<AffiliationId> {
        let records = &self.records;
        if self.by_name.refresh(|| {
            records
                .iter()
                .map(|(id, a)| (a.name.clone(), id.clone()))
                .collect::<Vec<_>>()
        }) {
            tracing::trace!(entries = records.len(), "rebuilt name index");
        }
        self.by_name.ids()
    }

    /// Ids sorted by squared distance from the origin, ties broken by id.
    pub fn by_distance_increasing(&mut self) -> Vec<AffiliationId> {
        let records = &self.records;
        if self.by_distance.refresh(|| {
            records
                .iter()
                .map(|(id, a)| (a.coord.distance_from_origin(), id.clone()))
                .collect::<Vec<_>>()
        }) {
            tracing::trace!(entries = records.len(), "rebuilt distance index");
        }
        self.by_distance.ids()
    }

    /// The first-inserted affiliation still located at `coord`.
    #[must_use]
    pub fn find_by_coord(&self, coord: Coord) -> Option<AffiliationId> {
        self.by_coord
            .get(&coord)
            .and_then(|ids| ids.first())
            .cloned()
    }

    /// The `count` affiliations nearest to `coord`, closest first.
    ///
    /// Ties on distance are broken by id. Returns fewer than `count` ids when
    /// the store holds fewer affiliations.
    #[must_use]
    pub fn closest_to(&self, coord: Coord, count: usize) -> Vec<AffiliationId> {
        let mut ranked: Vec<(Distance, &AffiliationId)> = self
            .records
            .iter()
            .map(|(id, a)| (squared_distance(a.coord, coord), id))
            .collect();
        ranked.sort_unstable();
        ranked
            .into_iter()
            .take(count)
            .map(|(_, id)| id.clone())
            .collect()
    }

    /// Removes every affiliation.
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_name.clear();
        self.by_distance.clear();
        self.by_coord.clear();
    }

    fn index_insert(&mut self, id: &AffiliationId, name: &Name, coord: Coord) {
        match self.maintenance {
            IndexMaintenance::Eager => {
                self.by_name.insert(name.clone(), id.clone());
                self.by_distance
                    .insert(coord.distance_from_origin(), id.clone());
            }
            IndexMaintenance::Deferred => {
                self.by_name.mark_stale();
                self.by_distance.mark_stale();
            }
        }
    }

    fn unbucket(&mut self, id: &AffiliationId, coord: Coord) {
        if let Some(ids) = self.by_coord.get_mut(&coord) {
            ids.retain(|other| other != id);
            if ids.is_empty() {
                self.by_coord.remove(&coord);
            }
        }
    }
}
