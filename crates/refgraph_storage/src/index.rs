//! Ordered secondary index with lazy rebuild.
//!
//! A `SortedIndex` is derived state: everything in it can be recomputed from
//! the primary affiliation map. It carries its own [`Freshness`] tag; while
//! the tag is `Stale` the entries are not trusted and must be rebuilt before
//! they are read.

use im::OrdSet;
use refgraph_foundation::AffiliationId;

/// Whether a derived index agrees with the primary data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Freshness {
    /// Entries match the primary map.
    #[default]
    Fresh,
    /// Entries may be missing or outdated; rebuild before reading.
    Stale,
}

/// Set of `(key, id)` pairs kept in ascending order.
///
/// Ties on `key` are broken by the id, so iteration order is total.
#[derive(Clone, Debug)]
pub struct SortedIndex<K>
where
    K: Ord + Clone,
{
    entries: OrdSet<(K, AffiliationId)>,
    freshness: Freshness,
}

impl<K: Ord + Clone> Default for SortedIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> SortedIndex<K> {
    /// Creates an empty, fresh index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: OrdSet::new(),
            freshness: Freshness::Fresh,
        }
    }

    /// Returns the freshness tag.
    #[must_use]
    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    /// Returns true if the entries can be read without a rebuild.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.freshness == Freshness::Fresh
    }

    /// Marks the index as out of date.
    pub fn mark_stale(&mut self) {
        self.freshness = Freshness::Stale;
    }

    /// Inserts an entry.
    ///
    /// Ignored while stale: the next rebuild derives every entry anyway.
    pub fn insert(&mut self, key: K, id: AffiliationId) {
        if self.is_fresh() {
            self.entries.insert((key, id));
        }
    }

    /// Removes an entry. Ignored while stale.
    pub fn remove(&mut self, key: K, id: AffiliationId) {
        if self.is_fresh() {
            self.entries.remove(&(key, id));
        }
    }

    /// Rebuilds from `source` if stale, then marks the index fresh.
    ///
    /// `source` is only called when a rebuild is needed. Returns true if a
    /// rebuild happened.
    pub fn refresh<F, I>(&mut self, source: F) -> bool
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = (K, AffiliationId)>,
    {
        if self.is_fresh() {
            return false;
        }
        self.entries = source().into_iter().collect();
        self.freshness = Freshness::Fresh;
        true
    }

    /// Returns the ids in index order.
    ///
    /// Callers must [`refresh`](Self::refresh) first; a stale index would
    /// expose entries for removed or moved records.
    #[must_use]
    pub fn ids(&self) -> Vec<AffiliationId> {
        debug_assert!(self.is_fresh(), "read from a stale index");
        self.entries.iter().map(|(_, id)| id.clone()).collect()
    }

    /// Number of entries currently held (meaningful only when fresh).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and marks the index fresh.
    pub fn clear(&mut self) {
        self.entries = OrdSet::new();
        self.freshness = Freshness::Fresh;
    }
}
