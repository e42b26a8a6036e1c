//! Configuration for the catalog.

/// How the ordered affiliation indices follow mutations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IndexMaintenance {
    /// Every add, coordinate change, and removal updates the ordered
    /// indices in place (O(log n) per write).
    #[default]
    Eager,
    /// Mutations only mark the ordered indices stale; the next ordered read
    /// pays one O(n log n) rebuild for the whole batch of writes.
    Deferred,
}

/// Configuration for a [`Catalog`](crate::Catalog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of affiliations returned by a nearest-neighbour query when the
    /// caller does not ask for a specific count.
    pub nearest_count: usize,

    /// Maintenance policy for the name and distance indices.
    pub maintenance: IndexMaintenance,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            nearest_count: 3,
            maintenance: IndexMaintenance::Eager,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration for write-heavy workloads that read ordered
    /// listings rarely.
    #[must_use]
    pub fn deferred() -> Self {
        Self {
            maintenance: IndexMaintenance::Deferred,
            ..Self::default()
        }
    }

    /// Builder method to set the default nearest-neighbour count.
    #[must_use]
    pub fn with_nearest_count(mut self, count: usize) -> Self {
        self.nearest_count = count;
        self
    }

    /// Builder method to set the index maintenance policy.
    #[must_use]
    pub fn with_maintenance(mut self, maintenance: IndexMaintenance) -> Self {
        self.maintenance = maintenance;
        self
    }
}
