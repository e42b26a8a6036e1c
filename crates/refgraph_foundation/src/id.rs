//! Record identifiers.
//!
//! Affiliations are keyed by caller-chosen strings, publications by
//! caller-chosen integers. Neither is allocated by the store.

use std::borrow::Borrow;
use std::fmt;

/// Key of an affiliation record.
///
/// Ordering is lexicographic on the underlying string, which is the
/// tie-break used by every ordered affiliation listing.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AffiliationId(String);

impl AffiliationId {
    /// Creates an affiliation id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AffiliationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AffiliationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for AffiliationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AffiliationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AffiliationId({:?})", self.0)
    }
}

impl fmt::Display for AffiliationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of a publication record.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicationId(pub u64);

impl PublicationId {
    /// Creates a publication id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer key.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PublicationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicationId({})", self.0)
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
