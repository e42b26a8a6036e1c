//! Attribute aliases shared by every layer.

/// Display name of an affiliation or publication.
pub type Name = String;

/// Publication year.
pub type Year = u16;

/// Squared Euclidean distance between two coordinates.
///
/// An `i32` difference spans up to `2^32 - 1`, so one squared axis fits in
/// 64 bits but the sum of two does not.
pub type Distance = u128;
