//! Identifiers, geometry, and error types for refgraph.
//!
//! This crate provides:
//! - [`AffiliationId`] and [`PublicationId`] - Record keys
//! - [`Coord`] - Integer coordinates with exact squared distances
//! - [`Year`], [`Name`], [`Distance`] - Attribute aliases
//! - [`Error`] - Faults that cross the engine boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use geometry::{Coord, squared_distance};
pub use id::{AffiliationId, PublicationId};
pub use types::{Distance, Name, Year};
