//! Affiliation index, publication graph, and cross-reference table for refgraph.
//!
//! This crate provides:
//! - [`AffiliationIndex`] - Affiliation records with name, distance, and coordinate indices
//! - [`PublicationGraph`] - Publication records with forward and reverse reference edges
//! - [`CitationTable`] - Affiliation -> publication cross-references
//! - [`Catalog`] - The facade that keeps all of the above consistent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod affiliation;
pub mod catalog;
pub mod citation;
pub mod config;
pub mod index;
pub mod publication;

pub use affiliation::{Affiliation, AffiliationIndex};
pub use catalog::Catalog;
pub use citation::CitationTable;
pub use config::{IndexMaintenance, StoreConfig};
pub use index::{Freshness, SortedIndex};
pub use publication::{Publication, PublicationGraph};
