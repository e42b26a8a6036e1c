//! refgraph - In-memory affiliation index and publication reference graph
//!
//! This crate re-exports all layers of the refgraph system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: refgraph_engine     — Traversals, queries, typed call interface
//! Layer 1: refgraph_storage    — Affiliation index, publication graph, citations
//! Layer 0: refgraph_foundation — Core types (ids, Coord, Error)
//! ```

pub use refgraph_engine as engine;
pub use refgraph_foundation as foundation;
pub use refgraph_storage as storage;
