//! Graph traversals, queries, and the call interface for refgraph.
//!
//! This crate provides:
//! - [`Query`] - Ancestor chains, lowest common ancestor, reference closures,
//!   nearest-affiliation search
//! - [`Engine`] - Executes typed [`Request`]s against an owned catalog
//! - [`traversal`] - Iterative depth-first search shared by the closures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod query;
pub mod traversal;

pub use dispatch::{Engine, Operation, Request, Response};
pub use query::Query;
