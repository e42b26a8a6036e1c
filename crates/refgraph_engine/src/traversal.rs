//! Depth-first traversal over publication edges.
//!
//! Both reference closures share one shape: an explicit stack of edge
//! iterators walks the graph in the same pre-order a recursive search would,
//! and a visited set ensures every publication is emitted at most once even
//! when the edges contain a cycle.

use std::collections::HashSet;

use refgraph_foundation::PublicationId;

/// Collects every publication reachable from `start` through `edges`.
///
/// Output is in discovery order. `start` is not pre-marked as visited, so it
/// only appears in the output if some path leads back to it.
pub fn depth_first<'g, F>(start: PublicationId, mut edges: F) -> Vec<PublicationId>
where
    F: FnMut(PublicationId) -> &'g [PublicationId],
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![edges(start).iter()];

    while let Some(pending) = stack.last_mut() {
        let Some(&next) = pending.next() else {
            stack.pop();
            continue;
        };
        if visited.insert(next) {
            order.push(next);
            stack.push(edges(next).iter());
        }
    }

    order
}

/// Walks single-parent links upward from `start`, inclusive.
///
/// Stops at the first publication without a parent, or at the first repeat
/// if the parent links loop.
pub fn parent_chain<F>(start: PublicationId, mut parent: F) -> Vec<PublicationId>
where
    F: FnMut(PublicationId) -> Option<PublicationId>,
{
    let mut seen = HashSet::new();
    let mut chain = Vec::new();
    let mut current = Some(start);

    while let Some(id) = current {
        if !seen.insert(id) {
            break;
        }
        chain.push(id);
        current = parent(id);
    }

    chain
}
