//! Cycle rejection before every subclass edge insertion.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Dfs;

use crate::graph::{HierarchyGraph, IndexedHierarchy};

/// Check whether adding `child → parent` would create a cycle.
///
/// Returns `true` if a cycle would be created (edge should be rejected).
pub fn would_create_cycle(hierarchy: &IndexedHierarchy, child: NodeIndex, parent: NodeIndex) -> bool {
    // Self-loops are always cycles.
    if child == parent {
        return true;
    }

    // If parent already reaches child along subclass edges, child is an
    // ancestor of parent.
    has_path(&hierarchy.graph, parent, child)
}

/// DFS-based reachability check: can we reach `to` from `from`?
fn has_path(graph: &HierarchyGraph, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}

/// Validate the entire graph is a DAG.
pub fn is_acyclic(hierarchy: &IndexedHierarchy) -> bool {
    !petgraph::algo::is_cyclic_directed(&hierarchy.graph)
}
