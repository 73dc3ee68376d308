//! Breadth-first layering over the subclass DAG.
//!
//! `Direction::Outgoing` walks towards superclasses, `Direction::Incoming`
//! towards subclasses.

use std::collections::{HashSet, VecDeque};

use ontalign_core::ClassId;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use crate::graph::HierarchyGraph;

/// Classes whose shortest distance from `start` is exactly `distance`.
/// Distance 0 yields the empty set.
pub fn layer_at(
    graph: &HierarchyGraph,
    start: NodeIndex,
    distance: u32,
    direction: Direction,
) -> HashSet<ClassId> {
    if distance == 0 {
        return HashSet::new();
    }

    let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
    let mut frontier = vec![start];
    for _ in 0..distance {
        let mut next = Vec::new();
        for &node in &frontier {
            for neighbor in graph.neighbors_directed(node, direction) {
                if visited.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }
        if next.is_empty() {
            return HashSet::new();
        }
        frontier = next;
    }

    frontier
        .into_iter()
        .filter_map(|idx| graph.node_weight(idx).map(|n| n.id))
        .collect()
}

/// Every class reachable from `start` in `direction`, excluding `start`.
pub fn reachable(graph: &HierarchyGraph, start: NodeIndex, direction: Direction) -> HashSet<ClassId> {
    let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut result = HashSet::new();

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors_directed(node, direction) {
            if visited.insert(neighbor) {
                if let Some(weight) = graph.node_weight(neighbor) {
                    result.insert(weight.id);
                }
                queue.push_back(neighbor);
            }
        }
    }

    result
}
