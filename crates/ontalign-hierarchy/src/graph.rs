//! petgraph::StableGraph wrapper with ClassNode weights and subclass-of edges.

use std::collections::{HashMap, HashSet};

use ontalign_core::errors::{HierarchyError, OntAlignResult};
use ontalign_core::traits::IClassHierarchy;
use ontalign_core::{ClassId, EntityType};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::{dag_enforcement, traversal};

/// A node in the hierarchy, representing one ontology entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassNode {
    pub id: ClassId,
    pub entity_type: EntityType,
}

/// The underlying directed graph type. Edge direction is child → parent.
pub type HierarchyGraph = StableGraph<ClassNode, (), Directed>;

/// Wrapper providing indexed access to the hierarchy graph.
pub struct IndexedHierarchy {
    /// The petgraph stable graph.
    pub graph: HierarchyGraph,
    /// Map from entity id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<ClassId, NodeIndex>,
    /// Entity count per kind.
    counts: HashMap<EntityType, usize>,
}

impl IndexedHierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            counts: HashMap::new(),
        }
    }

    /// Register a new entity. Fails if the id is already taken.
    pub fn add_entity(
        &mut self,
        id: ClassId,
        entity_type: EntityType,
    ) -> Result<NodeIndex, HierarchyError> {
        if self.node_index.contains_key(&id) {
            return Err(HierarchyError::DuplicateClass { id });
        }
        let idx = self.graph.add_node(ClassNode { id, entity_type });
        self.node_index.insert(id, idx);
        *self.counts.entry(entity_type).or_insert(0) += 1;
        Ok(idx)
    }

    /// Get or create a class node.
    pub fn ensure_class(&mut self, id: ClassId) -> NodeIndex {
        match self.node_index.get(&id) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_node(ClassNode {
                    id,
                    entity_type: EntityType::Class,
                });
                self.node_index.insert(id, idx);
                *self.counts.entry(EntityType::Class).or_insert(0) += 1;
                idx
            }
        }
    }

    /// Record that `child` is a direct subclass of `parent`, creating either
    /// class if needed. Rejects edges that would close a cycle.
    pub fn add_subclass(&mut self, child: ClassId, parent: ClassId) -> OntAlignResult<()> {
        let child_idx = self.ensure_class(child);
        let parent_idx = self.ensure_class(parent);
        if self.graph.find_edge(child_idx, parent_idx).is_some() {
            return Ok(());
        }
        if dag_enforcement::would_create_cycle(self, child_idx, parent_idx) {
            return Err(HierarchyError::CycleDetected { child, parent }.into());
        }
        self.graph.add_edge(child_idx, parent_idx, ());
        Ok(())
    }

    /// Look up a node index by entity id.
    pub fn get_node(&self, id: ClassId) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    pub fn contains(&self, id: ClassId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Direct superclasses of `id`.
    pub fn parents(&self, id: ClassId) -> OntAlignResult<Vec<ClassId>> {
        self.direct(id, Direction::Outgoing)
    }

    /// Direct subclasses of `id`.
    pub fn children(&self, id: ClassId) -> OntAlignResult<Vec<ClassId>> {
        self.direct(id, Direction::Incoming)
    }

    fn direct(&self, id: ClassId, direction: Direction) -> OntAlignResult<Vec<ClassId>> {
        let idx = self
            .get_node(id)
            .ok_or(HierarchyError::UnknownClass { id })?;
        Ok(self
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.id))
            .collect())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of subclass edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn layer(&self, id: ClassId, distance: u32, direction: Direction) -> HashSet<ClassId> {
        match self.get_node(id) {
            Some(idx) => traversal::layer_at(&self.graph, idx, distance, direction),
            None => HashSet::new(),
        }
    }
}

impl Default for IndexedHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl IClassHierarchy for IndexedHierarchy {
    fn ancestors_at_distance(&self, class_id: ClassId, distance: u32) -> HashSet<ClassId> {
        self.layer(class_id, distance, Direction::Outgoing)
    }

    fn descendants_at_distance(&self, class_id: ClassId, distance: u32) -> HashSet<ClassId> {
        self.layer(class_id, distance, Direction::Incoming)
    }

    fn all_descendants(&self, class_id: ClassId) -> HashSet<ClassId> {
        match self.get_node(class_id) {
            Some(idx) => traversal::reachable(&self.graph, idx, Direction::Incoming),
            None => HashSet::new(),
        }
    }

    fn entity_count(&self, entity_type: EntityType) -> usize {
        self.counts.get(&entity_type).copied().unwrap_or(0)
    }

    fn is_class(&self, id: ClassId) -> bool {
        self.get_node(id)
            .and_then(|idx| self.graph.node_weight(idx))
            .is_some_and(|node| node.entity_type == EntityType::Class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_entity_rejected() {
        let mut h = IndexedHierarchy::new();
        h.add_entity(1, EntityType::Class).unwrap();
        assert!(matches!(
            h.add_entity(1, EntityType::Individual),
            Err(HierarchyError::DuplicateClass { id: 1 })
        ));
    }

    #[test]
    fn repeated_edge_is_idempotent() {
        let mut h = IndexedHierarchy::new();
        h.add_subclass(2, 1).unwrap();
        h.add_subclass(2, 1).unwrap();
        assert_eq!(h.edge_count(), 1);
    }

    #[test]
    fn parents_and_children() {
        let mut h = IndexedHierarchy::new();
        h.add_subclass(2, 1).unwrap();
        h.add_subclass(3, 1).unwrap();
        assert_eq!(h.parents(2).unwrap(), vec![1]);
        let mut kids = h.children(1).unwrap();
        kids.sort_unstable();
        assert_eq!(kids, vec![2, 3]);
        assert!(h.parents(99).is_err());
    }

    #[test]
    fn counts_by_entity_type() {
        let mut h = IndexedHierarchy::new();
        h.add_subclass(2, 1).unwrap();
        h.add_entity(50, EntityType::ObjectProperty).unwrap();
        assert_eq!(h.entity_count(EntityType::Class), 2);
        assert_eq!(h.entity_count(EntityType::ObjectProperty), 1);
        assert_eq!(h.entity_count(EntityType::Individual), 0);
        assert!(h.is_class(1));
        assert!(!h.is_class(50));
        assert!(!h.is_class(99));
    }

    #[test]
    fn unknown_class_has_empty_neighborhood() {
        let h = IndexedHierarchy::new();
        assert!(h.ancestors_at_distance(7, 1).is_empty());
        assert!(h.all_descendants(7).is_empty());
    }
}
