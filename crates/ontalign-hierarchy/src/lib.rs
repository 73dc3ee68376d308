//! # ontalign-hierarchy
//!
//! Subclass DAG for one ontology, backed by `petgraph::StableGraph`.
//! Edges point from a class to its direct superclass; cycles are rejected
//! on insertion. Implements [`ontalign_core::traits::IClassHierarchy`].

pub mod dag_enforcement;
pub mod graph;
pub mod snapshot;
pub mod traversal;

pub use graph::{ClassNode, IndexedHierarchy};
pub use snapshot::HierarchySnapshot;
