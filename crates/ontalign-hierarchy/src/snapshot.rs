//! Serializable description of a hierarchy, used to load fixtures and to
//! hand a hierarchy across process boundaries.

use ontalign_core::errors::OntAlignResult;
use ontalign_core::{ClassId, EntityType};
use serde::{Deserialize, Serialize};

use crate::graph::IndexedHierarchy;

/// A non-class entity declared in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDecl {
    pub id: ClassId,
    pub entity_type: EntityType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchySnapshot {
    /// Classes with no subclass edges still count towards the corpus size.
    pub classes: Vec<ClassId>,
    /// `(child, parent)` direct-subclass edges.
    pub subclass_of: Vec<(ClassId, ClassId)>,
    /// Individuals and properties.
    pub entities: Vec<EntityDecl>,
}

impl HierarchySnapshot {
    /// Build the indexed hierarchy, rejecting cycles and id clashes.
    pub fn build(&self) -> OntAlignResult<IndexedHierarchy> {
        let mut hierarchy = IndexedHierarchy::new();
        for entity in &self.entities {
            hierarchy.add_entity(entity.id, entity.entity_type)?;
        }
        for &id in &self.classes {
            hierarchy.ensure_class(id);
        }
        for &(child, parent) in &self.subclass_of {
            hierarchy.add_subclass(child, parent)?;
        }
        Ok(hierarchy)
    }
}
