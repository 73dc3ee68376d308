use std::collections::HashSet;

use crate::models::{ClassId, EntityType};

/// Subclass hierarchy of a single ontology.
///
/// Distances are counted in direct-subclass edges. `*_at_distance` returns
/// the classes whose shortest distance is exactly `distance`; callers
/// accumulate over a radius themselves.
pub trait IClassHierarchy: Send + Sync {
    fn ancestors_at_distance(&self, class_id: ClassId, distance: u32) -> HashSet<ClassId>;

    fn descendants_at_distance(&self, class_id: ClassId, distance: u32) -> HashSet<ClassId>;

    /// Every class reachable downward from `class_id`, excluding itself.
    fn all_descendants(&self, class_id: ClassId) -> HashSet<ClassId>;

    /// Number of transitive subclasses of `class_id`, excluding itself.
    fn transitive_subclass_count(&self, class_id: ClassId) -> usize {
        self.all_descendants(class_id).len()
    }

    /// Total number of entities of the given kind in this ontology.
    fn entity_count(&self, entity_type: EntityType) -> usize;

    /// Whether `id` denotes a class (as opposed to a property or individual).
    fn is_class(&self, id: ClassId) -> bool;
}
