use crate::models::{ClassId, Mapping};

/// Read/insert access to a set of scored correspondences.
pub trait IAlignmentStore: Send + Sync {
    /// Similarity recorded for the pair, or `0.0` when absent.
    fn prior_similarity(&self, source_id: ClassId, target_id: ClassId) -> f64;

    /// Whether any mapping uses `source_id` on the source side.
    fn contains_source(&self, source_id: ClassId) -> bool;

    /// Whether any mapping uses `target_id` on the target side.
    fn contains_target(&self, target_id: ClassId) -> bool;

    /// Insert a mapping, unioning with an existing one for the same pair.
    fn add(&mut self, mapping: Mapping) -> bool;
}
