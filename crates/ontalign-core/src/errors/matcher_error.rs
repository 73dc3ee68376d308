use crate::models::{ClassId, EntityType};

/// Semantic matcher errors.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("unsupported entity type: {entity_type}")]
    UnsupportedEntityType { entity_type: EntityType },

    #[error("scoring ({source_id}, {target_id}) failed: {reason}")]
    TaskFailed {
        source_id: ClassId,
        target_id: ClassId,
        reason: String,
    },

    #[error("worker pool could not be built: {reason}")]
    ThreadPool { reason: String },
}
