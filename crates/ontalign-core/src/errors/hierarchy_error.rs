use crate::models::ClassId;

/// Class hierarchy errors.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("unknown class: {id}")]
    UnknownClass { id: ClassId },

    #[error("class already registered: {id}")]
    DuplicateClass { id: ClassId },

    #[error("subclass edge {child} -> {parent} would create a cycle")]
    CycleDetected { child: ClassId, parent: ClassId },
}
