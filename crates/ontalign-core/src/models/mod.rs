//! Data model shared by every crate: identifiers, entity kinds, mappings, alignments.

mod alignment;
mod entity_type;
mod mapping;

pub use alignment::Alignment;
pub use entity_type::EntityType;
pub use mapping::Mapping;

/// Opaque per-ontology entity identifier. Source and target ids live in
/// independent namespaces.
pub type ClassId = u32;
