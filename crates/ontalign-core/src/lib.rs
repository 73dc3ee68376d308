//! # ontalign-core
//!
//! Foundation crate for ontology alignment extension.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OntAlignConfig;
pub use errors::{OntAlignError, OntAlignResult};
pub use models::{Alignment, ClassId, EntityType, Mapping};
