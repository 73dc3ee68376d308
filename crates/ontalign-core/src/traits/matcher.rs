use crate::errors::OntAlignResult;
use crate::models::{Alignment, EntityType};

/// A matcher that proposes new mappings around an existing alignment.
pub trait ISecondaryMatcher: Send + Sync {
    /// Propose mappings not overlapping `alignment`, keeping those at or
    /// above `threshold`.
    fn extend_alignment(
        &self,
        alignment: &Alignment,
        entity_type: EntityType,
        threshold: f64,
    ) -> OntAlignResult<Alignment>;

    fn name(&self) -> &str;

    fn description(&self) -> String;

    fn supported_entity_types(&self) -> &[EntityType];
}
