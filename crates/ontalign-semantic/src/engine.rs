//! SemanticEqMatcher: implements ISecondaryMatcher on top of candidate
//! generation, neighborhood aggregation and the parallel scorer.

use std::time::{Duration, Instant};

use ontalign_core::config::defaults::DEFAULT_THRESHOLD;
use ontalign_core::config::{OntAlignConfig, SemanticConfig};
use ontalign_core::errors::{MatcherError, OntAlignResult};
use ontalign_core::traits::{IAlignmentStore, IClassHierarchy, ISecondaryMatcher};
use ontalign_core::{Alignment, ClassId, EntityType};

use crate::aggregator::NeighborhoodAggregator;
use crate::information_content::InformationContent;
use crate::scorer::ParallelScorer;
use crate::{candidates, events};

const NAME: &str = "Semantic Similarity Matcher";

/// Entity kinds the matcher accepts. Neighborhoods are walked over the
/// subclass hierarchy, so only classes are supported.
pub const SUPPORTED_ENTITY_TYPES: [EntityType; 1] = [EntityType::Class];

/// Counters describing one extension run.
#[derive(Debug, Clone, Default)]
pub struct ExtensionReport {
    pub candidates: usize,
    pub scored: usize,
    pub failed: usize,
    pub kept: usize,
    pub elapsed: Duration,
}

/// Extends an alignment through the neighborhoods of its mappings.
///
/// Borrows both hierarchies and the secondary (lower-threshold) alignment
/// read-only for its whole lifetime; the configuration and the default
/// threshold are fixed at construction.
pub struct SemanticEqMatcher<'a> {
    source: &'a dyn IClassHierarchy,
    target: &'a dyn IClassHierarchy,
    secondary: &'a dyn IAlignmentStore,
    config: SemanticConfig,
    threshold: f64,
}

impl<'a> SemanticEqMatcher<'a> {
    pub fn new(
        source: &'a dyn IClassHierarchy,
        target: &'a dyn IClassHierarchy,
        secondary: &'a dyn IAlignmentStore,
        config: SemanticConfig,
    ) -> Self {
        Self {
            source,
            target,
            secondary,
            config,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Build from a loaded configuration: `[semantic]` drives scoring and
    /// `[extension].threshold` becomes the default threshold.
    pub fn from_config(
        source: &'a dyn IClassHierarchy,
        target: &'a dyn IClassHierarchy,
        secondary: &'a dyn IAlignmentStore,
        config: &OntAlignConfig,
    ) -> Self {
        Self {
            threshold: config.extension.threshold,
            ..Self::new(source, target, secondary, config.semantic.clone())
        }
    }

    pub fn config(&self) -> &SemanticConfig {
        &self.config
    }

    /// Threshold used by [`extend_default`](Self::extend_default).
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// [`extend`](Self::extend) at the configured threshold.
    pub fn extend_default(
        &self,
        seed: &Alignment,
        entity_type: EntityType,
    ) -> OntAlignResult<Alignment> {
        self.extend(seed, entity_type, self.threshold)
    }

    /// Propose new mappings around `seed`, keeping those scoring `>= threshold`.
    pub fn extend(
        &self,
        seed: &Alignment,
        entity_type: EntityType,
        threshold: f64,
    ) -> OntAlignResult<Alignment> {
        self.extend_with_report(seed, entity_type, threshold)
            .map(|(alignment, _)| alignment)
    }

    /// Same as [`extend`](Self::extend), also returning run counters.
    pub fn extend_with_report(
        &self,
        seed: &Alignment,
        entity_type: EntityType,
        threshold: f64,
    ) -> OntAlignResult<(Alignment, ExtensionReport)> {
        check_entity_type(entity_type)?;
        let start = Instant::now();
        events::extension_started(entity_type, seed.len(), threshold);

        let candidates: Vec<(ClassId, ClassId)> =
            candidates::generate(seed, self.source, self.target, self.config.radius)
                .into_iter()
                .collect();
        events::candidates_generated(candidates.len(), self.config.radius);

        let aggregator = self.aggregator(entity_type);
        let outcome = ParallelScorer::new(self.config.threads).score_all(
            &candidates,
            threshold,
            |s, t| aggregator.score_pair(s, t),
        )?;

        let report = ExtensionReport {
            candidates: candidates.len(),
            scored: outcome.scored,
            failed: outcome.failed,
            kept: outcome.alignment.len(),
            elapsed: start.elapsed(),
        };
        events::extension_completed(
            report.candidates,
            report.kept,
            report.failed,
            report.elapsed.as_millis() as u64,
        );
        Ok((outcome.alignment, report))
    }

    /// Score a single pair with fresh IC caches. Corpus sizes are taken for
    /// `entity_type` on each side.
    pub fn score_pair(
        &self,
        source_id: ClassId,
        target_id: ClassId,
        entity_type: EntityType,
    ) -> OntAlignResult<f64> {
        Ok(self.aggregator(entity_type).score_pair(source_id, target_id)?)
    }

    fn aggregator(&self, entity_type: EntityType) -> NeighborhoodAggregator<'_> {
        let source_ic = InformationContent::new(
            self.source,
            self.source.entity_count(entity_type),
            self.config.ic_model,
        );
        let target_ic = InformationContent::new(
            self.target,
            self.target.entity_count(entity_type),
            self.config.ic_model,
        );
        NeighborhoodAggregator::new(&self.config, source_ic, target_ic, self.secondary)
    }
}

/// Restrict a primary matcher's output to the mappings usable as priors,
/// those at or above `[extension].lower_threshold`.
pub fn secondary_alignment(all: &Alignment, config: &OntAlignConfig) -> Alignment {
    all.at_least(config.extension.lower_threshold)
}

fn check_entity_type(entity_type: EntityType) -> Result<(), MatcherError> {
    if SUPPORTED_ENTITY_TYPES.contains(&entity_type) {
        Ok(())
    } else {
        Err(MatcherError::UnsupportedEntityType { entity_type })
    }
}

impl ISecondaryMatcher for SemanticEqMatcher<'_> {
    fn extend_alignment(
        &self,
        alignment: &Alignment,
        entity_type: EntityType,
        threshold: f64,
    ) -> OntAlignResult<Alignment> {
        self.extend(alignment, entity_type, threshold)
    }

    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> String {
        format!(
            "Matches entities by computing the semantic similarity of their neighborhoods, \
             using {} IC and the {} measure, with {} strategy, {} weighting, {} final score \
             and radius {}",
            self.config.ic_model,
            self.config.measure,
            self.config.strategy,
            self.config.weighting,
            self.config.final_score,
            self.config.radius
        )
    }

    fn supported_entity_types(&self) -> &[EntityType] {
        &SUPPORTED_ENTITY_TYPES
    }
}
