//! Neighborhood aggregation: the score of one candidate pair.

use ontalign_core::config::{SemanticConfig, SimilarityMeasure, Strategy};
use ontalign_core::errors::MatcherError;
use ontalign_core::traits::IAlignmentStore;
use ontalign_core::ClassId;

use crate::information_content::InformationContent;
use crate::measures;
use crate::neighborhood::{Neighborhood, Side};

/// Scores candidate pairs from the information content of their neighbors.
///
/// Holds only shared references and an immutable config, so one instance is
/// read concurrently by every scoring worker.
pub struct NeighborhoodAggregator<'a> {
    config: &'a SemanticConfig,
    source: InformationContent<'a>,
    target: InformationContent<'a>,
    secondary: &'a dyn IAlignmentStore,
}

impl<'a> NeighborhoodAggregator<'a> {
    pub fn new(
        config: &'a SemanticConfig,
        source: InformationContent<'a>,
        target: InformationContent<'a>,
        secondary: &'a dyn IAlignmentStore,
    ) -> Self {
        Self {
            config,
            source,
            target,
            secondary,
        }
    }

    pub fn config(&self) -> &SemanticConfig {
        self.config
    }

    /// Score `(source_id, target_id)`.
    ///
    /// A pair without a positive prior in the secondary alignment scores 0.
    pub fn score_pair(&self, source_id: ClassId, target_id: ClassId) -> Result<f64, MatcherError> {
        let prior = self.secondary.prior_similarity(source_id, target_id);
        if prior <= 0.0 || prior.is_nan() {
            return Ok(0.0);
        }

        let nb = Neighborhood::collect(
            self.source.hierarchy(),
            self.target.hierarchy(),
            source_id,
            target_id,
            self.config.radius,
        );

        let strategy = self.config.strategy;
        let ancestors = if strategy.uses_ancestors() {
            self.side_score(prior, source_id, target_id, &nb, Side::Ancestors)
        } else {
            0.0
        };
        let descendants = if strategy.uses_descendants() {
            self.side_score(prior, source_id, target_id, &nb, Side::Descendants)
        } else {
            0.0
        };

        let score = match strategy {
            Strategy::Ancestors => ancestors,
            Strategy::Descendants => descendants,
            Strategy::Minimum => ancestors.min(descendants),
            Strategy::Maximum => ancestors.max(descendants),
            Strategy::Average => (ancestors + descendants) * 0.5,
        };

        if score.is_finite() {
            Ok(score)
        } else {
            Err(MatcherError::TaskFailed {
                source_id,
                target_id,
                reason: format!("non-finite score {score}"),
            })
        }
    }

    /// Average of the positive weighted neighbor similarities, folded with
    /// the prior. Falls back to the prior when no neighbor pair contributes.
    fn side_score(
        &self,
        prior: f64,
        source_id: ClassId,
        target_id: ClassId,
        nb: &Neighborhood,
        side: Side,
    ) -> f64 {
        let (sources, targets) = nb.side(side);
        let min_len = sources.len().min(targets.len());
        if min_len == 0 {
            return prior;
        }
        let norm = min_len as f64;

        let mut sum = 0.0;
        let mut contributing = 0usize;
        for &s in sources {
            let sim_source = self.pair_similarity(&self.source, side, source_id, s);
            for &t in targets {
                let sim_target = self.pair_similarity(&self.target, side, target_id, t);
                // Ancestor evidence is normalized by the candidate's own prior,
                // descendant evidence by the neighbor pair's prior.
                let weight = match side {
                    Side::Ancestors => prior / norm,
                    Side::Descendants => self.secondary.prior_similarity(s, t) / norm,
                };
                let value = measures::weight(self.config.weighting, weight, sim_source, sim_target);
                if value > 0.0 {
                    sum += value;
                    contributing += 1;
                }
            }
        }

        if contributing == 0 {
            return prior;
        }
        measures::finalize(self.config.final_score, sum / contributing as f64, prior)
    }

    /// Similarity between a candidate class and one of its neighbors. The
    /// ancestor role goes to whichever of the two is higher in the hierarchy.
    fn pair_similarity(
        &self,
        ic: &InformationContent<'_>,
        side: Side,
        candidate: ClassId,
        neighbor: ClassId,
    ) -> f64 {
        let (ancestor, descendant) = match side {
            Side::Ancestors => (neighbor, candidate),
            Side::Descendants => (candidate, neighbor),
        };
        let ic_ancestor = ic.of(ancestor);
        // Resnik only looks at the ancestor.
        let ic_descendant = match self.config.measure {
            SimilarityMeasure::Resnik => 0.0,
            _ => ic.of(descendant),
        };
        measures::similarity(self.config.measure, ic_ancestor, ic_descendant)
    }
}
