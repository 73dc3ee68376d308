//! Similarity, weighting and final-aggregation formulas.
//!
//! All functions are pure. Degenerate denominators yield 0 instead of a
//! non-finite value.

use ontalign_core::config::{FinalScore, SimilarityMeasure, Weighting};

/// Probabilistic OR: `x + y - x·y`.
pub fn tconorm(x: f64, y: f64) -> f64 {
    x + y - x * y
}

/// Similarity of a class pair given the IC of the common ancestor (`ic_ancestor`)
/// and of the more specific class (`ic_descendant`).
pub fn similarity(measure: SimilarityMeasure, ic_ancestor: f64, ic_descendant: f64) -> f64 {
    match measure {
        SimilarityMeasure::Resnik => ic_ancestor,
        SimilarityMeasure::Lin => {
            let denom = ic_ancestor + ic_descendant;
            if denom == 0.0 {
                0.0
            } else {
                2.0 * ic_ancestor / denom
            }
        }
        SimilarityMeasure::JiangConrath => {
            let distance = ic_descendant - ic_ancestor;
            let denom = distance + 1.0;
            if denom == 0.0 {
                0.0
            } else {
                1.0 / denom
            }
        }
    }
}

/// Merge a source-side and target-side similarity under the normalized prior `weight`.
pub fn weight(weighting: Weighting, weight: f64, sim_source: f64, sim_target: f64) -> f64 {
    match weighting {
        Weighting::Average => (weight / 2.0) * sim_source + (weight / 2.0) * sim_target,
        Weighting::TConorm => tconorm(sim_source, sim_target) * weight,
    }
}

/// Fold a neighborhood average with the prior similarity.
pub fn finalize(final_score: FinalScore, neighborhood: f64, prior: f64) -> f64 {
    match final_score {
        FinalScore::Average => (neighborhood + prior) / 2.0,
        FinalScore::TConorm => tconorm(neighborhood, prior),
    }
}
