use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Statistical model used to derive information content from a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IcModel {
    /// Intrinsic IC from descendant counts: `1 - ln(d + 1) / ln(N)`.
    Seco,
    /// Frequency IC: `-ln((subclasses + 1) / N)`.
    Resnik,
}

/// Formula turning an ancestor/descendant IC pair into a similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    Resnik,
    Lin,
    JiangConrath,
}

/// How ancestor-side and descendant-side scores are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Ancestors,
    Descendants,
    Minimum,
    Maximum,
    Average,
}

impl Strategy {
    pub fn uses_ancestors(self) -> bool {
        self != Strategy::Descendants
    }

    pub fn uses_descendants(self) -> bool {
        self != Strategy::Ancestors
    }
}

/// How a source-side and target-side similarity are merged under a prior weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    TConorm,
    Average,
}

/// How a neighborhood average is folded together with the prior similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalScore {
    TConorm,
    Average,
}

macro_rules! display_as_debug {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        })*
    };
}

display_as_debug!(IcModel, SimilarityMeasure, Strategy, Weighting, FinalScore);

/// Semantic matcher configuration. Immutable for the duration of a run and
/// shared read-only by every scoring worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    pub ic_model: IcModel,
    pub measure: SimilarityMeasure,
    pub strategy: Strategy,
    pub weighting: Weighting,
    pub final_score: FinalScore,
    /// Maximum number of subclass edges walked around a seed pair.
    pub radius: u32,
    /// Worker pool size. 0 selects the host's available parallelism.
    pub threads: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            ic_model: defaults::DEFAULT_IC_MODEL,
            measure: defaults::DEFAULT_MEASURE,
            strategy: defaults::DEFAULT_STRATEGY,
            weighting: defaults::DEFAULT_WEIGHTING,
            final_score: defaults::DEFAULT_FINAL_SCORE,
            radius: defaults::DEFAULT_RADIUS,
            threads: defaults::DEFAULT_THREADS,
        }
    }
}

impl SemanticConfig {
    pub fn with_ic_model(mut self, ic_model: IcModel) -> Self {
        self.ic_model = ic_model;
        self
    }

    pub fn with_measure(mut self, measure: SimilarityMeasure) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_final_score(mut self, final_score: FinalScore) -> Self {
        self.final_score = final_score;
        self
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}
