// Single source of truth for all default values.

use super::semantic_config::{FinalScore, IcModel, SimilarityMeasure, Strategy, Weighting};

// --- Semantic ---
pub const DEFAULT_IC_MODEL: IcModel = IcModel::Seco;
pub const DEFAULT_MEASURE: SimilarityMeasure = SimilarityMeasure::Resnik;
pub const DEFAULT_STRATEGY: Strategy = Strategy::Maximum;
pub const DEFAULT_WEIGHTING: Weighting = Weighting::TConorm;
pub const DEFAULT_FINAL_SCORE: FinalScore = FinalScore::Average;
pub const DEFAULT_RADIUS: u32 = 3;
pub const DEFAULT_THREADS: usize = 0; // 0 = available parallelism

// --- Extension ---
pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_LOWER_THRESHOLD: f64 = 0.4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
