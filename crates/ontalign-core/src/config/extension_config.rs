use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds used around an extension run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Minimum similarity for a proposed mapping to be kept.
    pub threshold: f64,
    /// Threshold the secondary (prior) alignment was produced with.
    pub lower_threshold: f64,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_THRESHOLD,
            lower_threshold: defaults::DEFAULT_LOWER_THRESHOLD,
        }
    }
}
