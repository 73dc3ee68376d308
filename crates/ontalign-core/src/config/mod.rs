//! Layered configuration loaded from TOML. Every section defaults, so an
//! empty document is a valid configuration.

pub mod defaults;
mod extension_config;
mod observability_config;
mod semantic_config;

use serde::{Deserialize, Serialize};

pub use extension_config::ExtensionConfig;
pub use observability_config::ObservabilityConfig;
pub use semantic_config::{
    FinalScore, IcModel, SemanticConfig, SimilarityMeasure, Strategy, Weighting,
};

use crate::constants::MAX_RADIUS;
use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OntAlignConfig {
    pub semantic: SemanticConfig,
    pub extension: ExtensionConfig,
    pub observability: ObservabilityConfig,
}

impl OntAlignConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: OntAlignConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("extension.threshold", self.extension.threshold)?;
        check_unit_interval("extension.lower_threshold", self.extension.lower_threshold)?;
        if self.semantic.radius > MAX_RADIUS {
            return Err(ConfigError::InvalidValue {
                field: "semantic.radius".to_string(),
                reason: format!("{} exceeds maximum of {MAX_RADIUS}", self.semantic.radius),
            });
        }
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{value} is outside [0, 1]"),
        })
    }
}
