//! Error types. One enum per subsystem, aggregated into [`OntAlignError`].

mod config_error;
mod hierarchy_error;
mod matcher_error;

pub use config_error::ConfigError;
pub use hierarchy_error::HierarchyError;
pub use matcher_error::MatcherError;

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum OntAlignError {
    #[error("matcher error: {0}")]
    MatcherError(#[from] MatcherError),

    #[error("hierarchy error: {0}")]
    HierarchyError(#[from] HierarchyError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type OntAlignResult<T> = Result<T, OntAlignError>;
