//! Tracing setup: structured logging for extension runs.
//!
//! Respects the `ONTALIGN_LOG` environment variable for filtering and falls
//! back to the configured log level.

use ontalign_core::config::ObservabilityConfig;
use ontalign_core::constants::LOG_ENV_VAR;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Build the filter: `ONTALIGN_LOG` wins over the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn try_init_tracing(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = env_filter(config);
    if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .finish()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_names(true)
            .finish()
            .try_init()
    }
}

/// Install the global subscriber, ignoring an already-installed one.
pub fn init_tracing(config: &ObservabilityConfig) {
    let _ = try_init_tracing(config);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .try_init();
}
