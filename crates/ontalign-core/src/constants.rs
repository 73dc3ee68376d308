/// Upper bound for a hop radius accepted from configuration.
pub const MAX_RADIUS: u32 = 32;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "ONTALIGN_LOG";
