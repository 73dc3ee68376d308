//! Structured log events for extension runs.
//!
//! Each function emits a `tracing` event with structured fields.

use ontalign_core::errors::MatcherError;
use ontalign_core::EntityType;

/// Log the start of an extension run.
pub fn extension_started(entity_type: EntityType, seed_mappings: usize, threshold: f64) {
    tracing::info!(
        event = "extension_started",
        entity_type = %entity_type,
        seed_mappings = seed_mappings,
        threshold = threshold,
        "extending alignment with semantic similarity matcher"
    );
}

/// Log candidate generation.
pub fn candidates_generated(candidates: usize, radius: u32) {
    tracing::debug!(
        event = "candidates_generated",
        candidates = candidates,
        radius = radius,
        "candidate pairs generated"
    );
}

/// Log the end of an extension run.
pub fn extension_completed(candidates: usize, kept: usize, failed: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "extension_completed",
        candidates = candidates,
        kept = kept,
        failed = failed,
        elapsed_ms = elapsed_ms,
        "extension finished"
    );
}

/// Log a scoring task that failed and was excluded.
pub fn task_failed(err: &MatcherError) {
    tracing::warn!(
        event = "scoring_task_failed",
        error = %err,
        "candidate excluded after scoring failure"
    );
}
