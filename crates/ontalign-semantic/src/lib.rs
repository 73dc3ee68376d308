//! # ontalign-semantic
//!
//! Extends an alignment through the structural neighborhood of its mappings:
//! candidate generation → parallel scoring → threshold filtering.
//! Each candidate is scored from the information content of the ancestors and
//! descendants around it, weighted by prior similarities from a secondary,
//! lower-threshold alignment.

pub mod aggregator;
pub mod candidates;
pub mod engine;
pub mod events;
pub mod information_content;
pub mod measures;
pub mod neighborhood;
pub mod scorer;

pub use aggregator::NeighborhoodAggregator;
pub use engine::{secondary_alignment, ExtensionReport, SemanticEqMatcher};
pub use scorer::{ParallelScorer, ScoreOutcome};
