//! Collaborator interfaces the matcher relies on.

mod alignment_store;
mod hierarchy;
mod matcher;

pub use alignment_store::IAlignmentStore;
pub use hierarchy::IClassHierarchy;
pub use matcher::ISecondaryMatcher;
