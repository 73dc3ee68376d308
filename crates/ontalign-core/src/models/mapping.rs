use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::ClassId;

/// A scored correspondence between a source entity and a target entity.
///
/// Identity is the `(source_id, target_id)` pair; the similarity does not
/// take part in equality or hashing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mapping {
    pub source_id: ClassId,
    pub target_id: ClassId,
    /// Confidence in [0, 1].
    pub similarity: f64,
}

impl Mapping {
    pub fn new(source_id: ClassId, target_id: ClassId, similarity: f64) -> Self {
        Self {
            source_id,
            target_id,
            similarity,
        }
    }

    /// The identity key of this mapping.
    pub fn key(&self) -> (ClassId, ClassId) {
        (self.source_id, self.target_id)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Mapping {}

impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} ({:.3})",
            self.source_id, self.target_id, self.similarity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_similarity() {
        assert_eq!(Mapping::new(1, 2, 0.3), Mapping::new(1, 2, 0.9));
        assert_ne!(Mapping::new(1, 2, 0.3), Mapping::new(2, 1, 0.3));
    }

    #[test]
    fn hash_set_dedups_by_pair() {
        let set: HashSet<Mapping> = [Mapping::new(1, 2, 0.3), Mapping::new(1, 2, 0.7)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }
}
