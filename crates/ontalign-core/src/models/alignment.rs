use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ClassId, Mapping};
use crate::traits::IAlignmentStore;

/// An insertion-ordered set of mappings keyed by `(source_id, target_id)`.
///
/// Adding a pair that is already present keeps a single mapping with the
/// higher of the two similarities. Source and target membership queries are
/// answered from reference-counted indexes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Mapping>", into = "Vec<Mapping>")]
pub struct Alignment {
    mappings: Vec<Mapping>,
    /// Pair → position in `mappings`.
    by_pair: HashMap<(ClassId, ClassId), usize>,
    /// Source id → number of mappings using it.
    sources: HashMap<ClassId, usize>,
    /// Target id → number of mappings using it.
    targets: HashMap<ClassId, usize>,
}

impl Alignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Returns `true` if the alignment changed.
    pub fn add(&mut self, mapping: Mapping) -> bool {
        let key = mapping.key();
        if let Some(&pos) = self.by_pair.get(&key) {
            let existing = &mut self.mappings[pos];
            if mapping.similarity > existing.similarity {
                existing.similarity = mapping.similarity;
                return true;
            }
            return false;
        }
        self.by_pair.insert(key, self.mappings.len());
        *self.sources.entry(mapping.source_id).or_insert(0) += 1;
        *self.targets.entry(mapping.target_id).or_insert(0) += 1;
        self.mappings.push(mapping);
        true
    }

    /// Union another alignment into this one. Returns how many mappings changed.
    pub fn add_all<'a, I>(&mut self, mappings: I) -> usize
    where
        I: IntoIterator<Item = &'a Mapping>,
    {
        mappings
            .into_iter()
            .filter(|m| self.add(**m))
            .count()
    }

    pub fn get(&self, source_id: ClassId, target_id: ClassId) -> Option<&Mapping> {
        self.by_pair
            .get(&(source_id, target_id))
            .map(|&pos| &self.mappings[pos])
    }

    pub fn contains(&self, source_id: ClassId, target_id: ClassId) -> bool {
        self.by_pair.contains_key(&(source_id, target_id))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Number of distinct source ids in use.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Number of distinct target ids in use.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Mappings with similarity `>= min`, in insertion order.
    pub fn at_least(&self, min: f64) -> Alignment {
        self.iter().filter(|m| m.similarity >= min).copied().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.mappings.iter()
    }
}

impl IAlignmentStore for Alignment {
    fn prior_similarity(&self, source_id: ClassId, target_id: ClassId) -> f64 {
        self.get(source_id, target_id)
            .map_or(0.0, |m| m.similarity)
    }

    fn contains_source(&self, source_id: ClassId) -> bool {
        self.sources.contains_key(&source_id)
    }

    fn contains_target(&self, target_id: ClassId) -> bool {
        self.targets.contains_key(&target_id)
    }

    fn add(&mut self, mapping: Mapping) -> bool {
        Alignment::add(self, mapping)
    }
}

impl FromIterator<Mapping> for Alignment {
    fn from_iter<I: IntoIterator<Item = Mapping>>(iter: I) -> Self {
        let mut alignment = Alignment::new();
        alignment.extend(iter);
        alignment
    }
}

impl Extend<Mapping> for Alignment {
    fn extend<I: IntoIterator<Item = Mapping>>(&mut self, iter: I) {
        for mapping in iter {
            self.add(mapping);
        }
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

impl From<Vec<Mapping>> for Alignment {
    fn from(mappings: Vec<Mapping>) -> Self {
        mappings.into_iter().collect()
    }
}

impl From<Alignment> for Vec<Mapping> {
    fn from(alignment: Alignment) -> Self {
        alignment.mappings
    }
}
