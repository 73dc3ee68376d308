//! Information content of a class within one ontology.
//!
//! Values are memoized per run with a moka cache shared by every worker.

use moka::sync::Cache;
use ontalign_core::config::IcModel;
use ontalign_core::traits::IClassHierarchy;
use ontalign_core::ClassId;

/// Seco intrinsic IC: `1 - ln(descendants + 1) / ln(corpus_size)`.
///
/// Returns 0 when the corpus has at most one entity.
pub fn seco(descendants: usize, corpus_size: usize) -> f64 {
    if corpus_size <= 1 {
        return 0.0;
    }
    1.0 - ((descendants + 1) as f64).ln() / (corpus_size as f64).ln()
}

/// Resnik IC: `-ln((subclasses + 1) / corpus_size)`.
///
/// Returns 0 when the corpus has at most one entity.
pub fn resnik(subclasses: usize, corpus_size: usize) -> f64 {
    if corpus_size <= 1 {
        return 0.0;
    }
    -(((subclasses + 1) as f64) / corpus_size as f64).ln()
}

/// IC calculator bound to one side of the alignment.
pub struct InformationContent<'a> {
    hierarchy: &'a dyn IClassHierarchy,
    corpus_size: usize,
    model: IcModel,
    cache: Cache<ClassId, f64>,
}

impl<'a> InformationContent<'a> {
    pub fn new(hierarchy: &'a dyn IClassHierarchy, corpus_size: usize, model: IcModel) -> Self {
        let cache = Cache::builder()
            .max_capacity(corpus_size.max(1) as u64)
            .build();
        Self {
            hierarchy,
            corpus_size,
            model,
            cache,
        }
    }

    pub fn hierarchy(&self) -> &'a dyn IClassHierarchy {
        self.hierarchy
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// IC of `class_id` under the configured model.
    pub fn of(&self, class_id: ClassId) -> f64 {
        self.cache.get_with(class_id, || self.compute(class_id))
    }

    fn compute(&self, class_id: ClassId) -> f64 {
        match self.model {
            IcModel::Seco => seco(
                self.hierarchy.all_descendants(class_id).len(),
                self.corpus_size,
            ),
            IcModel::Resnik => resnik(
                self.hierarchy.transitive_subclass_count(class_id),
                self.corpus_size,
            ),
        }
    }
}
