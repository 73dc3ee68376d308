//! Ancestor/descendant neighborhoods of a class pair, accumulated over
//! hop distances 1..=radius.

use ontalign_core::traits::IClassHierarchy;
use ontalign_core::ClassId;

/// Which side of the hierarchy a neighborhood list walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Ancestors,
    Descendants,
}

/// Neighbors of a `(source, target)` pair within the radius.
///
/// Each list is ordered by hop distance, then by id, so that scores summed
/// over it are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub source_ancestors: Vec<ClassId>,
    pub target_ancestors: Vec<ClassId>,
    pub source_descendants: Vec<ClassId>,
    pub target_descendants: Vec<ClassId>,
}

impl Neighborhood {
    pub fn collect(
        source: &dyn IClassHierarchy,
        target: &dyn IClassHierarchy,
        source_id: ClassId,
        target_id: ClassId,
        radius: u32,
    ) -> Self {
        let mut nb = Neighborhood::default();
        for r in 1..=radius {
            extend_sorted(&mut nb.source_ancestors, source.ancestors_at_distance(source_id, r));
            extend_sorted(&mut nb.target_ancestors, target.ancestors_at_distance(target_id, r));
            extend_sorted(&mut nb.source_descendants, source.descendants_at_distance(source_id, r));
            extend_sorted(&mut nb.target_descendants, target.descendants_at_distance(target_id, r));
        }
        nb
    }

    /// The `(source, target)` lists for one side.
    pub fn side(&self, side: Side) -> (&[ClassId], &[ClassId]) {
        match side {
            Side::Ancestors => (&self.source_ancestors, &self.target_ancestors),
            Side::Descendants => (&self.source_descendants, &self.target_descendants),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_ancestors.is_empty()
            && self.target_ancestors.is_empty()
            && self.source_descendants.is_empty()
            && self.target_descendants.is_empty()
    }
}

fn extend_sorted(list: &mut Vec<ClassId>, layer: impl IntoIterator<Item = ClassId>) {
    let mut layer: Vec<ClassId> = layer.into_iter().collect();
    layer.sort_unstable();
    list.extend(layer);
}
