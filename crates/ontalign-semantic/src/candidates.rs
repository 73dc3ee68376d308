//! Candidate generation: pair up the neighbors of every seed mapping.

use std::collections::BTreeSet;

use ontalign_core::traits::{IAlignmentStore, IClassHierarchy};
use ontalign_core::{Alignment, ClassId};
use tracing::debug;

use crate::neighborhood::{Neighborhood, Side};

/// Unique candidate pairs in ascending `(source, target)` order.
pub type CandidateSet = BTreeSet<(ClassId, ClassId)>;

/// Pair the ancestors of each seed source with the ancestors of its target,
/// and likewise for descendants, within `radius` hops.
///
/// Only seed mappings whose source is a class contribute. A pair is dropped
/// when its source is already mapped in `seed` or its target already is.
pub fn generate(
    seed: &Alignment,
    source: &dyn IClassHierarchy,
    target: &dyn IClassHierarchy,
    radius: u32,
) -> CandidateSet {
    let mut candidates = CandidateSet::new();
    if radius == 0 {
        return candidates;
    }

    for mapping in seed {
        if !source.is_class(mapping.source_id) {
            debug!(source_id = mapping.source_id, "seed source is not a class, skipped");
            continue;
        }
        let nb = Neighborhood::collect(source, target, mapping.source_id, mapping.target_id, radius);
        for side in [Side::Descendants, Side::Ancestors] {
            let (sources, targets) = nb.side(side);
            pair_unmapped(seed, sources, targets, &mut candidates);
        }
    }

    candidates
}

fn pair_unmapped(
    seed: &Alignment,
    sources: &[ClassId],
    targets: &[ClassId],
    out: &mut CandidateSet,
) {
    for &s in sources {
        if seed.contains_source(s) {
            continue;
        }
        for &t in targets {
            if seed.contains_target(t) {
                continue;
            }
            out.insert((s, t));
        }
    }
}
