//! Parallel scorer: fan candidate pairs out to a fixed rayon pool, join, then
//! filter by threshold on the calling thread.

use std::panic::{self, AssertUnwindSafe};

use ontalign_core::errors::{MatcherError, OntAlignResult};
use ontalign_core::{Alignment, ClassId, Mapping};
use rayon::prelude::*;

use crate::events;

/// Result of one `score_all` call.
#[derive(Debug, Default)]
pub struct ScoreOutcome {
    /// Mappings at or above the threshold, in candidate order.
    pub alignment: Alignment,
    /// Tasks that produced a score.
    pub scored: usize,
    /// Tasks that failed and were excluded.
    pub failed: usize,
}

/// Worker pool configuration for scoring.
#[derive(Debug, Clone, Copy)]
pub struct ParallelScorer {
    threads: usize,
}

impl ParallelScorer {
    /// `threads == 0` selects the host's available parallelism.
    pub fn new(threads: usize) -> Self {
        let threads = if threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            threads
        };
        Self { threads }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Score every candidate with `score` and keep mappings with similarity
    /// `>= threshold`.
    ///
    /// A task that returns an error or panics is logged and dropped; the
    /// remaining results are still returned. The pool lives for this call only.
    pub fn score_all<F>(
        &self,
        candidates: &[(ClassId, ClassId)],
        threshold: f64,
        score: F,
    ) -> OntAlignResult<ScoreOutcome>
    where
        F: Fn(ClassId, ClassId) -> Result<f64, MatcherError> + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("ontalign-scorer-{i}"))
            .build()
            .map_err(|e| MatcherError::ThreadPool {
                reason: e.to_string(),
            })?;

        let results: Vec<Result<Mapping, MatcherError>> = pool.install(|| {
            candidates
                .par_iter()
                .map(|&(s, t)| run_task(&score, s, t))
                .collect()
        });

        // Join barrier passed: assemble single-threaded.
        let mut outcome = ScoreOutcome::default();
        for result in results {
            match result {
                Ok(mapping) => {
                    outcome.scored += 1;
                    if mapping.similarity >= threshold {
                        outcome.alignment.add(mapping);
                    }
                }
                Err(err) => {
                    outcome.failed += 1;
                    events::task_failed(&err);
                }
            }
        }
        Ok(outcome)
    }
}

impl Default for ParallelScorer {
    fn default() -> Self {
        Self::new(0)
    }
}

fn run_task<F>(score: &F, source_id: ClassId, target_id: ClassId) -> Result<Mapping, MatcherError>
where
    F: Fn(ClassId, ClassId) -> Result<f64, MatcherError> + Sync,
{
    match panic::catch_unwind(AssertUnwindSafe(|| score(source_id, target_id))) {
        Ok(Ok(similarity)) => Ok(Mapping::new(source_id, target_id, similarity)),
        Ok(Err(err)) => Err(err),
        Err(payload) => Err(MatcherError::TaskFailed {
            source_id,
            target_id,
            reason: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}
