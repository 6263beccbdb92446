//! Single-class re-optimization for large classes.

use tracing::{debug, info};

use super::types::Selection;
use crate::matrix::{PerformanceMatrix, Ranked};

/// Overrides the greedy choice for classes above a size threshold.
///
/// A strategy that is globally good can still be mediocre on one large
/// class, and large classes dominate the total solved count. Each class
/// with more than `threshold` problems gets the strategy that is best on
/// that class alone, ranked the same way as the local greedy policy.
#[derive(Debug, Clone, Copy)]
pub struct LargeClassRefiner<'m> {
    matrix: &'m PerformanceMatrix,
    threshold: usize,
}

impl<'m> LargeClassRefiner<'m> {
    pub fn new(matrix: &'m PerformanceMatrix, threshold: usize) -> Self {
        Self { matrix, threshold }
    }

    /// Create a refiner from a configured limit; `limit <= 0` disables it.
    pub fn from_limit(matrix: &'m PerformanceMatrix, limit: i64) -> Option<Self> {
        usize::try_from(limit)
            .ok()
            .filter(|threshold| *threshold > 0)
            .map(|threshold| Self::new(matrix, threshold))
    }

    /// Best strategy for a single class.
    pub fn best_for(&self, class: &str) -> Option<&'m str> {
        self.matrix
            .strategies()
            .map(|strategy| Ranked::new(strategy, self.matrix.outcome(class, strategy)))
            .min()
            .map(|ranked| ranked.name)
    }

    /// Refine every large class. Returns the number of changed assignments.
    pub fn refine(&self, selection: &mut Selection) -> usize {
        let mut changed = 0;
        let mut visited = 0;

        for class in self.matrix.classes() {
            if self.matrix.class_size(class) <= self.threshold {
                continue;
            }
            let Some(best) = self.best_for(class) else {
                continue;
            };
            visited += 1;

            let previous = selection.assign(class, best);
            if previous.as_deref() != Some(best) {
                debug!(
                    "Heuristic for {} changed from {} to {}",
                    class,
                    previous.as_deref().unwrap_or("<none>"),
                    best
                );
                changed += 1;
            }
            selection.mark_used(best);
        }

        info!(
            "Refined {} classes above {} problems, {} changed",
            visited, self.threshold, changed
        );
        changed
    }
}
