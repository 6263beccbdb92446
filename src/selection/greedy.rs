//! Greedy set covering over the performance matrix.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, trace};

use super::types::Selection;
use crate::config::SelectionPolicy;
use crate::error::{Error, Result};
use crate::matrix::{PerformanceMatrix, Ranked};

/// Assigns exactly one strategy to every class of a matrix.
///
/// A strategy *covers* a class when it reaches the class optimum. Each
/// round picks a strategy, assigns it to every remaining class it covers
/// and removes those classes, until no class remains.
///
/// - [`SelectionPolicy::GlobalPerformance`] walks one fixed order of all
///   strategies ranked by their global outcome.
/// - [`SelectionPolicy::LocalOptimality`] re-ranks the strategies not yet
///   picked by their outcome summed over the remaining classes only.
#[derive(Debug, Clone, Copy)]
pub struct GreedySelector<'m> {
    matrix: &'m PerformanceMatrix,
    policy: SelectionPolicy,
}

impl<'m> GreedySelector<'m> {
    pub fn new(matrix: &'m PerformanceMatrix, policy: SelectionPolicy) -> Self {
        Self { matrix, policy }
    }

    /// Run the greedy pass.
    pub fn select(&self) -> Result<Selection> {
        info!(
            "Running {} selection over {} classes and {} strategies",
            self.policy,
            self.matrix.class_count(),
            self.matrix.strategy_count()
        );

        let mut selection = Selection::new(self.policy);
        let mut remaining: BTreeSet<&str> = self.matrix.classes().collect();

        match self.policy {
            SelectionPolicy::GlobalPerformance => {
                let mut order = self.matrix.global_order().into_iter();
                while !remaining.is_empty() {
                    let strategy = order.next().ok_or(Error::SelectionExhausted {
                        remaining: remaining.len(),
                    })?;
                    self.cover(strategy, &mut remaining, &mut selection);
                }
            }
            SelectionPolicy::LocalOptimality => {
                let mut picked: HashSet<&str> = HashSet::new();
                while !remaining.is_empty() {
                    let strategy = self
                        .best_remaining(&remaining, &picked)
                        .ok_or(Error::SelectionExhausted {
                            remaining: remaining.len(),
                        })?;
                    picked.insert(strategy);
                    self.cover(strategy, &mut remaining, &mut selection);
                }
            }
        }

        info!("Selected {} strategies", selection.used().len());
        Ok(selection)
    }

    /// Best unpicked strategy scored over the remaining classes.
    fn best_remaining(
        &self,
        remaining: &BTreeSet<&str>,
        picked: &HashSet<&str>,
    ) -> Option<&'m str> {
        self.matrix
            .strategies()
            .filter(|strategy| !picked.contains(strategy))
            .map(|strategy| {
                Ranked::new(
                    strategy,
                    self.matrix.outcome_over(remaining.iter().copied(), strategy),
                )
            })
            .min()
            .map(|ranked| ranked.name)
    }

    /// Assign `strategy` to every remaining class it covers.
    fn cover(&self, strategy: &str, remaining: &mut BTreeSet<&str>, selection: &mut Selection) {
        let covered: Vec<&str> = remaining
            .iter()
            .copied()
            .filter(|class| self.matrix.covers(class, strategy))
            .collect();

        if covered.is_empty() {
            trace!("{} covers no remaining class", strategy);
            return;
        }

        for class in &covered {
            remaining.remove(class);
            selection.assign(class, strategy);
        }
        selection.mark_used(strategy);
        debug!(
            "{} covers {} classes, {} remaining",
            strategy,
            covered.len(),
            remaining.len()
        );
        selection.record_step(strategy, covered.into_iter().map(String::from).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::test_matrix as matrix;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_global_policy_covers_every_class() {
        let m = matrix(
            &[("C1", "a.p\nb.p\n"), ("C2", "c.p\n")],
            &[
                ("s1", "a.p T 1\nb.p T 1\n"),
                ("s2", "c.p T 1\n"),
                ("s3", ""),
            ],
        );
        let selection = GreedySelector::new(&m, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();

        assert_eq!(selection.strategy_for("C1"), Some("s1"));
        assert_eq!(selection.strategy_for("C2"), Some("s2"));
        assert_eq!(selection.used(), &["s1".to_string(), "s2".to_string()]);
    }

    #[test]
    fn test_global_policy_skips_strategies_that_cover_nothing() {
        // s_wide wins globally but reaches no class optimum.
        let m = matrix(
            &[("C1", "a.p\nb.p\n"), ("C2", "c.p\nd.p\n")],
            &[
                ("s_wide", "a.p T 1\nc.p T 1\n"),
                ("s_left", "a.p T 5\nb.p T 5\n"),
                ("s_right", "c.p T 5\nd.p T 5\n"),
            ],
        );
        let selection = GreedySelector::new(&m, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();

        assert_eq!(selection.strategy_for("C1"), Some("s_left"));
        assert_eq!(selection.strategy_for("C2"), Some("s_right"));
        assert!(!selection.used().iter().any(|s| s == "s_wide"));
        assert_eq!(selection.default_strategy(), Some("s_left"));
    }

    #[test]
    fn test_unsolved_class_goes_to_first_strategy_in_order() {
        let m = matrix(
            &[("C1", "a.p\n"), ("C0", "z.p\n")],
            &[("s1", "a.p T 1\n"), ("s2", "")],
        );
        let selection = GreedySelector::new(&m, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        assert_eq!(selection.strategy_for("C0"), Some("s1"));
        assert_eq!(selection.strategy_for("C1"), Some("s1"));
    }

    #[test]
    fn test_local_policy_assigns_each_class_its_optimum() {
        let m = matrix(
            &[("C_big", "a.p\nb.p\nc.p\n"), ("C_small", "x.p\ny.p\n")],
            &[
                ("s_big", "a.p T 1\nb.p T 1\nc.p T 1\nx.p T 1\n"),
                ("s_small", "x.p T 9\ny.p T 9\n"),
            ],
        );
        let selection = GreedySelector::new(&m, SelectionPolicy::LocalOptimality)
            .select()
            .unwrap();
        assert_eq!(selection.strategy_for("C_big"), Some("s_big"));
        assert_eq!(selection.strategy_for("C_small"), Some("s_small"));
        assert_eq!(selection.policy, SelectionPolicy::LocalOptimality);
    }

    #[test]
    fn test_local_policy_can_differ_from_global() {
        // Globally: s_a (3 solved) > s_b (2) > s_c (1).
        // Locally: once s_a has taken C1 and C2, s_c solves C3 faster.
        let m = matrix(
            &[("C1", "a.p\nb.p\n"), ("C2", "c.p\n"), ("C3", "d.p\n")],
            &[
                ("s_a", "a.p T 1\nb.p T 1\nc.p T 1\n"),
                ("s_b", "a.p T 1\nd.p T 5\n"),
                ("s_c", "d.p T 1\n"),
            ],
        );
        let global = GreedySelector::new(&m, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        let local = GreedySelector::new(&m, SelectionPolicy::LocalOptimality)
            .select()
            .unwrap();

        assert_eq!(global.strategy_for("C3"), Some("s_b"));
        assert_eq!(local.strategy_for("C3"), Some("s_c"));
        assert_eq!(local.strategy_for("C2"), Some("s_a"));
    }

    #[test]
    fn test_local_policy_ties_break_on_time_then_name() {
        let m = matrix(
            &[("C1", "a.p\n")],
            &[("s_b", "a.p T 1\n"), ("s_a", "a.p T 1\n"), ("s_slow", "a.p T 7\n")],
        );
        let selection = GreedySelector::new(&m, SelectionPolicy::LocalOptimality)
            .select()
            .unwrap();
        assert_eq!(selection.strategy_for("C1"), Some("s_a"));
    }

    #[test]
    fn test_no_strategies_is_exhaustion_error() {
        let m = matrix(&[("C1", "a.p\n")], &[]);
        let result = GreedySelector::new(&m, SelectionPolicy::GlobalPerformance).select();
        assert!(matches!(
            result,
            Err(Error::SelectionExhausted { remaining: 1 })
        ));
        let result = GreedySelector::new(&m, SelectionPolicy::LocalOptimality).select();
        assert!(result.is_err());
    }

    #[test]
    fn test_steps_record_covered_classes() {
        let m = matrix(
            &[("C1", "a.p\n"), ("C2", "b.p\n")],
            &[("s1", "a.p T 1\nb.p T 1\n")],
        );
        let selection = GreedySelector::new(&m, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        assert_eq!(selection.steps().len(), 1);
        assert_eq!(selection.steps()[0].covered, vec!["C1", "C2"]);
    }
}
