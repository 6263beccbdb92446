//! The immutable performance matrix.

use std::collections::BTreeMap;

use super::types::{Outcome, Ranked};

/// Per-class row of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassRow {
    pub(crate) size: usize,
    pub(crate) optimum: u64,
    pub(crate) outcomes: BTreeMap<String, Outcome>,
}

/// A strategy known to the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyInfo {
    /// Literal description (protocol comment lines)
    pub description: String,
    /// Outcome summed over all classes
    pub global: Outcome,
}

/// Class × strategy outcomes with per-class optima.
///
/// Built only by [`super::MatrixBuilder::finish`]; there are no mutating
/// methods, so the matrix cannot change while selection reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMatrix {
    pub(crate) classes: BTreeMap<String, ClassRow>,
    pub(crate) strategies: BTreeMap<String, StrategyInfo>,
}

impl PerformanceMatrix {
    /// Class names in ascending order.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.keys().map(String::as_str)
    }

    /// Strategy names in ascending order.
    pub fn strategies(&self) -> impl Iterator<Item = &str> + '_ {
        self.strategies.keys().map(String::as_str)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Number of problems in a class.
    pub fn class_size(&self, class: &str) -> usize {
        self.classes.get(class).map_or(0, |row| row.size)
    }

    /// Best solved count any single strategy reaches on a class.
    pub fn optimum(&self, class: &str) -> u64 {
        self.classes.get(class).map_or(0, |row| row.optimum)
    }

    /// Sum of all class optima.
    pub fn total_optimum(&self) -> u64 {
        self.classes.values().map(|row| row.optimum).sum()
    }

    /// Outcome of a strategy on a class.
    pub fn outcome(&self, class: &str, strategy: &str) -> Outcome {
        self.classes
            .get(class)
            .and_then(|row| row.outcomes.get(strategy))
            .copied()
            .unwrap_or_default()
    }

    /// Outcome of a strategy summed over a set of classes.
    pub fn outcome_over<'c>(
        &self,
        classes: impl IntoIterator<Item = &'c str>,
        strategy: &str,
    ) -> Outcome {
        classes
            .into_iter()
            .map(|class| self.outcome(class, strategy))
            .sum()
    }

    /// Whether a strategy reaches the class optimum.
    pub fn covers(&self, class: &str, strategy: &str) -> bool {
        self.outcome(class, strategy).solved == self.optimum(class)
    }

    pub fn strategy(&self, strategy: &str) -> Option<&StrategyInfo> {
        self.strategies.get(strategy)
    }

    /// Global outcome of a strategy.
    pub fn global(&self, strategy: &str) -> Outcome {
        self.strategies
            .get(strategy)
            .map(|info| info.global)
            .unwrap_or_default()
    }

    /// Description text of a strategy.
    pub fn description(&self, strategy: &str) -> &str {
        self.strategies
            .get(strategy)
            .map_or("", |info| info.description.as_str())
    }

    /// All strategies ranked by global outcome, best first.
    pub fn global_order(&self) -> Vec<&str> {
        let mut ranked: Vec<Ranked<'_>> = self
            .strategies
            .iter()
            .map(|(name, info)| Ranked::new(name, info.global))
            .collect();
        ranked.sort();
        ranked.into_iter().map(|r| r.name).collect()
    }
}
