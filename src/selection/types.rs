//! Selection result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::SelectionPolicy;

/// One step of the greedy pass: a strategy and the classes it took over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStep {
    pub strategy: String,
    pub covered: Vec<String>,
}

/// Which class runs which strategy, and the strategies in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Policy that produced the greedy assignment
    pub policy: SelectionPolicy,
    assignment: BTreeMap<String, String>,
    used: Vec<String>,
    steps: Vec<SelectionStep>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            assignment: BTreeMap::new(),
            used: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Class → strategy, in class name order.
    pub fn assignment(&self) -> &BTreeMap<String, String> {
        &self.assignment
    }

    /// Strategy assigned to a class.
    pub fn strategy_for(&self, class: &str) -> Option<&str> {
        self.assignment.get(class).map(String::as_str)
    }

    /// Strategies in the order they were first selected.
    pub fn used(&self) -> &[String] {
        &self.used
    }

    /// The fallback strategy: the first one the greedy pass selected.
    pub fn default_strategy(&self) -> Option<&str> {
        self.used.first().map(String::as_str)
    }

    /// Steps taken by the greedy pass.
    pub fn steps(&self) -> &[SelectionStep] {
        &self.steps
    }

    /// Assign a strategy to a class, returning the previous strategy.
    pub fn assign(&mut self, class: &str, strategy: &str) -> Option<String> {
        self.assignment
            .insert(class.to_string(), strategy.to_string())
    }

    /// Record that a strategy is in use; duplicates are ignored.
    pub fn mark_used(&mut self, strategy: &str) {
        if !self.used.iter().any(|s| s == strategy) {
            self.used.push(strategy.to_string());
        }
    }

    pub(crate) fn record_step(&mut self, strategy: &str, covered: Vec<String>) {
        self.steps.push(SelectionStep {
            strategy: strategy.to_string(),
            covered,
        });
    }

    /// Classes grouped by assigned strategy.
    ///
    /// Groups follow the order of [`Selection::used`]; classes within a group
    /// are in name order. Used strategies with no class left are omitted.
    pub fn groups(&self) -> Vec<(&str, Vec<&str>)> {
        let mut by_strategy: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (class, strategy) in &self.assignment {
            by_strategy
                .entry(strategy.as_str())
                .or_default()
                .push(class.as_str());
        }

        self.used
            .iter()
            .filter_map(|strategy| {
                by_strategy
                    .remove(strategy.as_str())
                    .map(|classes| (strategy.as_str(), classes))
            })
            .collect()
    }
}
