//! Outcome values and the ranking order shared by every selection pass.

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Aggregate result of a strategy on a set of problems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Number of solved problems
    pub solved: u64,
    /// Total time spent on the solved problems
    pub time: f64,
}

impl Outcome {
    /// Outcome of nothing solved.
    pub const ZERO: Self = Self {
        solved: 0,
        time: 0.0,
    };

    /// Create an outcome.
    pub fn new(solved: u64, time: f64) -> Self {
        Self { solved, time }
    }

    /// Record one more solved problem.
    pub fn record(&mut self, time: f64) {
        self.solved += 1;
        self.time += time;
    }

    /// Whether this outcome ranks strictly ahead of `other`.
    pub fn is_better_than(&self, other: &Outcome) -> bool {
        preference(self, other) == Ordering::Less
    }
}

impl Add for Outcome {
    type Output = Outcome;

    fn add(self, rhs: Outcome) -> Outcome {
        Outcome {
            solved: self.solved + rhs.solved,
            time: self.time + rhs.time,
        }
    }
}

impl AddAssign for Outcome {
    fn add_assign(&mut self, rhs: Outcome) {
        *self = *self + rhs;
    }
}

impl Sum for Outcome {
    fn sum<I: Iterator<Item = Outcome>>(iter: I) -> Outcome {
        iter.fold(Outcome::ZERO, Add::add)
    }
}

/// Preference between outcomes: `Less` means `a` ranks first.
///
/// More solved problems always win; among equal counts less time wins.
pub fn preference(a: &Outcome, b: &Outcome) -> Ordering {
    b.solved
        .cmp(&a.solved)
        .then_with(|| a.time.total_cmp(&b.time))
}

/// A strategy with a score, ordered best first.
///
/// The order is total: solved count descending, time ascending, then
/// strategy name ascending. Sorting a slice of `Ranked` yields the global
/// strategy order, and `min()` over candidates yields the local winner, so
/// both policies break ties identically.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub name: &'a str,
    pub outcome: Outcome,
}

impl<'a> Ranked<'a> {
    pub fn new(name: &'a str, outcome: Outcome) -> Self {
        Self { name, outcome }
    }
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        preference(&self.outcome, &other.outcome).then_with(|| self.name.cmp(other.name))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}
