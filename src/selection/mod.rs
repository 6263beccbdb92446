//! Strategy selection: greedy covering followed by large class refinement.
//!
//! ## Example
//!
//! ```rust,ignore
//! use strategy_autogen::selection::{GreedySelector, LargeClassRefiner};
//! use strategy_autogen::SelectionPolicy;
//!
//! let mut selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
//!     .select()?;
//! if let Some(refiner) = LargeClassRefiner::from_limit(&matrix, 200) {
//!     refiner.refine(&mut selection);
//! }
//! println!("default: {:?}", selection.default_strategy());
//! ```
//!
//! ## Guarantees
//!
//! - Every class of the matrix ends up with exactly one strategy.
//! - The greedy pass only assigns a strategy to a class it solves optimally.
//! - Refinement never lowers a large class's solved count.

mod greedy;
mod proptest;
mod refine;
mod types;

pub use greedy::GreedySelector;
pub use refine::LargeClassRefiner;
pub use types::{Selection, SelectionStep};

/// Build a matrix from `(class, problems)` and `(strategy, protocol)` pairs.
#[cfg(test)]
pub(crate) fn test_matrix(
    classes: &[(&str, &str)],
    logs: &[(&str, &str)],
) -> crate::matrix::PerformanceMatrix {
    use crate::config::SuccessCodes;
    use crate::ingest::{ClassAssignment, StrategyLog};
    use crate::matrix::MatrixBuilder;

    let mut assignment = ClassAssignment::new();
    for (class, problems) in classes {
        assignment.add_class(class, problems).unwrap();
    }
    let mut builder = MatrixBuilder::new(assignment, SuccessCodes::Both);
    for (name, body) in logs {
        builder
            .add_strategy(&StrategyLog::parse(*name, body).unwrap())
            .unwrap();
    }
    builder.finish().0
}
