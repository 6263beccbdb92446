//! Performance matrix: class × strategy outcomes and class optima.
//!
//! The matrix is assembled by a [`MatrixBuilder`] during ingestion and frozen
//! into a [`PerformanceMatrix`] before selection starts:
//!
//! ```rust,ignore
//! use strategy_autogen::matrix::MatrixBuilder;
//!
//! let mut builder = MatrixBuilder::new(assignment, SuccessCodes::Both);
//! for log in &logs {
//!     builder.add_strategy(log)?;
//! }
//! let (matrix, assignment) = builder.finish();
//! assert_eq!(matrix.optimum("CLASS_FHUNF-SSS000SS"), 42);
//! ```
//!
//! All rankings go through [`Ranked`], so the global order, the local scan
//! and large class refinement share one tie-break rule.

mod builder;
mod performance;
mod types;

pub use builder::MatrixBuilder;
pub use performance::{PerformanceMatrix, StrategyInfo};
pub use types::{preference, Outcome, Ranked};
