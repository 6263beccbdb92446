//! # strategy-autogen
//!
//! Per-class proof strategy selection from benchmark protocols, and
//! generation of the code that dispatches to the chosen strategies.
//!
//! ## Core Components
//!
//! - **Ingest**: class files and strategy protocols
//! - **Matrix**: class × strategy outcomes and class optima
//! - **Selection**: greedy covering plus large class refinement
//! - **Heuristic**: strategy descriptions parsed into closed option tables
//! - **Emit**: full dispatch code, raw tables or a JSON report
//!
//! ## Example
//!
//! ```rust,ignore
//! use strategy_autogen::{Generator, GeneratorConfig, SelectionPolicy};
//!
//! let config = GeneratorConfig::new().with_policy(SelectionPolicy::LocalOptimality);
//! let code = Generator::new(config).generate(&["classes/CLASS_FUGNF", "prot/protokoll_S1"])?;
//! print!("{}", code);
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod heuristic;
pub mod ingest;
pub mod matrix;
pub mod pipeline;
pub mod selection;
pub mod signature;

// Re-exports for convenience
pub use config::{
    GeneratorConfig, OutputMode, SelectionPolicy, SuccessCodes, DEFAULT_LARGE_CLASS_LIMIT,
    MODEL_FOUND, PROOF_FOUND,
};
pub use emit::{ClassReport, Emitter, JsonReport};
pub use error::{Error, Result};
pub use heuristic::{ControlSettings, OrderingSettings, StrategyDescription};
pub use ingest::{ClassAssignment, StrategyLog};
pub use matrix::{MatrixBuilder, Outcome, PerformanceMatrix};
pub use pipeline::{Generator, Inputs, Run};
pub use selection::{GreedySelector, LargeClassRefiner, Selection, SelectionStep};
pub use signature::{ClassSignature, Feature};
