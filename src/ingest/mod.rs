//! Input ingestion: class files and strategy protocols.
//!
//! - **Classification** (`classification.rs`): class files → [`ClassAssignment`]
//! - **Protocols** (`protocol.rs`): benchmark logs → [`StrategyLog`]
//!
//! Both are plain readers; the matrix is assembled from their output by
//! [`crate::matrix::MatrixBuilder`].

pub mod classification;
pub mod protocol;

pub use classification::{class_file_name, problem_stem, ClassAssignment, CLASS_PREFIX};
pub use protocol::{strategy_name, ResultLine, StrategyLog, COMMENT_MARKER};
