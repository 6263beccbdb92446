//! Error types for strategy-autogen.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using strategy-autogen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the matrix, selecting strategies
/// or emitting code. Every variant is fatal for a run.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A problem name carries no recognized extension
    #[error("problem name has no extension: <{name}>")]
    MissingStem { name: String },

    /// A structurally malformed line in a class or protocol file
    #[error("{origin}:{line}: {message}")]
    MalformedInput {
        origin: String,
        line: usize,
        message: String,
    },

    /// Required inputs were not supplied
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A class name does not form a valid classification signature
    #[error("invalid class signature '{class}': {reason}")]
    InvalidSignature { class: String, reason: String },

    /// A code that is not part of a closed option table
    #[error("unknown {table} code '{code}'")]
    UnknownCode { table: &'static str, code: String },

    /// An option that requires an argument has none
    #[error("argument to option in command line missing: {option}")]
    MissingArgument { option: String },

    /// An option argument that does not parse
    #[error("invalid argument '{value}' to option {option}")]
    InvalidArgument { option: String, value: String },

    /// A strategy description carries no `-H` heuristic definition
    #[error("no heuristic defined in {strategy}")]
    MissingHeuristic { strategy: String },

    /// Greedy selection ran out of candidates with classes left uncovered
    #[error("selection exhausted all strategies with {remaining} classes uncovered")]
    SelectionExhausted { remaining: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-input error at a line of a named input.
    pub fn malformed(origin: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-signature error.
    pub fn invalid_signature(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            class: class.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown-code error for a closed option table.
    pub fn unknown_code(table: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            table,
            code: code.into(),
        }
    }
}
