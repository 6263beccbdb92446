//! Generator configuration.
//!
//! A single [`GeneratorConfig`] carries every knob of a run: which status
//! codes count as solved, which greedy policy drives selection, the size
//! threshold for single-class refinement, and the output mode.

use serde::{Deserialize, Serialize};

/// Status code a protocol line reports for a found proof.
pub const PROOF_FOUND: &str = "T";
/// Status code a protocol line reports for a found model (saturation).
pub const MODEL_FOUND: &str = "N";

/// Default size above which a class is refined on its own.
pub const DEFAULT_LARGE_CLASS_LIMIT: i64 = 200;

/// Which protocol status codes count as a solved problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessCodes {
    /// Proofs and models both count.
    #[default]
    Both,
    /// Only found proofs count.
    ProofsOnly,
    /// Only found models count.
    ModelsOnly,
}

impl SuccessCodes {
    /// Check whether a status code counts as a success.
    pub fn accepts(&self, status: &str) -> bool {
        match self {
            Self::Both => status == PROOF_FOUND || status == MODEL_FOUND,
            Self::ProofsOnly => status == PROOF_FOUND,
            Self::ModelsOnly => status == MODEL_FOUND,
        }
    }
}

/// Greedy selection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Consume one fixed order of strategies ranked by global performance.
    #[default]
    GlobalPerformance,
    /// Re-rank the unpicked strategies against the remaining classes each round.
    LocalOptimality,
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GlobalPerformance => write!(f, "global_performance"),
            Self::LocalOptimality => write!(f, "local_optimality"),
        }
    }
}

/// Shape of the emitted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Conditional dispatch code with heuristic definitions.
    #[default]
    Full,
    /// Compact class/strategy tables.
    Raw,
    /// Machine-readable JSON report.
    Json,
}

/// Configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Status codes that count as solved
    pub success_codes: SuccessCodes,
    /// Greedy selection policy
    pub policy: SelectionPolicy,
    /// Classes strictly larger than this are refined on their own; `<= 0` disables
    pub large_class_limit: i64,
    /// Output mode
    pub output: OutputMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            success_codes: SuccessCodes::default(),
            policy: SelectionPolicy::default(),
            large_class_limit: DEFAULT_LARGE_CLASS_LIMIT,
            output: OutputMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted success codes.
    pub fn with_success_codes(mut self, codes: SuccessCodes) -> Self {
        self.success_codes = codes;
        self
    }

    /// Set the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the large class limit.
    pub fn with_large_class_limit(mut self, limit: i64) -> Self {
        self.large_class_limit = limit;
        self
    }

    /// Set the output mode.
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes_default_accepts_proofs_and_models() {
        let codes = SuccessCodes::default();
        assert!(codes.accepts("T"));
        assert!(codes.accepts("N"));
        assert!(!codes.accepts("F"));
        assert!(!codes.accepts("t"));
    }

    #[test]
    fn test_success_codes_restricted() {
        assert!(SuccessCodes::ProofsOnly.accepts("T"));
        assert!(!SuccessCodes::ProofsOnly.accepts("N"));
        assert!(SuccessCodes::ModelsOnly.accepts("N"));
        assert!(!SuccessCodes::ModelsOnly.accepts("T"));
    }

    #[test]
    fn test_config_serializes_snake_case() {
        let config = GeneratorConfig::new()
            .with_policy(SelectionPolicy::LocalOptimality)
            .with_output(OutputMode::Raw);
        let json = serde_json::to_string(&config).expect("config should serialize");
        assert!(json.contains("\"local_optimality\""));
        assert!(json.contains("\"raw\""));
    }
}
