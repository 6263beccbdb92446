//! JSON report.

use serde::{Deserialize, Serialize};

use super::Emitter;
use crate::config::SelectionPolicy;
use crate::error::Result;

/// Per-class row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassReport {
    pub class: String,
    pub strategy: String,
    /// Problems the assigned strategy solves in this class
    pub solved: u64,
    /// Best solved count of any strategy
    pub optimum: u64,
    pub size: usize,
}

/// Machine-readable summary of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport {
    pub policy: SelectionPolicy,
    pub class_dir: String,
    pub default_strategy: String,
    pub used: Vec<String>,
    pub total_optimum: u64,
    pub classes: Vec<ClassReport>,
}

impl JsonReport {
    pub(super) fn new(emitter: &Emitter<'_>) -> Result<Self> {
        let matrix = emitter.matrix;
        let classes = emitter
            .selection
            .assignment()
            .iter()
            .map(|(class, strategy)| ClassReport {
                class: class.clone(),
                strategy: strategy.clone(),
                solved: matrix.outcome(class, strategy).solved,
                optimum: matrix.optimum(class),
                size: matrix.class_size(class),
            })
            .collect();

        Ok(Self {
            policy: emitter.selection.policy,
            class_dir: emitter.class_dir.to_string(),
            default_strategy: emitter.default_strategy()?.to_string(),
            used: emitter.selection.used().to_vec(),
            total_optimum: matrix.total_optimum(),
            classes,
        })
    }
}

pub(super) fn render(emitter: &Emitter<'_>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&JsonReport::new(emitter)?)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputMode;
    use crate::selection::{test_matrix, GreedySelector};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_report_lists_classes() {
        let matrix = test_matrix(
            &[("CLASS_F", "a.p\nb.p\n"), ("CLASS_H", "c.p\n")],
            &[("s1", "a.p T 1\nc.p T 1\n"), ("s2", "a.p T 1\nb.p T 1\n")],
        );
        let selection = GreedySelector::new(&matrix, SelectionPolicy::LocalOptimality)
            .select()
            .unwrap();
        let text = Emitter::new(&matrix, &selection, "dir/")
            .render(OutputMode::Json)
            .unwrap();
        let report: JsonReport = serde_json::from_str(&text).unwrap();

        assert_eq!(report.policy, SelectionPolicy::LocalOptimality);
        assert_eq!(report.default_strategy, "s1");
        assert_eq!(report.used, vec!["s1".to_string(), "s2".to_string()]);
        assert_eq!(report.total_optimum, 3);
        assert_eq!(
            report.classes,
            vec![
                ClassReport {
                    class: "CLASS_F".into(),
                    strategy: "s2".into(),
                    solved: 2,
                    optimum: 2,
                    size: 2,
                },
                ClassReport {
                    class: "CLASS_H".into(),
                    strategy: "s1".into(),
                    solved: 1,
                    optimum: 1,
                    size: 1,
                },
            ]
        );
        assert!(text.contains("\"policy\": \"local_optimality\""));
    }
}
