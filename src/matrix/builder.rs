//! Ingestion-scoped matrix accumulation.

use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use super::performance::{ClassRow, PerformanceMatrix, StrategyInfo};
use super::types::Outcome;
use crate::config::SuccessCodes;
use crate::error::Result;
use crate::ingest::{ClassAssignment, StrategyLog};

/// Mutable accumulator for the performance matrix.
///
/// Every class gets an outcome for every strategy, starting at zero;
/// qualifying result lines add `(1, time)` to their cell and to the
/// strategy's global total.
#[derive(Debug)]
pub struct MatrixBuilder {
    assignment: ClassAssignment,
    success_codes: SuccessCodes,
    cells: BTreeMap<String, BTreeMap<String, Outcome>>,
    strategies: BTreeMap<String, StrategyInfo>,
}

impl MatrixBuilder {
    pub fn new(assignment: ClassAssignment, success_codes: SuccessCodes) -> Self {
        let cells = assignment
            .sizes()
            .keys()
            .map(|class| (class.clone(), BTreeMap::new()))
            .collect();
        Self {
            assignment,
            success_codes,
            cells,
            strategies: BTreeMap::new(),
        }
    }

    /// Add a strategy's protocol. Returns the number of counted results.
    ///
    /// A strategy name seen before replaces the earlier protocol. Status and
    /// time are validated only on lines whose problem is classified; the time
    /// only when the status counts.
    pub fn add_strategy(&mut self, log: &StrategyLog) -> Result<usize> {
        info!("Parsing {}", log.name);
        if self.strategies.contains_key(&log.name) {
            debug!("Replacing earlier protocol for {}", log.name);
            for row in self.cells.values_mut() {
                row.remove(&log.name);
            }
        }

        let mut global = Outcome::ZERO;
        let mut per_class: BTreeMap<&str, Outcome> = BTreeMap::new();
        let mut counted = 0;

        for result in &log.results {
            let Some(class) = self.assignment.class_of(&result.problem) else {
                trace!("{}: problem {} is in no class", log.name, result.problem);
                continue;
            };
            if !self.success_codes.accepts(result.status(&log.name)?) {
                continue;
            }
            let time = result.seconds(&log.name)?;
            per_class.entry(class).or_default().record(time);
            global.record(time);
            counted += 1;
        }

        let per_class: Vec<(String, Outcome)> = per_class
            .into_iter()
            .map(|(class, outcome)| (class.to_string(), outcome))
            .collect();
        for (class, outcome) in per_class {
            if let Some(row) = self.cells.get_mut(&class) {
                row.insert(log.name.clone(), outcome);
            }
        }

        self.strategies.insert(
            log.name.clone(),
            StrategyInfo {
                description: log.description.clone(),
                global,
            },
        );
        debug!("{}: {} solved, {:.2}s", log.name, global.solved, global.time);
        Ok(counted)
    }

    /// Freeze the matrix: fill missing cells with zero and compute class optima.
    pub fn finish(self) -> (PerformanceMatrix, ClassAssignment) {
        let Self {
            assignment,
            mut cells,
            strategies,
            ..
        } = self;

        let mut classes = BTreeMap::new();
        for (class, size) in assignment.sizes() {
            let mut outcomes = cells.remove(class).unwrap_or_default();
            for name in strategies.keys() {
                outcomes.entry(name.clone()).or_insert(Outcome::ZERO);
            }
            let optimum = outcomes.values().map(|o| o.solved).max().unwrap_or(0);
            classes.insert(
                class.clone(),
                ClassRow {
                    size: *size,
                    optimum,
                    outcomes,
                },
            );
        }

        (
            PerformanceMatrix {
                classes,
                strategies,
            },
            assignment,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn assignment() -> ClassAssignment {
        let mut assignment = ClassAssignment::new();
        assignment.add_class("CLASS_A", "P1.p\nP2.p\n").unwrap();
        assignment.add_class("CLASS_B", "Q1.p\n").unwrap();
        assignment
    }

    fn log(name: &str, body: &str) -> StrategyLog {
        StrategyLog::parse(name, body).unwrap()
    }

    #[test]
    fn test_matrix_is_fully_populated() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        builder.add_strategy(&log("s1", "P1.p T 1.0\n")).unwrap();
        builder.add_strategy(&log("s2", "")).unwrap();
        let (matrix, _) = builder.finish();

        for class in ["CLASS_A", "CLASS_B"] {
            for strategy in ["s1", "s2"] {
                assert!(matrix.classes[class].outcomes.contains_key(strategy));
            }
        }
        assert_eq!(matrix.outcome("CLASS_B", "s1"), Outcome::ZERO);
    }

    #[test]
    fn test_outcomes_accumulate_additively() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        let counted = builder
            .add_strategy(&log("s1", "P1.p T 1.0\nP2.p N 2.5\nQ1.p F 3.0\n"))
            .unwrap();
        let (matrix, _) = builder.finish();

        assert_eq!(counted, 2);
        assert_eq!(matrix.outcome("CLASS_A", "s1"), Outcome::new(2, 3.5));
        assert_eq!(matrix.outcome("CLASS_B", "s1"), Outcome::ZERO);
        assert_eq!(matrix.global("s1"), Outcome::new(2, 3.5));
    }

    #[test]
    fn test_success_codes_filter_results() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::ProofsOnly);
        builder.add_strategy(&log("s1", "P1.p T 1.0\nP2.p N 2.5\n")).unwrap();
        let (matrix, _) = builder.finish();
        assert_eq!(matrix.outcome("CLASS_A", "s1"), Outcome::new(1, 1.0));
    }

    #[test]
    fn test_unknown_problem_is_ignored() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        let counted = builder.add_strategy(&log("s1", "ZZZ999-1.p T 1.0\n")).unwrap();
        let (matrix, _) = builder.finish();
        assert_eq!(counted, 0);
        assert_eq!(matrix.global("s1"), Outcome::ZERO);
    }

    #[test]
    fn test_noise_on_lines_that_do_not_count_is_ignored() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        let body = "P1.p T 1.0\nUNK001-1.p T n/a\nUNK002-1.p F\nUNK003-1.p\nP2.p F -\nQ1.p F\n";
        let counted = builder.add_strategy(&log("s1", body)).unwrap();
        let (matrix, _) = builder.finish();
        assert_eq!(counted, 1);
        assert_eq!(matrix.outcome("CLASS_A", "s1"), Outcome::new(1, 1.0));
        assert_eq!(matrix.global("s1"), Outcome::new(1, 1.0));
    }

    #[test]
    fn test_malformed_counted_line_is_fatal() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        let err = builder
            .add_strategy(&log("s1", "P1.p T 1.0\nP2.p T n/a\n"))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }));

        let err = builder.add_strategy(&log("s2", "Q1.p T\n")).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 1, .. }));

        let err = builder.add_strategy(&log("s3", "P1.p\n")).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_class_optimum_is_max_over_strategies() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        builder.add_strategy(&log("s1", "P1.p T 1.0\n")).unwrap();
        builder.add_strategy(&log("s2", "P1.p T 1.0\nP2.p T 1.0\n")).unwrap();
        let (matrix, _) = builder.finish();
        assert_eq!(matrix.optimum("CLASS_A"), 2);
        assert_eq!(matrix.optimum("CLASS_B"), 0);
        assert_eq!(matrix.total_optimum(), 2);
        assert_eq!(matrix.class_size("CLASS_A"), 2);
    }

    #[test]
    fn test_repeated_strategy_replaces_earlier_protocol() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        builder.add_strategy(&log("s1", "P1.p T 1.0\nP2.p T 1.0\n")).unwrap();
        builder.add_strategy(&log("s1", "Q1.p T 4.0\n")).unwrap();
        let (matrix, _) = builder.finish();
        assert_eq!(matrix.outcome("CLASS_A", "s1"), Outcome::ZERO);
        assert_eq!(matrix.outcome("CLASS_B", "s1"), Outcome::new(1, 4.0));
        assert_eq!(matrix.global("s1"), Outcome::new(1, 4.0));
    }

    #[test]
    fn test_global_order_ranks_by_solved_then_time_then_name() {
        let mut builder = MatrixBuilder::new(assignment(), SuccessCodes::Both);
        builder.add_strategy(&log("slow", "P1.p T 9.0\nP2.p T 9.0\n")).unwrap();
        builder.add_strategy(&log("fast", "P1.p T 1.0\nP2.p T 1.0\n")).unwrap();
        builder.add_strategy(&log("b_one", "Q1.p T 1.0\n")).unwrap();
        builder.add_strategy(&log("a_one", "Q1.p T 1.0\n")).unwrap();
        let (matrix, _) = builder.finish();
        assert_eq!(matrix.global_order(), vec!["fast", "slow", "a_one", "b_one"]);
    }
}
