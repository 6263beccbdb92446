//! Rendering of the final assignment.
//!
//! Three renderers share one [`Emitter`]:
//!
//! - **Full** (`full.rs`): conditional dispatch code with heuristic
//!   definitions, control and ordering settings per strategy group
//! - **Raw** (`raw.rs`): `raw_class[]` and `raw_sine[]` tables
//! - **Json** (`json.rs`): a [`JsonReport`] for downstream tooling
//!
//! Output is rendered into a `String`; callers print it only once rendering
//! has succeeded.

mod full;
mod json;
mod raw;

pub use json::{ClassReport, JsonReport};

use crate::config::OutputMode;
use crate::error::{Error, Result};
use crate::heuristic::StrategyDescription;
use crate::matrix::PerformanceMatrix;
use crate::selection::Selection;

const RULE: &str = "/* -------------------------------------------------------*/";
const BANNER_WIDTH: usize = 55;

/// Renders a [`Selection`] over the matrix it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    matrix: &'a PerformanceMatrix,
    selection: &'a Selection,
    class_dir: &'a str,
}

impl<'a> Emitter<'a> {
    pub fn new(matrix: &'a PerformanceMatrix, selection: &'a Selection, class_dir: &'a str) -> Self {
        Self {
            matrix,
            selection,
            class_dir,
        }
    }

    /// Render the selection in the given mode.
    pub fn render(&self, mode: OutputMode) -> Result<String> {
        match mode {
            OutputMode::Full => full::render(self),
            OutputMode::Raw => raw::render(self),
            OutputMode::Json => json::render(self),
        }
    }

    fn default_strategy(&self) -> Result<&'a str> {
        self.selection
            .default_strategy()
            .ok_or_else(|| Error::MissingInput("no strategy was selected".to_string()))
    }

    fn description(&self, strategy: &'a str) -> StrategyDescription<'a> {
        StrategyDescription::new(strategy, self.matrix.description(strategy))
    }

    /// Banner, class dir and one line per class with its strategy and optimum.
    fn header(&self) -> String {
        let mut out = String::from("\n");
        out.push_str(&banner(&[
            "The following code is generated automatically with",
            "generate-auto. Do not edit by hand.",
        ]));
        out.push_str(&format!("\n/* Class dir used: {} */\n\n\n", self.class_dir));

        for (class, strategy) in self.selection.assignment() {
            out.push_str(&format!(
                "/* {:<17} : {:<30} {:<4} */\n",
                class,
                strategy,
                self.matrix.optimum(class)
            ));
        }
        out
    }
}

fn banner(lines: &[&str]) -> String {
    let mut out = format!("{}\n", RULE);
    for line in lines {
        out.push_str(&format!("/* {:<width$}*/\n", line, width = BANNER_WIDTH));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}
