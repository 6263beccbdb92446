//! End-to-end generator run.
//!
//! Inputs are sorted into class files and protocols, the matrix is built,
//! the greedy pass and optional refinement run, and the result is rendered.
//! Every step either succeeds completely or aborts the run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{GeneratorConfig, OutputMode};
use crate::emit::Emitter;
use crate::error::{Error, Result};
use crate::ingest::{class_file_name, ClassAssignment, StrategyLog};
use crate::matrix::{MatrixBuilder, PerformanceMatrix};
use crate::selection::{GreedySelector, LargeClassRefiner, Selection};

/// Input paths split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub class_files: Vec<PathBuf>,
    pub protocols: Vec<PathBuf>,
}

impl Inputs {
    /// Sort paths: a final segment `CLASS_...` is a class file, anything else a protocol.
    pub fn classify<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut inputs = Self::default();
        for path in paths {
            let path = path.as_ref();
            if class_file_name(&path.to_string_lossy()).is_some() {
                inputs.class_files.push(path.to_path_buf());
            } else {
                inputs.protocols.push(path.to_path_buf());
            }
        }
        inputs
    }

    /// Both kinds of input must be present.
    pub fn validate(&self) -> Result<()> {
        if self.class_files.is_empty() {
            return Err(Error::MissingInput("no class files given".to_string()));
        }
        if self.protocols.is_empty() {
            return Err(Error::MissingInput("no protocol files given".to_string()));
        }
        Ok(())
    }
}

/// Result of a run, ready to render.
#[derive(Debug, Clone)]
pub struct Run {
    pub matrix: PerformanceMatrix,
    pub selection: Selection,
    pub class_dir: String,
}

impl Run {
    /// Render the selection in the given mode.
    pub fn render(&self, mode: OutputMode) -> Result<String> {
        Emitter::new(&self.matrix, &self.selection, &self.class_dir).render(mode)
    }
}

/// Runs the generator with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run on the given paths and render with the configured output mode.
    pub fn generate<I, P>(&self, paths: I) -> Result<String>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.run(&Inputs::classify(paths))?.render(self.config.output)
    }

    /// Ingest, select and refine.
    pub fn run(&self, inputs: &Inputs) -> Result<Run> {
        inputs.validate()?;
        let (matrix, assignment) = self.build_matrix(inputs)?;

        info!(
            classes = matrix.class_count(),
            strategies = matrix.strategy_count(),
            "Parsing done, running optimizer"
        );
        let selection = self.select(&matrix)?;
        info!(
            used = selection.used().len(),
            total = matrix.total_optimum(),
            "Selection complete"
        );

        Ok(Run {
            matrix,
            selection,
            class_dir: assignment.class_dir().to_string(),
        })
    }

    /// Read every input and assemble the performance matrix.
    pub fn build_matrix(&self, inputs: &Inputs) -> Result<(PerformanceMatrix, ClassAssignment)> {
        let mut assignment = ClassAssignment::new();
        for path in &inputs.class_files {
            let size = assignment.add_class_file(path)?;
            debug!(path = %path.display(), size, "Class file read");
        }

        let mut builder = MatrixBuilder::new(assignment, self.config.success_codes);
        let mut seen = HashSet::new();
        for path in &inputs.protocols {
            let log = StrategyLog::read(path)?;
            if !seen.insert(log.name.clone()) {
                warn!(strategy = %log.name, path = %path.display(), "Duplicate strategy name");
            }
            let counted = builder.add_strategy(&log)?;
            debug!(strategy = %log.name, counted, "Protocol read");
        }
        Ok(builder.finish())
    }

    /// Greedy pass followed by large class refinement, if enabled.
    pub fn select(&self, matrix: &PerformanceMatrix) -> Result<Selection> {
        let mut selection = GreedySelector::new(matrix, self.config.policy).select()?;
        if let Some(refiner) = LargeClassRefiner::from_limit(matrix, self.config.large_class_limit) {
            let changed = refiner.refine(&mut selection);
            debug!(changed, "Large class refinement done");
        }
        Ok(selection)
    }
}
