//! Class file ingestion.
//!
//! A class file lists one problem per line. Its name (`CLASS_<signature>`)
//! is the class identifier; the problems it lists are mapped to that class
//! by their stem, the problem name without its file extension.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Prefix every class name starts with.
pub const CLASS_PREFIX: &str = "CLASS_";

static CLASS_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CLASS_[A-Za-z0-9-]*$").expect("invalid regex"));

static PROBLEM_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(p|tptp|lop|cnf|fof|tff|thf|smt2|e)$").expect("invalid regex")
});

/// Strip the problem extension from a problem name.
pub fn problem_stem(name: &str) -> Result<&str> {
    PROBLEM_EXTENSION
        .find(name)
        .map(|m| &name[..m.start()])
        .ok_or_else(|| Error::MissingStem {
            name: name.to_string(),
        })
}

/// Split a path into (class dir, class name) if it names a class file.
pub fn class_file_name(path: &str) -> Option<(&str, &str)> {
    CLASS_NAME_PATTERN
        .find(path)
        .map(|m| (&path[..m.start()], m.as_str()))
}

/// Mapping from problem stem to class, plus the size of every class.
#[derive(Debug, Clone, Default)]
pub struct ClassAssignment {
    problems: HashMap<String, String>,
    sizes: BTreeMap<String, usize>,
    class_dir: String,
}

impl ClassAssignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a class file. The class name is taken from the path.
    pub fn add_class_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let shown = path.to_string_lossy();
        let (dir, name) = class_file_name(&shown)
            .ok_or_else(|| Error::MissingInput(format!("'{}' is not a class file", shown)))?;
        info!("Parsing {} as {}", shown, name);

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.class_dir = dir.to_string();
        self.add_class(name, &content)
    }

    /// Register a class from the text of its class file. Returns the class size.
    pub fn add_class(&mut self, class: &str, content: &str) -> Result<usize> {
        let mut size = 0;
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let stem = problem_stem(line)?;
            if let Some(previous) = self.problems.insert(stem.to_string(), class.to_string()) {
                if previous != class {
                    debug!("Problem {} moved from {} to {}", stem, previous, class);
                }
            }
            size += 1;
        }
        self.sizes.insert(class.to_string(), size);
        Ok(size)
    }

    /// Class a problem stem belongs to.
    pub fn class_of(&self, stem: &str) -> Option<&str> {
        self.problems.get(stem).map(String::as_str)
    }

    /// Class names with their sizes, in name order.
    pub fn sizes(&self) -> &BTreeMap<String, usize> {
        &self.sizes
    }

    /// Number of known classes.
    pub fn class_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of known problems.
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }

    /// Directory prefix of the last class file read.
    pub fn class_dir(&self) -> &str {
        &self.class_dir
    }
}
