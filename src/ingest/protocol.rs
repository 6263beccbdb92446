//! Protocol (benchmark log) ingestion.
//!
//! A protocol file records one strategy's run over a problem set. Lines
//! starting with `#` carry the strategy description (the command line that
//! produced the run); every other line is a result:
//!
//! ```text
//! # eprover --auto-schedule ... -H'(1*FIFOWeight(ConstPrio))'
//! ALG001-1.p  T  0.012  ...
//! ALG002-1.p  F  300.0  ...
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::ingest::classification::problem_stem;

/// Marker that starts a description line.
pub const COMMENT_MARKER: char = '#';

const LINE_SHAPE: &str = "expected '<problem> <status> <time>'";

/// One result line of a protocol.
///
/// Status and time are kept as reported. They are only checked once the
/// line turns out to count, so noise on lines for unclassified problems or
/// failed runs is harmless.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLine {
    /// Line number in the protocol, starting at 1
    pub line: usize,
    /// Problem stem
    pub problem: String,
    /// Status code as reported (e.g. `T`, `N`, `F`)
    pub status: Option<String>,
    /// Reported run time text
    pub time: Option<String>,
}

impl ResultLine {
    /// Status code of a counted line.
    pub fn status(&self, origin: &str) -> Result<&str> {
        self.status
            .as_deref()
            .ok_or_else(|| Error::malformed(origin, self.line, LINE_SHAPE))
    }

    /// Run time in seconds of a counted line; must be finite and non-negative.
    pub fn seconds(&self, origin: &str) -> Result<f64> {
        let text = self
            .time
            .as_deref()
            .ok_or_else(|| Error::malformed(origin, self.line, LINE_SHAPE))?;
        text.parse()
            .ok()
            .filter(|t: &f64| t.is_finite() && *t >= 0.0)
            .ok_or_else(|| Error::malformed(origin, self.line, format!("invalid time '{}'", text)))
    }
}

/// A parsed protocol: strategy name, description and result lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyLog {
    pub name: String,
    pub description: String,
    pub results: Vec<ResultLine>,
}

impl StrategyLog {
    /// Parse protocol text for the named strategy.
    pub fn parse(name: impl Into<String>, content: &str) -> Result<Self> {
        let name = name.into();
        let mut description = String::new();
        let mut results = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.starts_with(COMMENT_MARKER) {
                description.push_str(line);
                description.push('\n');
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(problem) = fields.next() else {
                continue;
            };
            results.push(ResultLine {
                line: index + 1,
                problem: problem_stem(problem)?.to_string(),
                status: fields.next().map(str::to_string),
                time: fields.next().map(str::to_string),
            });
        }

        Ok(Self {
            name,
            description,
            results,
        })
    }

    /// Read a protocol file; the strategy name is the file name.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(strategy_name(path), &content)
    }
}

/// Strategy name for a protocol path: its final segment.
pub fn strategy_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROTOCOL: &str = "\
# eprover -tKBO6 -H'(1*FIFOWeight(ConstPrio))'
# second line
ALG001-1.p T 0.5 extra fields
ALG002-1.p F 300.0

ALG003-1.p N 1.25
";

    #[test]
    fn test_parse_collects_description_and_results() {
        let log = StrategyLog::parse("protokoll_X", PROTOCOL).unwrap();
        assert_eq!(
            log.description,
            "# eprover -tKBO6 -H'(1*FIFOWeight(ConstPrio))'\n# second line\n"
        );
        assert_eq!(log.results.len(), 3);
        assert_eq!(
            log.results[0],
            ResultLine {
                line: 3,
                problem: "ALG001-1".to_string(),
                status: Some("T".to_string()),
                time: Some("0.5".to_string()),
            }
        );
        assert_eq!(log.results[2].line, 6);
        assert_eq!(log.results[2].status("p").unwrap(), "N");
        assert_eq!(log.results[2].seconds("p").unwrap(), 1.25);
    }

    #[test]
    fn test_parse_keeps_incomplete_lines() {
        let log = StrategyLog::parse("s", "ALG001-1.p T\nALG002-1.p\nALG003-1.p F -\n").unwrap();
        assert_eq!(log.results.len(), 3);
        assert_eq!(log.results[0].time, None);
        assert_eq!(log.results[1].status, None);
        assert_eq!(log.results[2].time.as_deref(), Some("-"));
    }

    #[test]
    fn test_short_line_has_no_time() {
        let log = StrategyLog::parse("s", "ALG001-1.p T\n").unwrap();
        let err = log.results[0].seconds("s").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 1, .. }));
        let log = StrategyLog::parse("s", "ALG001-1.p\n").unwrap();
        assert!(matches!(
            log.results[0].status("s"),
            Err(Error::MalformedInput { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_time_is_rejected() {
        let log = StrategyLog::parse("s", "ALG001-1.p T fast\nALG002-1.p T -1.0\nALG003-1.p T inf\n").unwrap();
        for result in &log.results {
            assert!(result.seconds("s").is_err());
        }
    }

    #[test]
    fn test_parse_rejects_problem_without_extension() {
        let err = StrategyLog::parse("s", "ALG001-1 T 1.0\n").unwrap_err();
        assert!(matches!(err, Error::MissingStem { .. }));
    }

    #[test]
    fn test_strategy_name_is_file_name() {
        assert_eq!(
            strategy_name(Path::new("/runs/protokoll_G-E--_008.csv")),
            "protokoll_G-E--_008.csv"
        );
    }
}
