//! generate-auto
//!
//! Selects a proof strategy per problem class from benchmark protocols and
//! prints the dispatch code on stdout.
//!
//! ```text
//! generate-auto [--proofs|--models] [--raw|--json] [--local] CLASS_* protocol_*
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use strategy_autogen::{
    Generator, GeneratorConfig, OutputMode, SelectionPolicy, SuccessCodes,
    DEFAULT_LARGE_CLASS_LIMIT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate-auto")]
#[command(about = "Generate per-class strategy dispatch code from benchmark protocols")]
#[command(version)]
struct Cli {
    /// Count only found proofs as solutions
    #[arg(long, overrides_with = "models")]
    proofs: bool,

    /// Count only found models as solutions
    #[arg(long, overrides_with = "proofs")]
    models: bool,

    /// Print raw class/strategy tables instead of dispatch code
    #[arg(long, conflicts_with = "json")]
    raw: bool,

    /// Print a JSON report instead of dispatch code
    #[arg(long)]
    json: bool,

    /// Re-rank strategies against the remaining classes in every round
    #[arg(long)]
    local: bool,

    /// Refine classes larger than this on their own (0 or less disables)
    #[arg(long, default_value_t = DEFAULT_LARGE_CLASS_LIMIT, allow_negative_numbers = true)]
    large_class_limit: i64,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Class files (CLASS_*) and protocol files
    files: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let success_codes = if self.proofs {
            SuccessCodes::ProofsOnly
        } else if self.models {
            SuccessCodes::ModelsOnly
        } else {
            SuccessCodes::Both
        };
        let policy = if self.local {
            SelectionPolicy::LocalOptimality
        } else {
            SelectionPolicy::GlobalPerformance
        };
        let output = if self.raw {
            OutputMode::Raw
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Full
        };

        GeneratorConfig::new()
            .with_success_codes(success_codes)
            .with_policy(policy)
            .with_large_class_limit(self.large_class_limit)
            .with_output(output)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = Generator::new(cli.config())
        .generate(&cli.files)
        .context("strategy generation failed")?;

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write generated code")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("generate-auto").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["CLASS_F", "prot"]);
        assert_eq!(cli.config(), GeneratorConfig::default());
        assert_eq!(cli.files, vec![PathBuf::from("CLASS_F"), PathBuf::from("prot")]);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_last_success_code_option_wins() {
        let cli = parse(&["--proofs", "--models", "x"]);
        assert_eq!(cli.config().success_codes, SuccessCodes::ModelsOnly);
        let cli = parse(&["--models", "--proofs", "x"]);
        assert_eq!(cli.config().success_codes, SuccessCodes::ProofsOnly);
    }

    #[test]
    fn test_flags_map_onto_config() {
        let cli = parse(&["--local", "--raw", "--large-class-limit", "-1", "-vv", "x"]);
        let config = cli.config();
        assert_eq!(config.policy, SelectionPolicy::LocalOptimality);
        assert_eq!(config.output, OutputMode::Raw);
        assert_eq!(config.large_class_limit, -1);
        assert_eq!(cli.log_level(), "trace");
        assert_eq!(parse(&["--json", "x"]).config().output, OutputMode::Json);
    }

    #[test]
    fn test_unknown_and_conflicting_options_are_rejected() {
        assert!(Cli::try_parse_from(["generate-auto", "--lcoal", "x"]).is_err());
        assert!(Cli::try_parse_from(["generate-auto", "--raw", "--json", "x"]).is_err());
    }
}
