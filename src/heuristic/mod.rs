//! Prover option tables and strategy description parsing.
//!
//! A protocol's description line is the command line the strategy ran
//! with. This module recovers from it what the generated code needs:
//!
//! - the `-H` heuristic definition, re-emitted as C string literals
//! - proof control settings (`control->heuristic_parms.*`)
//! - term ordering settings (`oparms.*`)
//! - the SInE argument, for raw output
//!
//! Option codes are closed tables; an unknown code is an error rather
//! than being passed through to the generated source.
//!
//! ## Example
//!
//! ```rust,ignore
//! use strategy_autogen::heuristic::StrategyDescription;
//!
//! let description = StrategyDescription::new(name, &log.description);
//! println!("{}", description.heuristic_definition()?);
//! for (field, value) in description.ordering()?.assignments() {
//!     println!("oparms.{}={};", field, value);
//! }
//! ```

mod codes;
mod description;
mod options;

pub use codes::{
    AcHandling, LiteralSelection, PrecedenceGeneration, TermOrdering, UnprocessedSimplify,
    WeightGeneration,
};
pub use description::{
    display_name, ControlSettings, OrderingSettings, Paramodulation, StrategyDescription,
    SINE_DEFAULT,
};
