//! Strategy descriptions: the command line a protocol was produced with.
//!
//! The description is re-emitted in generated code as three pieces:
//! the heuristic definition (`-H'(...)'`), the proof control settings and
//! the term ordering settings.

use std::sync::LazyLock;

use regex::Regex;

use super::codes::{
    AcHandling, LiteralSelection, PrecedenceGeneration, TermOrdering, UnprocessedSimplify,
    WeightGeneration,
};
use super::options::OptionWords;
use crate::error::{Error, Result};

static HEURISTIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-H'?\([^#]*\)'?").expect("invalid regex"));

static NAME_NOISE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p[^_]*_").expect("invalid regex"));

/// Default SInE argument when `--sine` is given without one.
pub const SINE_DEFAULT: &str = "Auto";

/// Name of a strategy as it appears in generated code.
///
/// Protocol prefixes (`protokoll_`, `pXYZ_`) are dropped, dashes become
/// underscores and a `.csv` suffix is removed.
pub fn display_name(strategy: &str) -> String {
    NAME_NOISE_PATTERN
        .replace_all(strategy, "")
        .replace('-', "_")
        .replace(".csv", "")
}

/// Paramodulation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paramodulation {
    Simultaneous,
    OrientedSimultaneous,
    SuperSimultaneous,
}

impl Paramodulation {
    pub fn c_ident(&self) -> &'static str {
        match self {
            Self::Simultaneous => "ParamodSim",
            Self::OrientedSimultaneous => "ParamodOrientedSim",
            Self::SuperSimultaneous => "ParamodSuperSim",
        }
    }
}

/// Proof control settings carried by a description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSettings {
    pub literal_selection: Option<LiteralSelection>,
    pub ac_handling: Option<AcHandling>,
    pub ac_non_aggressive: bool,
    pub unprocessed_simplify: Option<UnprocessedSimplify>,
    pub forward_demod: Option<u32>,
    pub paramodulation: Option<Paramodulation>,
    pub split_clauses: Option<u32>,
    pub split_method: Option<u32>,
    pub split_aggressive: bool,
    pub split_reuse_defs: bool,
    pub destructive_er: bool,
    pub strong_destructive_er: bool,
    pub destructive_er_aggressive: bool,
    pub forward_context_sr: bool,
    pub forward_context_sr_aggressive: bool,
    pub backward_context_sr: bool,
    pub select_on_processing_only: bool,
    pub inherit_paramod_literals: bool,
    pub inherit_goal_pm_literals: bool,
    pub inherit_conjecture_pm_literals: bool,
    pub prefer_initial_clauses: bool,
    pub prefer_general_demodulators: bool,
    pub presat_simplify: bool,
    pub condense: bool,
    pub sos_uses_input_types: bool,
}

impl ControlSettings {
    fn parse(words: &OptionWords<'_>) -> Result<Self> {
        let paramodulation = if words.flag(&["--supersimul-paramod"]) {
            Some(Paramodulation::SuperSimultaneous)
        } else if words.flag(&["--oriented-simul-paramod"]) {
            Some(Paramodulation::OrientedSimultaneous)
        } else if words.flag(&["--simul-paramod"]) {
            Some(Paramodulation::Simultaneous)
        } else {
            None
        };

        Ok(Self {
            literal_selection: words.code(Some("-W"), "--literal-selection-strategy=")?,
            ac_handling: words.code(None, "--ac-handling=")?,
            ac_non_aggressive: words.flag(&["--ac-non-aggressive"]),
            unprocessed_simplify: words.code(None, "--simplify-with-unprocessed-units=")?,
            forward_demod: words.parsed(Some("-F"), "--forward-demod-level=")?,
            paramodulation,
            split_clauses: words.parsed(None, "--split-clauses=")?,
            split_method: words.parsed(None, "--split-method=")?,
            split_aggressive: words.flag(&["--split-aggressive"]),
            split_reuse_defs: words.flag(&["--split-reuse-defs"]),
            destructive_er: words.flag(&["--destructive-er"]),
            strong_destructive_er: words.flag(&["--strong-destructive-er"]),
            destructive_er_aggressive: words.flag(&["--destructive-er-aggressive"]),
            forward_context_sr: words.flag(&["--forward-context-sr"]),
            forward_context_sr_aggressive: words.flag(&["--forward-context-sr-aggressive"]),
            backward_context_sr: words.flag(&["--backward-context-sr"]),
            select_on_processing_only: words.flag(&["--select-on-processing-only"]),
            inherit_paramod_literals: words.flag(&["-i", "--inherit-paramod-literals"]),
            inherit_goal_pm_literals: words.flag(&["-j", "--inherit-goal-pm-literals"]),
            inherit_conjecture_pm_literals: words.flag(&["--inherit-conjecture-pm-literals"]),
            prefer_initial_clauses: words.flag(&["--prefer-initial-clauses"]),
            prefer_general_demodulators: words.flag(&["-g", "--prefer-general-demodulators"]),
            presat_simplify: words.flag(&["--presat-simplify"]),
            condense: words.flag(&["--condense"]),
            sos_uses_input_types: words.flag(&["--sos-uses-input-types"]),
        })
    }

    /// `(field, value)` assignments in emission order.
    pub fn assignments(&self) -> Vec<(&'static str, String)> {
        let mut out: Vec<(&'static str, String)> = Vec::new();
        let mut set = |field: &'static str, value: String| out.push((field, value));

        if let Some(selection) = self.literal_selection {
            set("selection_strategy", selection.c_ident().to_string());
        }
        if self.select_on_processing_only {
            set("select_on_proc_only", "true".into());
        }
        if self.inherit_paramod_literals {
            set("inherit_paramod_lit", "true".into());
        }
        if self.inherit_goal_pm_literals {
            set("inherit_goal_pm_lit", "true".into());
        }
        if self.inherit_conjecture_pm_literals {
            set("inherit_conj_pm_lit", "true".into());
        }
        if let Some(ac) = self.ac_handling {
            set("ac_handling", ac.c_ident().to_string());
        }
        if self.ac_non_aggressive {
            set("ac_res_aggressive", "false".into());
        }
        if let Some(level) = self.forward_demod {
            set("forward_demod", level.to_string());
        }
        if self.prefer_general_demodulators {
            set("prefer_general", "true".into());
        }
        if let Some(simplify) = self.unprocessed_simplify {
            set("unproc_simplify", simplify.c_ident().to_string());
        }
        if let Some(pm) = self.paramodulation {
            set("pm_type", pm.c_ident().to_string());
        }
        if self.prefer_initial_clauses {
            set("prefer_initial_clauses", "true".into());
        }
        if let Some(split) = self.split_clauses {
            set("split_clauses", split.to_string());
        }
        if let Some(method) = self.split_method {
            set("split_method", method.to_string());
        }
        if self.split_aggressive {
            set("split_aggressive", "true".into());
        }
        if self.split_reuse_defs {
            set("split_fresh_defs", "false".into());
        }
        if self.destructive_er || self.strong_destructive_er {
            set("er_varlit_destructive", "true".into());
        }
        if self.strong_destructive_er {
            set("er_strong_destructive", "true".into());
        }
        if self.destructive_er_aggressive {
            set("er_aggressive", "true".into());
        }
        if self.forward_context_sr || self.forward_context_sr_aggressive {
            set("forward_context_sr", "true".into());
        }
        if self.forward_context_sr_aggressive {
            set("forward_context_sr_aggressive", "true".into());
        }
        if self.backward_context_sr {
            set("backward_context_sr", "true".into());
        }
        if self.presat_simplify {
            set("presat_interreduction", "true".into());
        }
        if self.condense {
            set("condensing", "true".into());
        }
        if self.sos_uses_input_types {
            set("use_tptp_sos", "true".into());
        }
        out
    }
}

/// Term ordering settings carried by a description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingSettings {
    pub ordering: Option<TermOrdering>,
    pub weight_generation: Option<WeightGeneration>,
    pub precedence_generation: Option<PrecedenceGeneration>,
    pub constant_weight: Option<i64>,
}

impl OrderingSettings {
    fn parse(words: &OptionWords<'_>) -> Result<Self> {
        Ok(Self {
            ordering: words.code(Some("-t"), "--term-ordering=")?,
            weight_generation: words.code(Some("-w"), "--order-weight-generation=")?,
            precedence_generation: words.code(Some("-G"), "--order-precedence-generation=")?,
            constant_weight: words.parsed(Some("-c"), "--order-constant-weight=")?,
        })
    }

    /// `(field, value)` assignments in emission order.
    pub fn assignments(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(ordering) = self.ordering {
            out.push(("ordertype", ordering.c_ident().to_string()));
        }
        if let Some(weights) = self.weight_generation {
            out.push(("to_weight_gen", weights.c_ident().to_string()));
        }
        if let Some(precedence) = self.precedence_generation {
            out.push(("to_prec_gen", precedence.c_ident().to_string()));
        }
        if let Some(weight) = self.constant_weight {
            out.push(("to_const_weight", weight.to_string()));
        }
        out
    }
}

/// A named strategy description.
#[derive(Debug, Clone, Copy)]
pub struct StrategyDescription<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

impl<'a> StrategyDescription<'a> {
    pub fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Name as it appears in generated code.
    pub fn display_name(&self) -> String {
        display_name(self.name)
    }

    /// The `-H'(...)'` argument without quotes.
    pub fn heuristic(&self) -> Result<String> {
        let found = HEURISTIC_PATTERN
            .find(self.text)
            .ok_or_else(|| Error::MissingHeuristic {
                strategy: self.name.to_string(),
            })?;
        Ok(found.as_str()[2..].replace('\'', ""))
    }

    /// Heuristic definition as C string literal lines.
    ///
    /// ```text
    /// "G_E___008 = \n"
    /// "(1*Clauseweight(PreferProcessed,1,1,1),"
    /// " 1*FIFOWeight(PreferProcessed))\n"
    /// ```
    pub fn heuristic_definition(&self) -> Result<String> {
        let heuristic = self.heuristic()?;
        let body: String = heuristic
            .split_whitespace()
            .collect::<String>()
            .replace("),", "),\"\n\" ");
        Ok(format!(
            "\"{} = \\n\"\n\"{}\\n\"",
            self.display_name(),
            body
        ))
    }

    /// Proof control settings.
    pub fn control(&self) -> Result<ControlSettings> {
        ControlSettings::parse(&OptionWords::new(self.text))
    }

    /// Term ordering settings.
    pub fn ordering(&self) -> Result<OrderingSettings> {
        OrderingSettings::parse(&OptionWords::new(self.text))
    }

    /// SInE argument: `--sine=<arg>`, or [`SINE_DEFAULT`] for a bare `--sine`.
    pub fn sine(&self) -> Result<Option<String>> {
        let words = OptionWords::new(self.text);
        if let Some(arg) = words.value(None, "--sine=")? {
            return Ok(Some(arg.to_string()));
        }
        Ok(words.flag(&["--sine"]).then(|| SINE_DEFAULT.to_string()))
    }
}
