//! Full dispatch code.

use super::{banner, Emitter};
use crate::error::Result;
use crate::heuristic::StrategyDescription;
use crate::signature::ClassSignature;

const TERM_INDENT: &str = "       ";

pub(super) fn render(emitter: &Emitter<'_>) -> Result<String> {
    let default = emitter.default_strategy()?;
    let groups = emitter.selection.groups();
    let mut out = emitter.header();

    out.push_str("\n#ifdef CHE_PROOFCONTROL_INTERNAL\n\n");
    out.push_str("/* Strategies used:                                       */\n\n\n");
    for (strategy, _) in &groups {
        out.push_str(&emitter.description(*strategy).heuristic_definition()?);
        out.push('\n');
    }
    if groups.iter().any(|(strategy, _)| *strategy == default) {
        out.push_str(&format!("/* Global best, {}, already defined */\n", default));
    } else {
        out.push_str("/* Global best (used as a default): */\n");
        out.push_str(&emitter.description(default).heuristic_definition()?);
        out.push('\n');
    }
    out.push_str("#endif\n\n");

    out.push_str("#if defined(CHE_HEURISTICS_INTERNAL) || defined(TO_ORDERING_INTERNAL)\n\n");
    for (strategy, classes) in &groups {
        let terms = classes
            .iter()
            .map(|class| class_term(emitter, class, strategy))
            .collect::<Result<Vec<_>>>()?;
        out.push_str("   else if(\n");
        out.push_str(&terms.join(&format!("\n{}||\n", TERM_INDENT)));
        out.push_str(")\n");
        push_branch(&mut out, &emitter.description(*strategy))?;
    }
    out.push_str("   else /* Default */\n");
    push_branch(&mut out, &emitter.description(default))?;
    out.push_str("#endif\n\n");

    out.push_str(&format!(
        "/* Total solutions on test set: {} */\n",
        emitter.matrix.total_optimum()
    ));
    out.push_str(&banner(&["    End of automatically generated code."]));
    Ok(out)
}

/// Conjunction of the class's feature predicates, annotated with its score.
fn class_term(emitter: &Emitter<'_>, class: &str, strategy: &str) -> Result<String> {
    let signature = ClassSignature::parse(class)?;
    let mut term = format!(
        "      ( /* {} Solved: {} of {} */\n{}",
        class,
        emitter.matrix.outcome(class, strategy).solved,
        emitter.matrix.class_size(class),
        TERM_INDENT
    );

    if signature.is_unconstrained() {
        term.push_str("true");
    } else {
        let predicates: Vec<String> = signature.features().iter().map(|f| f.to_string()).collect();
        term.push_str(&predicates.join(&format!("&&\n{}", TERM_INDENT)));
    }
    term.push(')');
    Ok(term)
}

fn push_branch(out: &mut String, description: &StrategyDescription<'_>) -> Result<()> {
    out.push_str("   {\n#ifdef CHE_HEURISTICS_INTERNAL\n");
    out.push_str(&format!("      res = \"{}\";\n", description.display_name()));
    for (field, value) in description.control()?.assignments() {
        out.push_str(&format!("      control->heuristic_parms.{}={};\n", field, value));
    }
    out.push_str("#endif\n#ifdef TO_ORDERING_INTERNAL\n");
    for (field, value) in description.ordering()?.assignments() {
        out.push_str(&format!("      oparms.{}={};\n", field, value));
    }
    out.push_str("#endif\n   }\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputMode, SelectionPolicy};
    use crate::error::Error;
    use crate::selection::{test_matrix, GreedySelector, LargeClassRefiner, Selection};
    use pretty_assertions::assert_eq;

    const FAST: &str = "\
# eprover -tKBO6 -WSelectComplexExceptUniqMaxHorn -H'(1*Clauseweight(ConstPrio,1,1,1),1*FIFOWeight(ConstPrio))'
a.p T 1
b.p T 1
";
    const SLOW: &str = "\
# eprover -tLPO4 --prefer-initial-clauses -H'(1*FIFOWeight(ConstPrio))'
c.p T 5
";

    fn render(selection: &Selection, matrix: &crate::matrix::PerformanceMatrix) -> String {
        Emitter::new(matrix, selection, "cls/")
            .render(OutputMode::Full)
            .unwrap()
    }

    #[test]
    fn test_full_output_dispatches_each_group() {
        let matrix = test_matrix(
            &[("CLASS_FU", "a.p\nb.p\n"), ("CLASS_HG", "c.p\n")],
            &[("fast", FAST), ("slow", SLOW)],
        );
        let selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        let out = render(&selection, &matrix);

        assert!(out.contains("\"fast = \\n\"\n\"(1*Clauseweight(ConstPrio,1,1,1),\"\n\" 1*FIFOWeight(ConstPrio))\\n\""));
        assert!(out.contains("/* Global best, fast, already defined */"));
        assert!(out.contains(
            "   else if(\n      ( /* CLASS_FU Solved: 2 of 2 */\n       SpecIsFO(spec)&&\n       SpecAxiomsAreUnit(spec)))\n"
        ));
        assert!(out.contains(
            "      res = \"fast\";\n      control->heuristic_parms.selection_strategy=SelectComplexExceptUniqMaxHorn;\n#endif\n#ifdef TO_ORDERING_INTERNAL\n      oparms.ordertype=KBO6;\n#endif\n   }\n"
        ));
        assert!(out.contains("control->heuristic_parms.prefer_initial_clauses=true;"));
        assert!(out.contains("   else /* Default */\n   {\n#ifdef CHE_HEURISTICS_INTERNAL\n      res = \"fast\";"));
        assert!(out.contains("/* Total solutions on test set: 3 */"));
    }

    #[test]
    fn test_classes_of_one_group_are_joined_by_disjunction() {
        let matrix = test_matrix(
            &[("CLASS_F", "a.p\n"), ("CLASS_H", "b.p\n")],
            &[("fast", FAST)],
        );
        let selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        let out = render(&selection, &matrix);

        let expected = "\
   else if(
      ( /* CLASS_F Solved: 1 of 1 */
       SpecIsFO(spec))
       ||
      ( /* CLASS_H Solved: 1 of 1 */
       SpecIsHO(spec)))
";
        assert!(out.contains(expected), "{}", out);
    }

    #[test]
    fn test_unused_default_is_still_defined() {
        let matrix = test_matrix(
            &[("CLASS_F", "a.p\nb.p\n"), ("CLASS_H", "c.p\nd.p\ne.p\n")],
            &[
                ("fast", "# -H'(1*FIFOWeight(ConstPrio))'\na.p T 1\nb.p T 1\nc.p T 1\nd.p T 1\n"),
                ("slow", "# -H'(2*FIFOWeight(ConstPrio))'\nc.p T 9\nd.p T 9\ne.p T 9\n"),
            ],
        );
        let mut selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        assert_eq!(selection.default_strategy(), Some("fast"));

        // Move the only class of the default strategy elsewhere.
        selection.assign("CLASS_F", "slow");
        let out = render(&selection, &matrix);

        assert!(out.contains("/* Global best (used as a default): */\n\"fast = \\n\""));
        assert!(out.contains("   else /* Default */\n   {\n#ifdef CHE_HEURISTICS_INTERNAL\n      res = \"fast\";"));
    }

    #[test]
    fn test_unconstrained_class_matches_everything() {
        let matrix = test_matrix(&[("CLASS_--", "a.p\n")], &[("fast", FAST)]);
        let selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        assert!(render(&selection, &matrix).contains("( /* CLASS_-- Solved: 1 of 1 */\n       true)"));
    }

    #[test]
    fn test_missing_heuristic_aborts_rendering() {
        let matrix = test_matrix(&[("CLASS_F", "a.p\n")], &[("bare", "# eprover -tKBO\na.p T 1\n")]);
        let selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        let result = Emitter::new(&matrix, &selection, "").render(OutputMode::Full);
        assert!(matches!(result, Err(Error::MissingHeuristic { .. })));
    }

    #[test]
    fn test_default_follows_global_order() {
        let matrix = test_matrix(
            &[("CLASS_F", "a.p\nb.p\nc.p\n")],
            &[
                ("fast", "# -H'(1*FIFOWeight(ConstPrio))'\na.p T 1\nb.p T 1\nc.p T 1\n"),
                ("other", "# -H'(3*FIFOWeight(ConstPrio))'\na.p T 0.5\nb.p T 0.5\nc.p T 0.5\n"),
            ],
        );
        let mut selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        assert_eq!(selection.strategy_for("CLASS_F"), Some("other"));
        LargeClassRefiner::new(&matrix, 1).refine(&mut selection);
        let out = render(&selection, &matrix);
        assert!(out.contains("/* Global best, other, already defined */"));
    }
}
