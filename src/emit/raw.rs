//! Raw class/strategy tables.

use super::Emitter;
use crate::error::Result;
use crate::signature::ClassSignature;

pub(super) fn render(emitter: &Emitter<'_>) -> Result<String> {
    let assignment = emitter.selection.assignment();
    let mut out = emitter.header();

    out.push_str("/* Raw association */\n");
    out.push_str("char* raw_class[] = \n{\n");
    for (class, strategy) in assignment {
        let signature = ClassSignature::parse(class)?;
        out.push_str(&format!(
            "   \"{}\",  /* {:>6} {:>20} */\n",
            signature.code(),
            emitter.matrix.optimum(class),
            strategy
        ));
    }
    out.push_str("   NULL\n};\n");

    out.push_str("char* raw_sine[] = \n{\n");
    for strategy in assignment.values() {
        match emitter.description(strategy.as_str()).sine()? {
            Some(arg) => out.push_str(&format!("   \"{}\",\n", arg)),
            None => out.push_str("   NULL,\n"),
        }
    }
    out.push_str("   NULL\n};\n");

    let predicted: u64 = assignment.keys().map(|class| emitter.matrix.optimum(class)).sum();
    out.push_str(&format!("/* Predicted solutions: {} */\n", predicted));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use crate::config::{OutputMode, SelectionPolicy};
    use crate::emit::Emitter;
    use crate::selection::{test_matrix, GreedySelector};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_tables() {
        let matrix = test_matrix(
            &[("CLASS_FU", "a.p\nb.p\n"), ("CLASS_HG", "c.p\n")],
            &[
                ("protokoll_G-E--_001", "# eprover --sine=gf120_h_gu -H'(1*FIFOWeight(ConstPrio))'\na.p T 1\nb.p T 1\n"),
                ("protokoll_G-E--_002", "# eprover -H'(1*FIFOWeight(ConstPrio))'\nc.p T 1\n"),
            ],
        );
        let selection = GreedySelector::new(&matrix, SelectionPolicy::GlobalPerformance)
            .select()
            .unwrap();
        let out = Emitter::new(&matrix, &selection, "")
            .render(OutputMode::Raw)
            .unwrap();

        let tables = out
            .split_once("/* Raw association */\n")
            .map(|(_, tables)| tables)
            .unwrap();
        let expected = format!(
            "char* raw_class[] = \n{{\n   \"FU\",  /* {:>6} {:>20} */\n   \"HG\",  /* {:>6} {:>20} */\n   NULL\n}};\n\
             char* raw_sine[] = \n{{\n   \"gf120_h_gu\",\n   NULL,\n   NULL\n}};\n\
             /* Predicted solutions: 3 */\n",
            2, "protokoll_G-E--_001", 1, "protokoll_G-E--_002"
        );
        assert_eq!(tables, expected);
        assert!(!out.contains("#ifdef"));
    }
}
