//! **(internal)** End-to-end scenarios for the whole transformation pipeline,
//! exercising parsing, generation, filtering, and the reachability warning
//! together.

use crate::analysis::{TransformOutcome, analyse_formula, parse_operator_list};
use crate::preprocessing::ltl_tree::LtlTreeNode;
use crate::preprocessing::parser::parse_ltl_formula;
use crate::result_print::PrintOptions;
use crate::rewriting::applier::apply_equivalences;

use std::collections::HashSet;

/// Run the pipeline silently with the given parameters.
fn transform(
    formula: &str,
    operators: &str,
    complexity: f64,
    depth: u32,
) -> TransformOutcome {
    let operators = parse_operator_list(operators).unwrap();
    analyse_formula(
        formula,
        &operators,
        complexity,
        depth,
        true,
        60.0,
        PrintOptions::NoPrint,
    )
    .unwrap()
}

#[test]
/// A single variable with no complexity headroom passes through untouched, and the
/// boolean alphabet cannot express any temporal operator.
fn identity_pass_through() {
    let outcome = transform("A", "!,&,|,->,<->", 1.0, 0);
    assert_eq!(outcome.equivalents, vec!["A".to_string()]);
    assert_eq!(outcome.filtered, vec!["A".to_string()]);
    assert_eq!(outcome.unreachable, vec!["X", "F", "G", "U", "R"]);
}

#[test]
/// The biconditional expands into both implication conjunctions; the biconditional
/// itself does not survive a filter without `<->`.
fn biconditional_expansion() {
    let outcome = transform("A <-> B", "!,&,|,->", 2.5, 3);
    assert!(
        outcome
            .equivalents
            .contains(&"((A -> B) & (B -> A))".to_string())
    );
    assert!(
        outcome
            .equivalents
            .contains(&"((B -> A) & (A -> B))".to_string())
    );
    assert_eq!(outcome.filtered[0], "((A -> B) & (B -> A))");
    assert!(!outcome.filtered.contains(&"(A <-> B)".to_string()));
}

#[test]
/// De Morgan rewrites a negated conjunction into the `{!, |}` fragment, and the
/// filter drops everything still containing a conjunction.
fn de_morgan() {
    let outcome = transform("!(A & B)", "!,|", 2.0, 1);
    assert!(outcome.equivalents.contains(&"(!A | !B)".to_string()));
    assert!(
        outcome
            .filtered
            .iter()
            .all(|formula| !formula.contains('&')),
        "filtered output contains a conjunction: {:?}",
        outcome.filtered
    );
    assert!(outcome.filtered.contains(&"(!A | !B)".to_string()));
}

#[test]
/// The finally/globally duality surfaces `G !A`, and `{G, !}` can express `F`, so
/// the reachability warning does not mention it.
fn ltl_duality() {
    let outcome = transform("!F A", "G,!", 2.0, 2);
    assert!(outcome.equivalents.contains(&"G !A".to_string()));
    assert!(!outcome.unreachable.contains(&"F".to_string()));
    assert!(outcome.filtered.contains(&"G !A".to_string()));
}

#[test]
/// A contradiction collapses to falsity, the only survivor of the `{0}` alphabet.
fn contradiction_detection() {
    let outcome = transform("A & !A", "0", 1.5, 1);
    assert!(outcome.equivalents.contains(&"0".to_string()));
    assert_eq!(outcome.filtered, vec!["0".to_string()]);
}

#[test]
/// With a complexity factor of 1.0 nothing larger than the original variable is
/// admitted, regardless of the depth bound.
fn complexity_cap() {
    let outcome = transform("A", "!,&", 1.0, 2);
    assert_eq!(outcome.equivalents, vec!["A".to_string()]);
}

#[test]
/// The canonical printer is a fixpoint of parse-then-print for every candidate the
/// engine produces.
fn candidates_reparse_to_themselves() {
    for (formula, factor, depth) in [("!(A & B)", 2.0, 1), ("F (A | B)", 2.0, 2)] {
        let tree = parse_ltl_formula(formula);
        for candidate in apply_equivalences(&tree, factor, depth) {
            let canonical = candidate.to_string();
            let reparsed = parse_ltl_formula(canonical.as_str());
            assert_eq!(
                reparsed.to_string(),
                canonical,
                "candidate '{canonical}' does not reparse to itself"
            );
        }
    }
}

#[test]
/// Closure invariants hold on randomly generated formulae: the original comes
/// first, canonical strings stay unique, and the complexity budget is respected.
fn random_formula_invariants() {
    let propositions = vec!["p".to_string(), "q".to_string(), "r".to_string()];
    for seed in 0..6 {
        let formula = LtlTreeNode::new_random_formula(3, &propositions, seed);
        let budget = f64::from(formula.complexity) * 1.2;

        let results = apply_equivalences(&formula, 1.2, 1);
        assert_eq!(results[0].to_string(), formula.to_string());

        let mut seen = HashSet::new();
        for candidate in &results {
            assert!(
                f64::from(candidate.complexity) <= budget,
                "seed {seed}: candidate '{candidate}' exceeds the budget"
            );
            assert!(
                seen.insert(candidate.to_string()),
                "seed {seed}: duplicate candidate '{candidate}'"
            );
        }
    }
}
