//! Filtering of generated formulae down to a restricted operator alphabet.

use crate::preprocessing::ltl_tree::{LtlTreeNode, NodeType};
use crate::preprocessing::operator_enums::Atomic;

use std::collections::HashSet;

/// Check whether the formula only uses operators from the allowed alphabet.
/// Variables are always allowed; constants count as the operators '1' and '0'.
pub fn is_allowed(formula: &LtlTreeNode, allowed_operators: &HashSet<String>) -> bool {
    match &formula.node_type {
        NodeType::Terminal(Atomic::Var(_)) => true,
        NodeType::Terminal(Atomic::True) => allowed_operators.contains("1"),
        NodeType::Terminal(Atomic::False) => allowed_operators.contains("0"),
        NodeType::Unary(op, child) => {
            allowed_operators.contains(op.token()) && is_allowed(child, allowed_operators)
        }
        NodeType::Binary(op, left, right) => {
            allowed_operators.contains(op.token())
                && is_allowed(left, allowed_operators)
                && is_allowed(right, allowed_operators)
        }
    }
}

/// Restrict a candidate list to the formulae expressed entirely in the allowed
/// alphabet, preserving the original order.
pub fn filter_equivalences(
    equivalences: Vec<LtlTreeNode>,
    allowed_operators: &HashSet<String>,
) -> Vec<LtlTreeNode> {
    equivalences
        .into_iter()
        .filter(|formula| is_allowed(formula, allowed_operators))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::postprocessing::alphabet_filter::{filter_equivalences, is_allowed};
    use crate::preprocessing::parser::parse_ltl_formula;

    use std::collections::HashSet;

    fn operators(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    /// Every operator of an accepted formula must be in the alphabet; one missing
    /// operator anywhere rejects the whole formula.
    fn allowed_requires_every_operator() {
        let formula = parse_ltl_formula("!(A & B) | C");

        assert!(is_allowed(&formula, &operators(&["!", "&", "|"])));
        assert!(!is_allowed(&formula, &operators(&["!", "&"])));
        assert!(!is_allowed(&formula, &operators(&["!", "|"])));

        // variables alone never need an operator
        assert!(is_allowed(&parse_ltl_formula("A"), &operators(&[])));
    }

    #[test]
    /// Constants are gated by the '1' and '0' pseudo-operators.
    fn constants_are_operators() {
        let truth = parse_ltl_formula("1");
        assert!(is_allowed(&truth, &operators(&["1"])));
        assert!(!is_allowed(&truth, &operators(&["0"])));

        let formula = parse_ltl_formula("A U 0");
        assert!(is_allowed(&formula, &operators(&["U", "0"])));
        assert!(!is_allowed(&formula, &operators(&["U"])));
    }

    #[test]
    /// Temporal operators are filtered like the boolean ones.
    fn temporal_operators() {
        let formula = parse_ltl_formula("G (A -> F B)");
        assert!(is_allowed(&formula, &operators(&["G", "F", "->"])));
        assert!(!is_allowed(&formula, &operators(&["G", "->"])));
    }

    #[test]
    /// Filtering keeps order and drops everything using a forbidden operator.
    fn filter_preserves_order() {
        let candidates = vec![
            parse_ltl_formula("!(A & B)"),
            parse_ltl_formula("!A | !B"),
            parse_ltl_formula("A -> !B"),
            parse_ltl_formula("!A"),
        ];
        let filtered = filter_equivalences(candidates, &operators(&["!", "|"]));
        let strings: Vec<String> = filtered.iter().map(|f| f.to_string()).collect();
        assert_eq!(strings, vec!["(!A | !B)".to_string(), "!A".to_string()]);
    }
}
