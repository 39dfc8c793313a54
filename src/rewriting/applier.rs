//! The engine applying the rule catalogue: positional single-step expansion of a
//! formula, and the breadth-first closure of that expansion under a complexity cap.

use crate::preprocessing::ltl_tree::{LtlTreeNode, NodeType};
use crate::rewriting::equivalences::EQUIVALENCES;

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

/// Apply every rule of the catalogue at every position of `formula`, up to
/// `max_depth` levels below the root, and collect the outcomes.
///
/// The result always starts with the formula itself and may contain duplicates;
/// the closure is responsible for deduplication. For a binary node, the expansions
/// of both children are recombined as a full Cartesian product (left expansion
/// outer, right expansion inner), which makes discovery order deterministic.
fn expand_subformulae(formula: &LtlTreeNode, max_depth: u32, depth: u32) -> Vec<LtlTreeNode> {
    if depth > max_depth {
        return vec![formula.clone()];
    }

    let mut results = vec![formula.clone()];

    // rewrites at the current position
    let canonical = formula.to_string();
    for rule in EQUIVALENCES.iter() {
        let rewritten = rule(formula);
        if rewritten.to_string() != canonical {
            results.push(rewritten);
        }
    }

    // rewrites inside sub-formulae, re-wrapped into the current operator
    match &formula.node_type {
        NodeType::Terminal(_) => {}
        NodeType::Unary(op, child) => {
            for sub in expand_subformulae(child, max_depth, depth + 1) {
                results.push(LtlTreeNode::mk_unary(sub, op.clone()));
            }
        }
        NodeType::Binary(op, left, right) => {
            let left_expansions = expand_subformulae(left, max_depth, depth + 1);
            let right_expansions = expand_subformulae(right, max_depth, depth + 1);
            for left_sub in &left_expansions {
                for right_sub in &right_expansions {
                    results.push(LtlTreeNode::mk_binary(
                        left_sub.clone(),
                        right_sub.clone(),
                        op.clone(),
                    ));
                }
            }
        }
    }

    results
}

/// Compute the closure of `formula` under the rule catalogue.
///
/// Starting from the formula itself, repeatedly expand every discovered candidate
/// and keep each newcomer whose canonical string has not been seen before and
/// whose complexity stays within `complexity_threshold` times the complexity of
/// the original formula. The returned list is in discovery order and begins with
/// the original formula.
pub fn apply_equivalences(
    formula: &LtlTreeNode,
    complexity_threshold: f64,
    max_depth: u32,
) -> Vec<LtlTreeNode> {
    apply_equivalences_cancellable(formula, complexity_threshold, max_depth, &AtomicBool::new(false))
}

/// The cancellable variant of [apply_equivalences]: the flag is checked at the top
/// of every closure iteration, and a cancelled run returns the candidates found so
/// far. Callers that join the computation with a timeout set the flag so an
/// abandoned worker winds down instead of finishing a doomed closure.
pub fn apply_equivalences_cancellable(
    formula: &LtlTreeNode,
    complexity_threshold: f64,
    max_depth: u32,
    cancelled: &AtomicBool,
) -> Vec<LtlTreeNode> {
    let complexity_budget = f64::from(formula.complexity) * complexity_threshold;

    let mut results = vec![formula.clone()];
    let mut queue = VecDeque::from([formula.clone()]);
    let mut seen = HashSet::from([formula.to_string()]);

    while let Some(current) = queue.pop_front() {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }
        for candidate in expand_subformulae(&current, max_depth, 0) {
            let canonical = candidate.to_string();
            if !seen.contains(&canonical) && f64::from(candidate.complexity) <= complexity_budget {
                seen.insert(canonical);
                queue.push_back(candidate.clone());
                results.push(candidate);
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use crate::preprocessing::parser::parse_ltl_formula;
    use crate::rewriting::applier::{apply_equivalences, apply_equivalences_cancellable, expand_subformulae};

    use std::collections::HashSet;
    use std::sync::atomic::AtomicBool;

    /// Canonical strings of all candidates generated from the given formula.
    fn closure_strings(formula: &str, threshold: f64, depth: u32) -> Vec<String> {
        let tree = parse_ltl_formula(formula);
        apply_equivalences(&tree, threshold, depth)
            .iter()
            .map(|candidate| candidate.to_string())
            .collect()
    }

    #[test]
    /// The closure starts with the original formula and never repeats a canonical string.
    fn closure_starts_with_original_and_deduplicates() {
        let results = closure_strings("A <-> B", 2.5, 2);
        assert_eq!(results[0], "(A <-> B)");

        let unique: HashSet<&String> = results.iter().collect();
        assert_eq!(unique.len(), results.len());
    }

    #[test]
    /// Every candidate respects the complexity budget.
    fn closure_respects_complexity_cap() {
        let tree = parse_ltl_formula("!(A & B)");
        let budget = f64::from(tree.complexity) * 2.0;
        for candidate in apply_equivalences(&tree, 2.0, 2) {
            assert!(f64::from(candidate.complexity) <= budget, "{candidate} exceeds the budget");
        }
    }

    #[test]
    /// With a budget factor of 1.0 every rewrite of a single variable is too large,
    /// so the closure stays a singleton regardless of the depth bound.
    fn variable_closure_is_singleton() {
        assert_eq!(closure_strings("A", 1.0, 0), vec!["A".to_string()]);
        assert_eq!(closure_strings("A", 1.0, 2), vec!["A".to_string()]);
    }

    #[test]
    /// A generous budget lets single-step rewrites appear directly in the closure.
    fn closure_contains_expected_rewrites() {
        let results = closure_strings("A <-> B", 2.5, 3);
        assert!(results.contains(&"((A -> B) & (B -> A))".to_string()));
        assert!(results.contains(&"((B -> A) & (A -> B))".to_string()));

        let results = closure_strings("!(A & B)", 2.0, 1);
        assert!(results.contains(&"(!A | !B)".to_string()));

        let results = closure_strings("!F A", 2.0, 2);
        assert!(results.contains(&"G !A".to_string()));

        let results = closure_strings("A & !A", 1.5, 1);
        assert!(results.contains(&"0".to_string()));
    }

    #[test]
    /// Sub-formula rewrites surface through the positional expansion: the negation
    /// inside the conjunction is rewritten even though the root operator is `&`.
    fn expansion_reaches_subformulae() {
        let tree = parse_ltl_formula("!!A & B");
        let expansions: Vec<String> = expand_subformulae(&tree, 2, 0)
            .iter()
            .map(|candidate| candidate.to_string())
            .collect();
        assert!(expansions.contains(&"(A & B)".to_string()));
    }

    #[test]
    /// The depth bound stops positional application below the cut-off level.
    fn expansion_depth_bound() {
        // depth 0 still rewrites the root, so the double negation collapses
        let tree = parse_ltl_formula("!!A");
        let expansions: Vec<String> = expand_subformulae(&tree, 0, 0)
            .iter()
            .map(|candidate| candidate.to_string())
            .collect();
        assert!(expansions.contains(&"A".to_string()));

        // with the rewrite buried one level deeper, depth 0 cannot reach it,
        // while depth 1 can
        let tree = parse_ltl_formula("!!A & B");
        let shallow: Vec<String> = expand_subformulae(&tree, 0, 0)
            .iter()
            .map(|candidate| candidate.to_string())
            .collect();
        assert!(!shallow.contains(&"(A & B)".to_string()));

        let deeper: Vec<String> = expand_subformulae(&tree, 1, 0)
            .iter()
            .map(|candidate| candidate.to_string())
            .collect();
        assert!(deeper.contains(&"(A & B)".to_string()));
    }

    #[test]
    /// Identical runs produce identical candidate lists, in the same order.
    fn closure_is_deterministic() {
        let first = closure_strings("(A -> B) & A", 2.0, 2);
        let second = closure_strings("(A -> B) & A", 2.0, 2);
        assert_eq!(first, second);
    }

    #[test]
    /// A pre-cancelled run returns after the first closure iteration check.
    fn cancellation_stops_the_closure() {
        let tree = parse_ltl_formula("A <-> B");
        let cancelled = AtomicBool::new(true);
        let results = apply_equivalences_cancellable(&tree, 3.0, 3, &cancelled);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].to_string(), "(A <-> B)");
    }
}
