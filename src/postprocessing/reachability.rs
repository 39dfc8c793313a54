//! A pre-check over the allowed operator alphabet: which operators can in
//! principle be expressed through it, and which can never appear in a filtered
//! result regardless of complexity and depth.

use std::collections::HashSet;

/// The operator alphabet, in the canonical order used for reporting.
pub const OPERATOR_TOKENS: [&str; 12] = [
    "!", "&", "|", "->", "<->", "X", "F", "G", "U", "R", "1", "0",
];

/// For every operator, the minimal operator sets sufficient to express it.
/// An operator is expressible from an alphabet as soon as one of its witness
/// sets is contained in the operators expressible so far.
const EXPRESSIBILITY_WITNESSES: [(&str, &[&[&str]]); 12] = [
    ("!", &[&["!"]]),
    ("&", &[&["&"], &["!", "|"], &["!", "->"]]),
    ("|", &[&["|"], &["!", "&"], &["!", "->"]]),
    ("->", &[&["->"], &["!", "|"], &["!", "&"]]),
    (
        "<->",
        &[&["<->"], &["!", "&"], &["!", "|"], &["!", "->"], &["&", "->"]],
    ),
    ("X", &[&["X"]]),
    ("F", &[&["F"], &["U"], &["G", "!"]]),
    ("G", &[&["G"], &["F", "!"], &["U", "!"]]),
    ("U", &[&["U"]]),
    ("R", &[&["R"], &["U", "!"], &["F", "G"], &["U", "G"], &["F", "!"]]),
    ("1", &[&["1"], &["0", "!"], &["->"], &["!", "&"], &["!", "|"]]),
    ("0", &[&["0"], &["1", "!"], &["!", "->"], &["!", "&"], &["!", "|"]]),
];

/// Compute which operators can never be expressed from the given alphabet.
///
/// Runs the witness table to its fixpoint: an operator joins the reachable set
/// as soon as one of its witness sets is already reachable. The remainder is
/// returned in canonical operator order; a non-empty result is a warning, not an
/// error, since generation and filtering still proceed.
pub fn check_operator_reachability(allowed_operators: &HashSet<String>) -> Vec<String> {
    let mut reachable: HashSet<&str> = allowed_operators
        .iter()
        .map(|operator| operator.as_str())
        .collect();

    let mut changed = true;
    while changed {
        changed = false;
        for (operator, witness_sets) in EXPRESSIBILITY_WITNESSES.iter() {
            if reachable.contains(operator) {
                continue;
            }
            let expressible = witness_sets
                .iter()
                .any(|witnesses| witnesses.iter().all(|token| reachable.contains(token)));
            if expressible {
                reachable.insert(operator);
                changed = true;
            }
        }
    }

    OPERATOR_TOKENS
        .iter()
        .filter(|operator| !reachable.contains(**operator))
        .map(|operator| operator.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::postprocessing::reachability::check_operator_reachability;

    use std::collections::HashSet;

    fn operators(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    /// The full alphabet leaves nothing unreachable; the empty alphabet leaves
    /// everything unreachable.
    fn extreme_alphabets() {
        let all = operators(&["!", "&", "|", "->", "<->", "X", "F", "G", "U", "R", "1", "0"]);
        assert!(check_operator_reachability(&all).is_empty());

        let unreachable = check_operator_reachability(&operators(&[]));
        assert_eq!(unreachable.len(), 12);
    }

    #[test]
    /// A propositionally complete alphabet reaches all boolean operators and the
    /// constants, but none of the temporal ones.
    fn boolean_alphabet() {
        let unreachable = check_operator_reachability(&operators(&["!", "&", "|", "->", "<->"]));
        assert_eq!(unreachable, vec!["X", "F", "G", "U", "R"]);
    }

    #[test]
    /// `F` is expressible from `G` and negation, and vice versa.
    fn temporal_dualities() {
        let unreachable = check_operator_reachability(&operators(&["G", "!"]));
        assert!(!unreachable.contains(&"F".to_string()));
        assert!(!unreachable.contains(&"G".to_string()));
        assert!(unreachable.contains(&"X".to_string()));

        let unreachable = check_operator_reachability(&operators(&["F", "!"]));
        assert!(!unreachable.contains(&"G".to_string()));
        // R is witnessed directly by {F, !}
        assert!(!unreachable.contains(&"R".to_string()));
    }

    #[test]
    /// Reachability closes transitively: `{U, !}` gives `F` and `G` directly, and
    /// through them everything temporal except `X`.
    fn transitive_closure() {
        let unreachable = check_operator_reachability(&operators(&["U", "!"]));
        assert_eq!(unreachable, vec!["&", "|", "->", "<->", "X", "1", "0"]);
    }

    #[test]
    /// The warning set is reported in canonical operator order.
    fn deterministic_order() {
        let unreachable = check_operator_reachability(&operators(&["<->"]));
        let mut sorted = unreachable.clone();
        let order = ["!", "&", "|", "->", "<->", "X", "F", "G", "U", "R", "1", "0"];
        sorted.sort_by_key(|op| order.iter().position(|o| *o == op.as_str()).unwrap());
        assert_eq!(unreachable, sorted);
    }
}
