//! Transformation analysis from start to finish, with progress output and result
//! prints: parse the formula, warn about inexpressible operators, generate the
//! equivalence candidates on a worker joined with a timeout, and filter them down
//! to the allowed alphabet.

use crate::postprocessing::alphabet_filter::filter_equivalences;
use crate::postprocessing::reachability::{OPERATOR_TOKENS, check_operator_reachability};
use crate::preprocessing::parser::parse_and_validate_ltl_formula;
use crate::result_print::*;
use crate::rewriting::applier::apply_equivalences_cancellable;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, SystemTime};

/// Everything one transformation run produces: the full candidate list, the
/// candidates surviving the alphabet filter (both in discovery order, as
/// canonical strings), and the operators the alphabet cannot express.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransformOutcome {
    pub equivalents: Vec<String>,
    pub filtered: Vec<String>,
    pub unreachable: Vec<String>,
}

/// Parse a comma-separated operator list into the alphabet set.
pub fn parse_operator_list(raw: &str) -> Result<HashSet<String>, String> {
    let mut operators = HashSet::new();
    for token in raw.split(',') {
        let token = token.trim();
        if !OPERATOR_TOKENS.contains(&token) {
            return Err(format!(
                "Invalid operator '{token}'. Use any combination of !, &, |, ->, <->, X, F, G, U, R, 1, 0"
            ));
        }
        operators.insert(token.to_string());
    }
    Ok(operators)
}

/// Perform the whole transformation for a single formula, from parsing to the
/// filtered result. Prints the selected amount of result info (nothing / counts
/// and warnings / full formula lists).
///
/// The generation phase runs on a worker thread that is joined with the given
/// timeout. On timeout the worker is abandoned (it holds no external resources)
/// and additionally asked to wind down through its cancellation flag.
pub fn analyse_formula(
    formula: &str,
    allowed_operators: &HashSet<String>,
    complexity_threshold: f64,
    max_depth: u32,
    show_unfiltered: bool,
    timeout_seconds: f64,
    print_opt: PrintOptions,
) -> Result<TransformOutcome, String> {
    if !timeout_seconds.is_finite() || timeout_seconds <= 0.0 {
        return Err("Timeout must be a positive number of seconds.".to_string());
    }

    let tree = parse_and_validate_ltl_formula(formula)?;

    let unreachable = check_operator_reachability(allowed_operators);
    if !unreachable.is_empty() {
        print_warning_if_allowed(
            format!(
                "Warning: The following operators might not always be reachable: {}. \
                 Consider augmenting your list of available operators.",
                unreachable.join(", ")
            ),
            print_opt,
        );
    }

    let start = SystemTime::now();
    let (sender, receiver) = mpsc::channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = Arc::clone(&cancelled);
    let worker_tree = tree.clone();
    thread::spawn(move || {
        let equivalents = apply_equivalences_cancellable(
            &worker_tree,
            complexity_threshold,
            max_depth,
            &worker_cancelled,
        );
        let _ = sender.send(equivalents);
    });

    let equivalents = match receiver.recv_timeout(Duration::from_secs_f64(timeout_seconds)) {
        Ok(equivalents) => equivalents,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            cancelled.store(true, Ordering::Relaxed);
            return Err(format!(
                "Timeout: Equivalence generation took longer than {timeout_seconds} seconds. \
                 Consider reducing complexity and/or depth."
            ));
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            return Err("An internal error occurred during equivalence generation.".to_string());
        }
    };
    print_if_allowed(
        format!(
            "Time to generate equivalents: {}ms",
            start.elapsed().unwrap().as_millis()
        ),
        print_opt,
    );

    let equivalent_strings: Vec<String> = equivalents
        .iter()
        .map(|candidate| candidate.to_string())
        .collect();
    if show_unfiltered {
        print_if_allowed(
            format!("\nBefore filtering: {}", equivalent_strings.len()),
            print_opt,
        );
        print_list_if_allowed(&equivalent_strings, print_opt);
    }

    let filtered = filter_equivalences(equivalents, allowed_operators);
    let filtered_strings: Vec<String> = filtered
        .iter()
        .map(|candidate| candidate.to_string())
        .collect();
    if filtered_strings.is_empty() {
        print_if_allowed(
            "No equivalent statements generated after filtering. Consider increasing complexity \
             and/or depth, or increasing the list of available operators."
                .to_string(),
            print_opt,
        );
    } else {
        print_if_allowed(
            format!("After filtering: {}", filtered_strings.len()),
            print_opt,
        );
        print_list_if_allowed(&filtered_strings, print_opt);
    }

    Ok(TransformOutcome {
        equivalents: equivalent_strings,
        filtered: filtered_strings,
        unreachable,
    })
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyse_formula, parse_operator_list};
    use crate::result_print::PrintOptions;

    #[test]
    /// Operator lists accept exactly the twelve known tokens.
    fn operator_list_parsing() {
        let operators = parse_operator_list("!,&,|").unwrap();
        assert_eq!(operators.len(), 3);
        assert!(operators.contains("!"));

        // whitespace around tokens is tolerated, duplicates collapse
        let operators = parse_operator_list(" -> , <-> , -> ").unwrap();
        assert_eq!(operators.len(), 2);

        assert!(parse_operator_list("!,#").is_err());
        assert!(parse_operator_list("").is_err());
        assert!(parse_operator_list("!,,&").is_err());
    }

    #[test]
    /// Malformed formulae and non-positive timeouts are rejected before generation.
    fn invalid_requests_are_rejected() {
        let operators = parse_operator_list("!,&").unwrap();
        let result = analyse_formula(
            "A && B",
            &operators,
            2.0,
            1,
            false,
            5.0,
            PrintOptions::NoPrint,
        );
        assert!(result.is_err());

        let result = analyse_formula("A", &operators, 2.0, 1, false, 0.0, PrintOptions::NoPrint);
        assert!(result.is_err());
        let result = analyse_formula("A", &operators, 2.0, 1, false, -1.0, PrintOptions::NoPrint);
        assert!(result.is_err());
    }

    #[test]
    /// A full run produces the unfiltered list, the filtered list, and the warning set.
    fn whole_pipeline_runs() {
        let operators = parse_operator_list("!,&,|,->").unwrap();
        let outcome = analyse_formula(
            "A <-> B",
            &operators,
            2.5,
            2,
            true,
            30.0,
            PrintOptions::NoPrint,
        )
        .unwrap();

        assert_eq!(outcome.equivalents[0], "(A <-> B)");
        assert!(
            outcome
                .equivalents
                .contains(&"((A -> B) & (B -> A))".to_string())
        );
        // the biconditional itself is not expressible in the chosen alphabet
        assert!(!outcome.filtered.contains(&"(A <-> B)".to_string()));
        assert!(
            outcome
                .filtered
                .contains(&"((A -> B) & (B -> A))".to_string())
        );
        assert_eq!(outcome.unreachable, vec!["X", "F", "G", "U", "R"]);
    }

    #[test]
    /// An over-eager configuration runs into the timeout instead of blocking the caller.
    fn timeout_is_reported() {
        let operators = parse_operator_list("!").unwrap();
        let result = analyse_formula(
            "(A <-> B) <-> ((C <-> D) <-> (E <-> F))",
            &operators,
            4.0,
            4,
            false,
            0.001,
            PrintOptions::NoPrint,
        );
        let error = result.unwrap_err();
        assert!(error.starts_with("Timeout"), "unexpected error: {error}");
    }
}
