//! Command-line interface of the equivalence generator.
//!
//! Takes a formula and the transformation parameters as positional arguments,
//! prints the parsed configuration, a warning about operators the chosen
//! alphabet cannot express, and the generated (optionally also unfiltered)
//! equivalents.

use ltl_equivalence_generator::analysis::{analyse_formula, parse_operator_list};
use ltl_equivalence_generator::result_print::PrintOptions;

use clap::Parser;
use clap::builder::PossibleValuesParser;

/// Structure to collect CLI arguments
#[derive(Parser)]
#[clap(
    version,
    about = "Generates formulae equivalent to the given propositional/LTL formula, \
             restricted to a chosen operator alphabet."
)]
struct Arguments {
    /// The formula to transform, e.g. "A <-> B".
    formula: String,

    /// Comma-separated alphabet for the filtered output, e.g. "!,&,|".
    operators: String,

    /// Complexity budget as a factor of the input formula's complexity.
    complexity: f64,

    /// Depth bound for one rewriting pass over a formula.
    depth: u32,

    /// Whether to also print the candidate list before filtering.
    #[clap(value_parser = PossibleValuesParser::new(["y", "n"]))]
    show_unfiltered: String,

    /// Timeout for the generation phase, in seconds.
    timeout: f64,
}

/// Wrapper function to invoke the transformation pipeline, works with CLI arguments.
fn main() {
    let args = Arguments::parse();

    let operators = match parse_operator_list(args.operators.as_str()) {
        Ok(operators) => operators,
        Err(error) => {
            println!("Error in command: {error}");
            return;
        }
    };

    println!(
        "Formula: {}, Operators: {}, Complexity: {}, Depth: {}, Show Unfiltered: {}, Timeout: {}",
        args.formula,
        args.operators,
        args.complexity,
        args.depth,
        args.show_unfiltered,
        args.timeout
    );

    let res = analyse_formula(
        args.formula.as_str(),
        &operators,
        args.complexity,
        args.depth,
        args.show_unfiltered == "y",
        args.timeout,
        PrintOptions::FullPrint,
    );

    if res.is_err() {
        println!("{}", res.err().unwrap());
    }
}
