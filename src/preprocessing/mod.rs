//! Components regarding the syntax of formulae - the syntax tree, operator enums,
//! and the parsing of formula strings.

/// Syntax trees for LTL formulae, with the canonical printer and complexity tracking.
pub mod ltl_tree;
/// Enums for unary/binary operators and atomic sub-formulae.
pub mod operator_enums;
/// Parsing of formula strings into syntax trees.
pub mod parser;
