//! Contains functionality regarding parsing formula strings into a syntax tree.
//!
//! The parser splits on the first level-0 occurrence of each operator, in the order
//! `U`, `R`, `<->`, `->`, `&`, `|` (after testing the unary prefixes `X`, `F`, `G`).
//! Splitting on the first occurrence makes every binary operator right-associative:
//! `a & b & c` parses as `a & (b & c)`. This associativity is part of the canonical
//! string contract and must not be changed.
//!
//! The parser itself is total: input that matches no operator shape becomes a
//! variable holding the offending text. Callers that need rejection of malformed
//! input use [parse_and_validate_ltl_formula], which refuses variable names
//! containing reserved tokens.

use crate::preprocessing::ltl_tree::{LtlTreeNode, NodeType};
use crate::preprocessing::operator_enums::{Atomic, BinaryOp, UnaryOp};

/// Characters that may not occur inside a variable name.
const RESERVED_CHARS: [char; 12] = ['(', ')', '!', '&', '|', 'X', 'F', 'G', 'U', 'R', '1', '0'];

/// Parse an LTL formula string representation into an actual formula tree.
///
/// This function never fails; see the module documentation for the permissive
/// fallback behavior.
pub fn parse_ltl_formula(formula: &str) -> LtlTreeNode {
    parse_expression(formula)
}

/// Parse an LTL formula string representation into a formula tree, rejecting
/// trees whose variables carry reserved tokens (the tell-tale sign of malformed
/// input swallowed by the permissive parser).
pub fn parse_and_validate_ltl_formula(formula: &str) -> Result<LtlTreeNode, String> {
    let tree = parse_expression(formula);
    validate_variable_names(&tree)?;
    Ok(tree)
}

/// One recursive parsing step, handling the whole operator cascade.
fn parse_expression(expression: &str) -> LtlTreeNode {
    let mut expression = expression.trim();
    // strip at most one layer of enclosing parentheses per step
    if let Some(inner) = strip_enclosing_parentheses(expression) {
        expression = inner.trim();
    }

    for (prefix, op) in [
        ('X', UnaryOp::Next),
        ('F', UnaryOp::Finally),
        ('G', UnaryOp::Globally),
    ] {
        if let Some(rest) = expression.strip_prefix(prefix) {
            return LtlTreeNode::mk_unary(parse_expression(rest), op);
        }
    }

    for (token, op) in [
        ("U", BinaryOp::Until),
        ("R", BinaryOp::Release),
        ("<->", BinaryOp::Iff),
        ("->", BinaryOp::Imp),
        ("&", BinaryOp::And),
        ("|", BinaryOp::Or),
    ] {
        if let Some((left, right)) = split_at_level_zero(expression, token) {
            return LtlTreeNode::mk_binary(parse_expression(left), parse_expression(right), op);
        }
    }

    if let Some(rest) = expression.strip_prefix('!') {
        return LtlTreeNode::mk_unary(parse_expression(rest), UnaryOp::Not);
    }

    match expression {
        "1" => LtlTreeNode::mk_constant(true),
        "0" => LtlTreeNode::mk_constant(false),
        name => LtlTreeNode::mk_variable(name),
    }
}

/// If the whole expression is wrapped in one pair of parentheses (the pair fully
/// encloses the contents, as opposed to two separate groups like `(a) & (b)`),
/// return the contents of that pair.
fn strip_enclosing_parentheses(expression: &str) -> Option<&str> {
    if !(expression.starts_with('(') && expression.ends_with(')')) {
        return None;
    }
    let mut level: i32 = 0;
    for (i, c) in expression.char_indices() {
        match c {
            '(' => level += 1,
            ')' => {
                level -= 1;
                // the opening paren closes before the end, so it is not enclosing
                if level == 0 && i != expression.len() - 1 {
                    return None;
                }
            }
            _ => {}
        }
    }
    if level == 0 {
        Some(&expression[1..expression.len() - 1])
    } else {
        None
    }
}

/// Split the expression at the first occurrence of `operator` outside all
/// parentheses, returning the trimmed left and right parts.
fn split_at_level_zero<'a>(expression: &'a str, operator: &str) -> Option<(&'a str, &'a str)> {
    let mut level: i32 = 0;
    for (i, c) in expression.char_indices() {
        match c {
            '(' => level += 1,
            ')' => level -= 1,
            _ if level == 0 && expression[i..].starts_with(operator) => {
                let left = expression[..i].trim();
                let right = expression[(i + operator.len())..].trim();
                return Some((left, right));
            }
            _ => {}
        }
    }
    None
}

/// Check that no variable of the tree has an empty name or a name containing a
/// reserved token.
fn validate_variable_names(tree: &LtlTreeNode) -> Result<(), String> {
    match &tree.node_type {
        NodeType::Terminal(Atomic::Var(name)) => {
            if name.is_empty() {
                return Err("Variable name can't be empty.".to_string());
            }
            if name.contains(RESERVED_CHARS) || name.contains("->") || name.contains(char::is_whitespace) {
                return Err(format!("Variable name '{name}' contains a reserved token."));
            }
            Ok(())
        }
        NodeType::Terminal(_) => Ok(()),
        NodeType::Unary(_, child) => validate_variable_names(child),
        NodeType::Binary(_, left, right) => {
            validate_variable_names(left)?;
            validate_variable_names(right)
        }
    }
}
