//! The catalogue of rewrite rules the engine applies.
//!
//! Every rule is a total function on syntax trees: it either applies its rewrite at
//! the top of the given formula, or returns the input unchanged (the engine detects
//! a non-application by comparing canonical strings). Rules never descend into
//! sub-formulae; positional application is the engine's job.
//!
//! The catalogue order in [EQUIVALENCES] is part of the output contract, because
//! the engine reports candidates in discovery order. The same holds for the
//! intentionally duplicated entries: `implication_to_negation` coincides with
//! `implication_to_disjunction` (likewise their reverses), and both commutativity
//! directions are present even though they rewrite identically.

use crate::preprocessing::ltl_tree::{LtlTreeNode, NodeType};
use crate::preprocessing::operator_enums::{Atomic, BinaryOp, UnaryOp};

/// The type of a rewrite rule.
pub type EquivalenceFn = fn(&LtlTreeNode) -> LtlTreeNode;

// Local constructors so the rule bodies stay close to their textbook form.

fn mk_not(child: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_unary(child.clone(), UnaryOp::Not)
}

fn mk_next(child: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_unary(child.clone(), UnaryOp::Next)
}

fn mk_finally(child: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_unary(child.clone(), UnaryOp::Finally)
}

fn mk_globally(child: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_unary(child.clone(), UnaryOp::Globally)
}

fn mk_and(left: &LtlTreeNode, right: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_binary(left.clone(), right.clone(), BinaryOp::And)
}

fn mk_or(left: &LtlTreeNode, right: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_binary(left.clone(), right.clone(), BinaryOp::Or)
}

fn mk_imp(left: &LtlTreeNode, right: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_binary(left.clone(), right.clone(), BinaryOp::Imp)
}

fn mk_iff(left: &LtlTreeNode, right: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_binary(left.clone(), right.clone(), BinaryOp::Iff)
}

fn mk_until(left: &LtlTreeNode, right: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_binary(left.clone(), right.clone(), BinaryOp::Until)
}

fn mk_release(left: &LtlTreeNode, right: &LtlTreeNode) -> LtlTreeNode {
    LtlTreeNode::mk_binary(left.clone(), right.clone(), BinaryOp::Release)
}

fn mk_truth() -> LtlTreeNode {
    LtlTreeNode::mk_constant(true)
}

fn mk_falsity() -> LtlTreeNode {
    LtlTreeNode::mk_constant(false)
}

/// Guard shared by the reverse rules that wrap or duplicate their input
/// (`A => A & A`, `A => A & 1`, `A => !!A`, ...): they fire only on leaves
/// and negations, never on other compounds.
fn is_leaf_or_negation(formula: &LtlTreeNode) -> bool {
    matches!(
        &formula.node_type,
        NodeType::Terminal(_) | NodeType::Unary(UnaryOp::Not, _)
    )
}

// ---------- propositional rules, forward direction ----------

pub fn implication_to_disjunction(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Imp, left, right) = &formula.node_type {
        return mk_or(&mk_not(left), right);
    }
    formula.clone()
}

pub fn biconditional_to_implications(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Iff, left, right) = &formula.node_type {
        return mk_and(&mk_imp(left, right), &mk_imp(right, left));
    }
    formula.clone()
}

pub fn double_negation(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, inner) = &child.node_type {
            return (**inner).clone();
        }
    }
    formula.clone()
}

pub fn de_morgan_not_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, left, right) = &child.node_type {
            return mk_or(&mk_not(left), &mk_not(right));
        }
    }
    formula.clone()
}

pub fn de_morgan_not_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, left, right) = &child.node_type {
            return mk_and(&mk_not(left), &mk_not(right));
        }
    }
    formula.clone()
}

/// Distributes over the right operand only; `(A | B) & C` is left to the
/// commutativity rules.
pub fn distributive_law_and_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, inner_left, inner_right) = &right.node_type {
            return mk_or(&mk_and(left, inner_left), &mk_and(left, inner_right));
        }
    }
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, inner_left, inner_right) = &right.node_type {
            return mk_and(&mk_or(left, inner_left), &mk_or(left, inner_right));
        }
    }
    formula.clone()
}

pub fn commutativity_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        return mk_and(right, left);
    }
    formula.clone()
}

pub fn commutativity_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        return mk_or(right, left);
    }
    formula.clone()
}

pub fn associativity_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, inner_left, inner_right) = &right.node_type {
            return mk_and(&mk_and(left, inner_left), inner_right);
        }
    }
    formula.clone()
}

pub fn associativity_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, inner_left, inner_right) = &right.node_type {
            return mk_or(&mk_or(left, inner_left), inner_right);
        }
    }
    formula.clone()
}

pub fn absorption_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, inner_left, _) = &right.node_type {
            if left == inner_left {
                return (**left).clone();
            }
        }
    }
    formula.clone()
}

pub fn absorption_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, inner_left, _) = &right.node_type {
            if left == inner_left {
                return (**left).clone();
            }
        }
    }
    formula.clone()
}

pub fn idempotence_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if left == right {
            return (**left).clone();
        }
    }
    formula.clone()
}

pub fn idempotence_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if left == right {
            return (**left).clone();
        }
    }
    formula.clone()
}

pub fn and_truth(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::True)) {
            return (**right).clone();
        }
        if matches!(right.node_type, NodeType::Terminal(Atomic::True)) {
            return (**left).clone();
        }
    }
    formula.clone()
}

pub fn or_truth(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::True))
            || matches!(right.node_type, NodeType::Terminal(Atomic::True))
        {
            return mk_truth();
        }
    }
    formula.clone()
}

pub fn and_falsity(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::False))
            || matches!(right.node_type, NodeType::Terminal(Atomic::False))
        {
            return mk_falsity();
        }
    }
    formula.clone()
}

pub fn or_falsity(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::False)) {
            return (**right).clone();
        }
        if matches!(right.node_type, NodeType::Terminal(Atomic::False)) {
            return (**left).clone();
        }
    }
    formula.clone()
}

pub fn not_truth(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if matches!(child.node_type, NodeType::Terminal(Atomic::True)) {
            return mk_falsity();
        }
    }
    formula.clone()
}

pub fn not_falsity(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if matches!(child.node_type, NodeType::Terminal(Atomic::False)) {
            return mk_truth();
        }
    }
    formula.clone()
}

/// `A | !A => 1` and `!A | A => 1`, for variables only (compared by name).
pub fn law_of_excluded_middle(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (NodeType::Terminal(Atomic::Var(name)), NodeType::Unary(UnaryOp::Not, negated)) =
            (&left.node_type, &right.node_type)
        {
            if matches!(&negated.node_type, NodeType::Terminal(Atomic::Var(negated_name)) if negated_name == name)
            {
                return mk_truth();
            }
        }
        if let (NodeType::Unary(UnaryOp::Not, negated), NodeType::Terminal(Atomic::Var(name))) =
            (&left.node_type, &right.node_type)
        {
            if matches!(&negated.node_type, NodeType::Terminal(Atomic::Var(negated_name)) if negated_name == name)
            {
                return mk_truth();
            }
        }
    }
    formula.clone()
}

/// `A & !A => 0` and `!A & A => 0`, for arbitrary sub-formulae (compared
/// structurally).
pub fn non_contradiction_to_falsity(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, negated) = &left.node_type {
            if negated == right {
                return mk_falsity();
            }
        }
        if let NodeType::Unary(UnaryOp::Not, negated) = &right.node_type {
            if negated == left {
                return mk_falsity();
            }
        }
    }
    formula.clone()
}

// ---------- temporal rules, forward direction ----------

pub fn distribute_next_over_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Next, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, left, right) = &child.node_type {
            return mk_and(&mk_next(left), &mk_next(right));
        }
    }
    formula.clone()
}

pub fn distribute_next_over_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Next, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, left, right) = &child.node_type {
            return mk_or(&mk_next(left), &mk_next(right));
        }
    }
    formula.clone()
}

pub fn distribute_next_over_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Next, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Until, left, right) = &child.node_type {
            return mk_until(&mk_next(left), &mk_next(right));
        }
    }
    formula.clone()
}

pub fn distribute_finally_over_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Finally, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, left, right) = &child.node_type {
            return mk_or(&mk_finally(left), &mk_finally(right));
        }
    }
    formula.clone()
}

pub fn distribute_globally_over_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Globally, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, left, right) = &child.node_type {
            return mk_and(&mk_globally(left), &mk_globally(right));
        }
    }
    formula.clone()
}

pub fn distribute_until_over_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, inner_left, inner_right) = &left.node_type {
            return mk_or(&mk_until(inner_left, right), &mk_until(inner_right, right));
        }
    }
    formula.clone()
}

/// `(A U B) & (A U C) => A U (B & C)` when the left operands agree.
pub fn distribute_and_over_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let (
            NodeType::Binary(BinaryOp::Until, left_hold, left_goal),
            NodeType::Binary(BinaryOp::Until, right_hold, right_goal),
        ) = (&left.node_type, &right.node_type)
        {
            if left_hold == right_hold {
                return mk_until(left_hold, &mk_and(left_goal, right_goal));
            }
        }
    }
    formula.clone()
}

pub fn negate_next(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Next, inner) = &child.node_type {
            return mk_next(&mk_not(inner));
        }
    }
    formula.clone()
}

pub fn negate_finally(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Finally, inner) = &child.node_type {
            return mk_globally(&mk_not(inner));
        }
    }
    formula.clone()
}

pub fn negate_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Until, left, right) = &child.node_type {
            return mk_release(&mk_not(left), &mk_not(right));
        }
    }
    formula.clone()
}

pub fn negate_globally(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Globally, inner) = &child.node_type {
            return mk_finally(&mk_not(inner));
        }
    }
    formula.clone()
}

pub fn negate_release(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Release, left, right) = &child.node_type {
            return mk_until(&mk_not(left), &mk_not(right));
        }
    }
    formula.clone()
}

pub fn finally_idempotence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Finally, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Finally, inner) = &child.node_type {
            return mk_finally(inner);
        }
    }
    formula.clone()
}

pub fn globally_idempotence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Globally, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Globally, inner) = &child.node_type {
            return mk_globally(inner);
        }
    }
    formula.clone()
}

pub fn until_idempotence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Until, inner_left, inner_right) = &right.node_type {
            if left == inner_left {
                return mk_until(left, inner_right);
            }
        }
    }
    formula.clone()
}

pub fn until_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        return mk_or(right, &mk_and(left, &mk_next(formula)));
    }
    formula.clone()
}

pub fn release_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Release, left, right) = &formula.node_type {
        return mk_and(right, &mk_or(left, &mk_next(formula)));
    }
    formula.clone()
}

pub fn globally_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Globally, child) = &formula.node_type {
        return mk_and(child, &mk_next(formula));
    }
    formula.clone()
}

pub fn finally_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Finally, child) = &formula.node_type {
        return mk_or(child, &mk_next(formula));
    }
    formula.clone()
}

pub fn finally_to_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Finally, child) = &formula.node_type {
        return mk_until(&mk_truth(), child);
    }
    formula.clone()
}

pub fn globally_to_release(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Globally, child) = &formula.node_type {
        return mk_release(&mk_falsity(), child);
    }
    formula.clone()
}

// ---------- propositional rules, reverse direction ----------

pub fn reverse_implication_to_disjunction(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, negated) = &left.node_type {
            return mk_imp(negated, right);
        }
    }
    formula.clone()
}

pub fn reverse_biconditional_to_implications(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let (
            NodeType::Binary(BinaryOp::Imp, forward_left, forward_right),
            NodeType::Binary(BinaryOp::Imp, backward_left, backward_right),
        ) = (&left.node_type, &right.node_type)
        {
            if forward_left == backward_right && forward_right == backward_left {
                return mk_iff(forward_left, forward_right);
            }
        }
    }
    formula.clone()
}

pub fn reverse_double_negation(formula: &LtlTreeNode) -> LtlTreeNode {
    if is_leaf_or_negation(formula) {
        return mk_not(&mk_not(formula));
    }
    formula.clone()
}

pub fn reverse_de_morgan_not_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Not, left_inner), NodeType::Unary(UnaryOp::Not, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_not(&mk_and(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_de_morgan_not_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Not, left_inner), NodeType::Unary(UnaryOp::Not, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_not(&mk_or(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_distributive_law_and_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (
            NodeType::Binary(BinaryOp::And, left_common, left_rest),
            NodeType::Binary(BinaryOp::And, right_common, right_rest),
        ) = (&left.node_type, &right.node_type)
        {
            if left_common == right_common {
                return mk_and(left_common, &mk_or(left_rest, right_rest));
            }
        }
    }
    formula.clone()
}

pub fn reverse_commutativity_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        return mk_and(right, left);
    }
    formula.clone()
}

pub fn reverse_commutativity_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        return mk_or(right, left);
    }
    formula.clone()
}

pub fn reverse_associativity_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, inner_left, inner_right) = &left.node_type {
            return mk_and(inner_left, &mk_and(inner_right, right));
        }
    }
    formula.clone()
}

pub fn reverse_associativity_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, inner_left, inner_right) = &left.node_type {
            return mk_or(inner_left, &mk_or(inner_right, right));
        }
    }
    formula.clone()
}

pub fn reverse_idempotence_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if is_leaf_or_negation(formula) {
        return mk_and(formula, formula);
    }
    formula.clone()
}

pub fn reverse_idempotence_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if is_leaf_or_negation(formula) {
        return mk_or(formula, formula);
    }
    formula.clone()
}

pub fn reverse_and_truth(formula: &LtlTreeNode) -> LtlTreeNode {
    if is_leaf_or_negation(formula) {
        return mk_and(formula, &mk_truth());
    }
    formula.clone()
}

pub fn reverse_or_falsity(formula: &LtlTreeNode) -> LtlTreeNode {
    if is_leaf_or_negation(formula) {
        return mk_or(formula, &mk_falsity());
    }
    formula.clone()
}

pub fn reverse_not_truth(formula: &LtlTreeNode) -> LtlTreeNode {
    if matches!(formula.node_type, NodeType::Terminal(Atomic::False)) {
        return mk_not(&mk_truth());
    }
    formula.clone()
}

pub fn reverse_not_falsity(formula: &LtlTreeNode) -> LtlTreeNode {
    if matches!(formula.node_type, NodeType::Terminal(Atomic::True)) {
        return mk_not(&mk_falsity());
    }
    formula.clone()
}

// ---------- temporal rules, reverse direction ----------

pub fn reverse_distribute_next_over_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Next, left_inner), NodeType::Unary(UnaryOp::Next, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_next(&mk_and(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_distribute_next_over_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Next, left_inner), NodeType::Unary(UnaryOp::Next, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_next(&mk_or(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_distribute_next_over_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Next, left_inner), NodeType::Unary(UnaryOp::Next, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_next(&mk_until(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_distribute_finally_over_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (
            NodeType::Unary(UnaryOp::Finally, left_inner),
            NodeType::Unary(UnaryOp::Finally, right_inner),
        ) = (&left.node_type, &right.node_type)
        {
            return mk_finally(&mk_or(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_distribute_globally_over_and(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let (
            NodeType::Unary(UnaryOp::Globally, left_inner),
            NodeType::Unary(UnaryOp::Globally, right_inner),
        ) = (&left.node_type, &right.node_type)
        {
            return mk_globally(&mk_and(left_inner, right_inner));
        }
    }
    formula.clone()
}

/// `(A U C) | (B U C) => (A | B) U C` when the right operands agree.
pub fn reverse_distribute_until_over_or(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (
            NodeType::Binary(BinaryOp::Until, left_hold, left_goal),
            NodeType::Binary(BinaryOp::Until, right_hold, right_goal),
        ) = (&left.node_type, &right.node_type)
        {
            if left_goal == right_goal {
                return mk_until(&mk_or(left_hold, right_hold), left_goal);
            }
        }
    }
    formula.clone()
}

pub fn reverse_distribute_and_over_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, inner_left, inner_right) = &right.node_type {
            return mk_and(&mk_until(left, inner_left), &mk_until(left, inner_right));
        }
    }
    formula.clone()
}

pub fn reverse_negate_next(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Next, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, inner) = &child.node_type {
            return mk_not(&mk_next(inner));
        }
    }
    formula.clone()
}

pub fn reverse_negate_finally(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Globally, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, inner) = &child.node_type {
            return mk_not(&mk_finally(inner));
        }
    }
    formula.clone()
}

pub fn reverse_negate_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Release, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Not, left_inner), NodeType::Unary(UnaryOp::Not, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_not(&mk_until(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_negate_globally(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Finally, child) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, inner) = &child.node_type {
            return mk_not(&mk_globally(inner));
        }
    }
    formula.clone()
}

pub fn reverse_negate_release(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        if let (NodeType::Unary(UnaryOp::Not, left_inner), NodeType::Unary(UnaryOp::Not, right_inner)) =
            (&left.node_type, &right.node_type)
        {
            return mk_not(&mk_release(left_inner, right_inner));
        }
    }
    formula.clone()
}

pub fn reverse_finally_idempotence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Finally, child) = &formula.node_type {
        return mk_finally(&mk_finally(child));
    }
    formula.clone()
}

pub fn reverse_globally_idempotence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Globally, child) = &formula.node_type {
        return mk_globally(&mk_globally(child));
    }
    formula.clone()
}

pub fn reverse_until_idempotence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        return mk_until(left, &mk_until(left, right));
    }
    formula.clone()
}

/// Collapses the exact unfolded shape `B | (A & X (A U C))` back to the inner
/// until; only the recurrence's left operand is compared.
pub fn reverse_until_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, _, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::And, hold, next_part) = &right.node_type {
            if let NodeType::Unary(UnaryOp::Next, recurrence) = &next_part.node_type {
                if let NodeType::Binary(BinaryOp::Until, until_left, _) = &recurrence.node_type {
                    if hold == until_left {
                        return (**recurrence).clone();
                    }
                }
            }
        }
    }
    formula.clone()
}

/// Collapses the exact unfolded shape `B & (A | X (A R C))` back to the inner
/// release; only the recurrence's left operand is compared.
pub fn reverse_release_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, _, right) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Or, hold, next_part) = &right.node_type {
            if let NodeType::Unary(UnaryOp::Next, recurrence) = &next_part.node_type {
                if let NodeType::Binary(BinaryOp::Release, release_left, _) = &recurrence.node_type {
                    if hold == release_left {
                        return (**recurrence).clone();
                    }
                }
            }
        }
    }
    formula.clone()
}

pub fn reverse_globally_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::And, left, right) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Next, recurrence) = &right.node_type {
            if let NodeType::Unary(UnaryOp::Globally, inner) = &recurrence.node_type {
                if left == inner {
                    return (**recurrence).clone();
                }
            }
        }
    }
    formula.clone()
}

pub fn reverse_finally_expansion(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Next, recurrence) = &right.node_type {
            if let NodeType::Unary(UnaryOp::Finally, inner) = &recurrence.node_type {
                if left == inner {
                    return (**recurrence).clone();
                }
            }
        }
    }
    formula.clone()
}

pub fn reverse_finally_to_until(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Until, left, right) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::True)) {
            return mk_finally(right);
        }
    }
    formula.clone()
}

pub fn reverse_globally_to_release(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Release, left, right) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::False)) {
            return mk_globally(right);
        }
    }
    formula.clone()
}

// ---------- remaining implication rules and the xor pair ----------

pub fn implication_to_true(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Imp, left, right) = &formula.node_type {
        if left == right {
            return mk_truth();
        }
    }
    formula.clone()
}

pub fn false_implies_anything(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Imp, left, _) = &formula.node_type {
        if matches!(left.node_type, NodeType::Terminal(Atomic::False)) {
            return mk_truth();
        }
    }
    formula.clone()
}

pub fn implication_to_negation(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Imp, left, right) = &formula.node_type {
        return mk_or(&mk_not(left), right);
    }
    formula.clone()
}

pub fn reverse_implication_to_negation(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let NodeType::Unary(UnaryOp::Not, negated) = &left.node_type {
            return mk_imp(negated, right);
        }
    }
    formula.clone()
}

/// `(A & !B) | (!A & B) => !(A <-> B)`, with the operands in those exact positions.
pub fn xor_equivalence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Binary(BinaryOp::Or, left, right) = &formula.node_type {
        if let (
            NodeType::Binary(BinaryOp::And, first, negated_second),
            NodeType::Binary(BinaryOp::And, negated_first, second),
        ) = (&left.node_type, &right.node_type)
        {
            if let (
                NodeType::Unary(UnaryOp::Not, negated_second_inner),
                NodeType::Unary(UnaryOp::Not, negated_first_inner),
            ) = (&negated_second.node_type, &negated_first.node_type)
            {
                if negated_second_inner == second && negated_first_inner == first {
                    return mk_not(&mk_iff(first, second));
                }
            }
        }
    }
    formula.clone()
}

pub fn reverse_xor_equivalence(formula: &LtlTreeNode) -> LtlTreeNode {
    if let NodeType::Unary(UnaryOp::Not, child) = &formula.node_type {
        if let NodeType::Binary(BinaryOp::Iff, left, right) = &child.node_type {
            return mk_or(&mk_and(left, &mk_not(right)), &mk_and(&mk_not(left), right));
        }
    }
    formula.clone()
}

/// All rewrite rules, in application order.
pub const EQUIVALENCES: [EquivalenceFn; 86] = [
    implication_to_disjunction,
    biconditional_to_implications,
    double_negation,
    de_morgan_not_and,
    de_morgan_not_or,
    distributive_law_and_or,
    commutativity_and,
    commutativity_or,
    associativity_and,
    associativity_or,
    absorption_and,
    absorption_or,
    idempotence_and,
    idempotence_or,
    and_truth,
    or_truth,
    and_falsity,
    or_falsity,
    not_truth,
    not_falsity,
    law_of_excluded_middle,
    non_contradiction_to_falsity,
    distribute_next_over_and,
    distribute_next_over_or,
    distribute_next_over_until,
    distribute_finally_over_or,
    distribute_globally_over_and,
    distribute_until_over_or,
    distribute_and_over_until,
    negate_next,
    negate_finally,
    negate_until,
    negate_globally,
    negate_release,
    finally_idempotence,
    globally_idempotence,
    until_idempotence,
    until_expansion,
    release_expansion,
    globally_expansion,
    finally_expansion,
    finally_to_until,
    globally_to_release,
    reverse_implication_to_disjunction,
    reverse_biconditional_to_implications,
    reverse_double_negation,
    reverse_de_morgan_not_and,
    reverse_de_morgan_not_or,
    reverse_distributive_law_and_or,
    reverse_commutativity_and,
    reverse_commutativity_or,
    reverse_associativity_and,
    reverse_associativity_or,
    reverse_idempotence_and,
    reverse_idempotence_or,
    reverse_and_truth,
    reverse_or_falsity,
    reverse_not_truth,
    reverse_not_falsity,
    reverse_distribute_next_over_and,
    reverse_distribute_next_over_or,
    reverse_distribute_next_over_until,
    reverse_distribute_finally_over_or,
    reverse_distribute_globally_over_and,
    reverse_distribute_until_over_or,
    reverse_distribute_and_over_until,
    reverse_negate_next,
    reverse_negate_finally,
    reverse_negate_until,
    reverse_negate_globally,
    reverse_negate_release,
    reverse_finally_idempotence,
    reverse_globally_idempotence,
    reverse_until_idempotence,
    reverse_until_expansion,
    reverse_release_expansion,
    reverse_globally_expansion,
    reverse_finally_expansion,
    reverse_finally_to_until,
    reverse_globally_to_release,
    implication_to_true,
    false_implies_anything,
    implication_to_negation,
    reverse_implication_to_negation,
    xor_equivalence,
    reverse_xor_equivalence,
];
