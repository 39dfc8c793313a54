//! A syntax tree struct for propositional/LTL formulae and functionality for its manipulation.

use crate::preprocessing::operator_enums::*;

use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};
use std::fmt;

/// Enum of possible node data types in an LTL formula syntax tree.
///
/// In particular, a node type can be:
///     - A "terminal" node, containing a single atomic value (variable or constant).
///     - A "unary" node, with a `UnaryOp` and a sub-formula.
///     - A "binary" node, with a `BinaryOp` and two sub-formulae.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum NodeType {
    Terminal(Atomic),
    Unary(UnaryOp, Box<LtlTreeNode>),
    Binary(BinaryOp, Box<LtlTreeNode>, Box<LtlTreeNode>),
}

/// A single node in a syntax tree of an LTL formula.
///
/// Each node tracks its:
///     - `complexity`; The number of nodes in its subtree, starting from 1 for atomic
///       values. The rewriting closure compares this number against its budget for
///       every candidate it discovers.
///     - `node_type`; A collection of node data represented through `NodeType`.
///
/// Nodes are immutable values; rewriting always builds new nodes. The canonical
/// string produced by the `Display` implementation is the identity of a formula
/// for deduplication purposes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LtlTreeNode {
    pub complexity: u32,
    pub node_type: NodeType,
}

/// Rendering context of a sub-formula, given by the operator directly above it.
///
/// Only `&` and `|` parenthesize conditionally: inside the respective other
/// connective (or at the top level) they must bracket themselves, inside an
/// always-parenthesized binary operator they must not. Unary operators render
/// their child as if it stood at the top level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PrintContext {
    TopLevel,
    InsideAnd,
    InsideOr,
    InsideOther,
}

impl LtlTreeNode {
    /// Create a "unary" [LtlTreeNode] from the given arguments.
    ///
    /// See also [NodeType::Unary].
    pub fn mk_unary(child: LtlTreeNode, op: UnaryOp) -> LtlTreeNode {
        LtlTreeNode {
            complexity: child.complexity + 1,
            node_type: NodeType::Unary(op, Box::new(child)),
        }
    }

    /// Create a "binary" [LtlTreeNode] from the given arguments.
    ///
    /// See also [NodeType::Binary].
    pub fn mk_binary(left: LtlTreeNode, right: LtlTreeNode, op: BinaryOp) -> LtlTreeNode {
        LtlTreeNode {
            complexity: left.complexity + right.complexity + 1,
            node_type: NodeType::Binary(op, Box::new(left), Box::new(right)),
        }
    }

    /// Create a [LtlTreeNode] representing a Boolean constant.
    ///
    /// See also [NodeType::Terminal] and [Atomic::True] / [Atomic::False].
    pub fn mk_constant(constant_val: bool) -> LtlTreeNode {
        Self::mk_atom(Atomic::from(constant_val))
    }

    /// Create a [LtlTreeNode] representing a variable.
    ///
    /// See also [NodeType::Terminal] and [Atomic::Var].
    pub fn mk_variable(var_name: &str) -> LtlTreeNode {
        Self::mk_atom(Atomic::Var(var_name.to_string()))
    }

    /// A helper function which creates a new [LtlTreeNode] for the given [Atomic] value.
    fn mk_atom(atom: Atomic) -> LtlTreeNode {
        LtlTreeNode {
            complexity: 1,
            node_type: NodeType::Terminal(atom),
        }
    }

    /// Create a new random tree over the given propositions. The `tree_height` is the
    /// number of binary levels in the tree (not counting random unary nodes inserted
    /// between levels). The number of leaves will be `2^tree_height`.
    pub fn new_random_formula(
        tree_height: u8,
        propositions: &Vec<String>,
        seed: u64,
    ) -> LtlTreeNode {
        let num_props = propositions.len() as u32;
        let mut rand = StdRng::seed_from_u64(seed);

        if tree_height <= 1 {
            let prop_index = rand.next_u32() % num_props;
            let prop = propositions.get(prop_index as usize).unwrap();
            return LtlTreeNode::mk_variable(prop);
        }

        let binary_op = match rand.next_u32() % 6 {
            0 => BinaryOp::And,
            1 => BinaryOp::Or,
            2 => BinaryOp::Imp,
            3 => BinaryOp::Iff,
            4 => BinaryOp::Until,
            _ => BinaryOp::Release,
        };

        let binary_node = LtlTreeNode::mk_binary(
            LtlTreeNode::new_random_formula(tree_height - 1, propositions, rand.next_u64()),
            LtlTreeNode::new_random_formula(tree_height - 1, propositions, rand.next_u64()),
            binary_op,
        );

        match rand.next_u32() % 4 {
            0 => LtlTreeNode::mk_unary(binary_node, UnaryOp::Not),
            1 => LtlTreeNode::mk_unary(binary_node, UnaryOp::Next),
            _ => binary_node,
        }
    }

    /// Render this node into the formatter, deciding parenthesization from the
    /// operator above it.
    fn write_canonical(&self, f: &mut fmt::Formatter, context: PrintContext) -> fmt::Result {
        match &self.node_type {
            NodeType::Terminal(atom) => write!(f, "{atom}"),
            NodeType::Unary(UnaryOp::Not, child) => {
                write!(f, "!")?;
                child.write_canonical(f, PrintContext::TopLevel)
            }
            NodeType::Unary(op, child) => {
                write!(f, "{op} ")?;
                child.write_canonical(f, PrintContext::TopLevel)
            }
            NodeType::Binary(op @ BinaryOp::And, left, right) => {
                let parenthesize =
                    matches!(context, PrintContext::TopLevel | PrintContext::InsideOr);
                Self::write_binary(f, op, left, right, PrintContext::InsideAnd, parenthesize)
            }
            NodeType::Binary(op @ BinaryOp::Or, left, right) => {
                let parenthesize =
                    matches!(context, PrintContext::TopLevel | PrintContext::InsideAnd);
                Self::write_binary(f, op, left, right, PrintContext::InsideOr, parenthesize)
            }
            NodeType::Binary(op, left, right) => {
                Self::write_binary(f, op, left, right, PrintContext::InsideOther, true)
            }
        }
    }

    fn write_binary(
        f: &mut fmt::Formatter,
        op: &BinaryOp,
        left: &LtlTreeNode,
        right: &LtlTreeNode,
        child_context: PrintContext,
        parenthesize: bool,
    ) -> fmt::Result {
        if parenthesize {
            write!(f, "(")?;
        }
        left.write_canonical(f, child_context)?;
        write!(f, " {op} ")?;
        right.write_canonical(f, child_context)?;
        if parenthesize {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for LtlTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_canonical(f, PrintContext::TopLevel)
    }
}
