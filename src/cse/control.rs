//! Control linearization.
//!
//! Flattens a standardized tree into indexed control blocks ("deltas").
//! Block 0 is the program's top-level body; every abstraction body and
//! every conditional branch gets its own block so that its instructions
//! are only loaded onto the machine's control when actually reached.
//! Block indices are allocated in a fixed traversal order, so a given
//! tree always linearizes to the same layout.
//!
//! Instructions within a block are laid out in preorder; the machine
//! consumes its control from the back, which makes operands reach the
//! value stack before the operator that combines them.

use crate::ast::{Binop, Label, TreeNode, Unop};

use super::value::ParamSpec;

/// One machine instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlItem {
    /// Push an integer literal.
    Integer(i64),
    /// Push a string literal.
    Str(String),
    /// Push a truth value.
    Truth(bool),
    /// Push the empty tuple.
    Nil,
    /// Push the dummy value.
    Dummy,
    /// Push the fixed-point marker.
    Ystar,
    /// Look up an identifier in the current environment and push it.
    Name(String),
    /// Construct a closure over block `body` and push it.
    Lambda { body: usize, param: ParamSpec },
    /// Reference to a conditional branch's block; consumed by `Beta`.
    Delta(usize),
    /// Branch on the truth value atop the stack.
    Beta,
    /// Apply: the stack holds the rator atop the rand.
    Gamma,
    /// Collect the top `n` values into a tuple.
    Tau(usize),
    Binop(Binop),
    Unop(Unop),
    /// Restore the environment of the enclosing call.
    ExitEnv,
}

pub type ControlBlock = Vec<ControlItem>;

/// Linearize a standardized tree into control blocks.
pub fn linearize(root: &TreeNode) -> Vec<ControlBlock> {
    let mut blocks = vec![ControlBlock::new()];
    flatten(root, 0, &mut blocks);
    blocks
}

fn flatten(node: &TreeNode, block: usize, blocks: &mut Vec<ControlBlock>) {
    match &node.label {
        Label::Lambda => {
            let body = blocks.len();
            blocks.push(ControlBlock::new());
            blocks[block].push(ControlItem::Lambda {
                body,
                param: param_spec(&node.children[0]),
            });
            for child in &node.children[1..] {
                flatten(child, body, blocks);
            }
        }
        Label::Cond => {
            let then_block = blocks.len();
            blocks.push(ControlBlock::new());
            blocks[block].push(ControlItem::Delta(then_block));
            flatten(&node.children[1], then_block, blocks);

            let else_block = blocks.len();
            blocks.push(ControlBlock::new());
            blocks[block].push(ControlItem::Delta(else_block));
            flatten(&node.children[2], else_block, blocks);

            blocks[block].push(ControlItem::Beta);
            flatten(&node.children[0], block, blocks);
        }
        Label::Tau => {
            blocks[block].push(ControlItem::Tau(node.children.len()));
            for child in &node.children {
                flatten(child, block, blocks);
            }
        }
        Label::Gamma => {
            blocks[block].push(ControlItem::Gamma);
            for child in &node.children {
                flatten(child, block, blocks);
            }
        }
        Label::Binop(op) => {
            blocks[block].push(ControlItem::Binop(*op));
            for child in &node.children {
                flatten(child, block, blocks);
            }
        }
        Label::Unop(op) => {
            blocks[block].push(ControlItem::Unop(*op));
            flatten(&node.children[0], block, blocks);
        }
        Label::Id(name) => blocks[block].push(ControlItem::Name(name.clone())),
        Label::Int(value) => blocks[block].push(ControlItem::Integer(*value)),
        Label::Str(value) => blocks[block].push(ControlItem::Str(value.clone())),
        Label::True => blocks[block].push(ControlItem::Truth(true)),
        Label::False => blocks[block].push(ControlItem::Truth(false)),
        Label::Nil => blocks[block].push(ControlItem::Nil),
        Label::Dummy => blocks[block].push(ControlItem::Dummy),
        Label::Ystar => blocks[block].push(ControlItem::Ystar),
        // Surface labels cannot survive standardization.
        other => unreachable!("non-core label in standardized tree: {other}"),
    }
}

/// Read an abstraction's parameter node into its spec.
fn param_spec(param: &TreeNode) -> ParamSpec {
    match &param.label {
        Label::Id(name) => ParamSpec::Single(name.clone()),
        Label::Comma => ParamSpec::Tuple(
            param
                .children
                .iter()
                .map(|child| match &child.label {
                    Label::Id(name) => name.clone(),
                    other => unreachable!("non-identifier in tuple pattern: {other}"),
                })
                .collect(),
        ),
        Label::Unit => ParamSpec::Empty,
        other => unreachable!("invalid abstraction parameter: {other}"),
    }
}
