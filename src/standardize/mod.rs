//! # Standardization
//!
//! Rewrites the raw tree into the core calculus the CSE machine executes:
//! identifiers and literals, `gamma` (application), `lambda`
//! (abstraction), `tau` (tuple construction), `->` (conditional) and the
//! `Y*` fixed-point marker. Every surface binding construct (`let`,
//! `where`, `within`, `and`, `rec`, function forms, infix `@`
//! application, multi-parameter lambdas) is lowered to applications of
//! abstractions.
//!
//! The rewrite is bottom-up: children are standardized before the rule
//! for their parent fires, so by the time a `let` is rewritten its
//! definition child has already collapsed to a `=` node. Trees already in
//! the core calculus are fixed points of [`standardize`].
//!
//! The pass is total over well-formed raw trees; malformed shapes are a
//! parser-level concern and are passed through unchanged rather than
//! reported here.

use crate::ast::{Label, TreeNode};

/// Standardize a raw tree into the core calculus.
pub fn standardize(node: TreeNode) -> TreeNode {
    let TreeNode { label, children } = node;
    let children = children.into_iter().map(standardize).collect();
    rewrite(label, children)
}

fn rewrite(label: Label, mut children: Vec<TreeNode>) -> TreeNode {
    match label {
        // let X = E1 in E2  =>  gamma(lambda(X, E2), E1)
        Label::Let if is_equal(children.first()) && children.len() == 2 => {
            let body = children.pop().expect("let body");
            let def = children.pop().expect("let definition");
            let (name, value) = split_binding(def);
            gamma(lambda(name, body), value)
        }

        // E1 where X = E2  =>  gamma(lambda(X, E1), E2)
        Label::Where if is_equal(children.get(1)) && children.len() == 2 => {
            let def = children.pop().expect("where definition");
            let body = children.pop().expect("where body");
            let (name, value) = split_binding(def);
            gamma(lambda(name, body), value)
        }

        // F X1 ... Xn = E  =>  F = lambda(X1, ... lambda(Xn, E))
        Label::FunctionForm if children.len() >= 3 => {
            let body = children.pop().expect("function body");
            let name = children.remove(0);
            equal(name, curry(children, body))
        }

        // fn X1 X2 ... Xn . E  =>  lambda(X1, lambda(X2, ... lambda(Xn, E)))
        //
        // A two-child lambda is already curried; a tuple-pattern parameter
        // is a single `,` child and stays on one abstraction.
        Label::Lambda if children.len() > 2 => {
            let body = children.pop().expect("lambda body");
            curry(children, body)
        }

        // (X1 = E1) within (X2 = E2)  =>  X2 = gamma(lambda(X1, E2), E1)
        Label::Within
            if children.len() == 2 && children.iter().all(|c| c.label == Label::Equal) =>
        {
            let outer = children.pop().expect("within outer definition");
            let inner = children.pop().expect("within inner definition");
            let (inner_name, inner_value) = split_binding(inner);
            let (outer_name, outer_value) = split_binding(outer);
            equal(outer_name, gamma(lambda(inner_name, outer_value), inner_value))
        }

        // E1 @ N E2  =>  gamma(gamma(N, E1), E2)
        Label::At if children.len() == 3 => {
            let right = children.pop().expect("infix right operand");
            let name = children.pop().expect("infix operator name");
            let left = children.pop().expect("infix left operand");
            gamma(gamma(name, left), right)
        }

        // X1 = E1 and ... and Xn = En  =>  (X1,...,Xn) = (E1,...,En)
        Label::And if children.iter().all(|c| c.label == Label::Equal) => {
            let mut names = Vec::with_capacity(children.len());
            let mut values = Vec::with_capacity(children.len());
            for def in children {
                let (name, value) = split_binding(def);
                names.push(name);
                values.push(value);
            }
            equal(
                TreeNode::node(Label::Comma, names),
                TreeNode::node(Label::Tau, values),
            )
        }

        // rec X = E  =>  X = gamma(Y*, lambda(X, E))
        Label::Rec if is_equal(children.first()) && children.len() == 1 => {
            let def = children.pop().expect("rec definition");
            let (name, value) = split_binding(def);
            let fixed = gamma(
                TreeNode::leaf(Label::Ystar),
                lambda(name.clone(), value),
            );
            equal(name, fixed)
        }

        // Conditionals, operators, gamma, tau, literals and identifiers
        // pass through with their children already standardized.
        _ => TreeNode::node(label, children),
    }
}

fn is_equal(node: Option<&TreeNode>) -> bool {
    matches!(node, Some(TreeNode { label: Label::Equal, .. }))
}

/// Split a `=` node into its bound name (or tuple pattern) and value.
fn split_binding(def: TreeNode) -> (TreeNode, TreeNode) {
    let mut children = def.children;
    let value = children.pop().expect("binding value");
    let name = children.pop().expect("binding name");
    (name, value)
}

/// Nest abstractions around `body`, rightmost parameter innermost.
fn curry(params: Vec<TreeNode>, body: TreeNode) -> TreeNode {
    params
        .into_iter()
        .rev()
        .fold(body, |inner, param| lambda(param, inner))
}

fn gamma(rator: TreeNode, rand: TreeNode) -> TreeNode {
    TreeNode::node(Label::Gamma, vec![rator, rand])
}

fn lambda(param: TreeNode, body: TreeNode) -> TreeNode {
    TreeNode::node(Label::Lambda, vec![param, body])
}

fn equal(lhs: TreeNode, rhs: TreeNode) -> TreeNode {
    TreeNode::node(Label::Equal, vec![lhs, rhs])
}
