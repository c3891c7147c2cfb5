//! # Tree model shared by the raw and standardized representations
//!
//! Both the tree built by the parser and the tree produced by the
//! standardizer are plain labeled trees: a [`Label`] plus an ordered list
//! of owned children. Leaf labels (identifiers, literals, `nil`, `dummy`)
//! carry their payload in the label itself; interior labels name the
//! construct (`let`, `lambda`, `gamma`, ...). There is no sharing between
//! nodes, so the ownership model is a straightforward recursive struct.
//!
//! The [`std::fmt::Display`] impl for [`Label`] renders the conventional
//! RPAL spelling of each node (`<ID:x>`, `<INT:5>`, `gamma`, ...), which
//! is what the preorder tree printer in [`crate::fmt`] emits.

use std::fmt;

/// Binary operator tags, using the canonical RPAL names.
///
/// The symbolic relationals (`>`, `>=`, `<`, `<=`) are canonicalized to
/// `gr`/`ge`/`ls`/`le` by the parser, so only one spelling reaches the
/// tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binop {
    Plus,
    Minus,
    Times,
    Div,
    Power,
    Gr,
    Ge,
    Ls,
    Le,
    Eq,
    Ne,
    Or,
    Amp,
    Aug,
}

impl fmt::Display for Binop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Binop::Plus => "+",
            Binop::Minus => "-",
            Binop::Times => "*",
            Binop::Div => "/",
            Binop::Power => "**",
            Binop::Gr => "gr",
            Binop::Ge => "ge",
            Binop::Ls => "ls",
            Binop::Le => "le",
            Binop::Eq => "eq",
            Binop::Ne => "ne",
            Binop::Or => "or",
            Binop::Amp => "&",
            Binop::Aug => "aug",
        };
        f.write_str(name)
    }
}

/// Unary operator tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unop {
    Not,
    Neg,
}

impl fmt::Display for Unop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unop::Not => f.write_str("not"),
            Unop::Neg => f.write_str("neg"),
        }
    }
}

/// Node label: leaf tags carry their literal payload, interior tags name
/// the construct that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    // Leaves
    Id(String),
    Int(i64),
    Str(String),
    True,
    False,
    Nil,
    Dummy,
    /// The fixed-point marker introduced by standardizing `rec`.
    Ystar,
    /// The `()` parameter binding of a parameterless `fn`.
    Unit,

    // Surface constructs, removed by standardization
    Let,
    Where,
    Within,
    And,
    Rec,
    FunctionForm,
    At,

    // Core calculus
    Lambda,
    Gamma,
    Tau,
    Cond,
    Equal,
    Comma,

    Binop(Binop),
    Unop(Unop),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Id(name) => write!(f, "<ID:{name}>"),
            Label::Int(value) => write!(f, "<INT:{value}>"),
            Label::Str(value) => write!(f, "<STR:'{value}'>"),
            Label::True => f.write_str("<true>"),
            Label::False => f.write_str("<false>"),
            Label::Nil => f.write_str("<nil>"),
            Label::Dummy => f.write_str("<dummy>"),
            Label::Ystar => f.write_str("<Y*>"),
            Label::Unit => f.write_str("()"),
            Label::Let => f.write_str("let"),
            Label::Where => f.write_str("where"),
            Label::Within => f.write_str("within"),
            Label::And => f.write_str("and"),
            Label::Rec => f.write_str("rec"),
            Label::FunctionForm => f.write_str("function_form"),
            Label::At => f.write_str("@"),
            Label::Lambda => f.write_str("lambda"),
            Label::Gamma => f.write_str("gamma"),
            Label::Tau => f.write_str("tau"),
            Label::Cond => f.write_str("->"),
            Label::Equal => f.write_str("="),
            Label::Comma => f.write_str(","),
            Label::Binop(op) => write!(f, "{op}"),
            Label::Unop(op) => write!(f, "{op}"),
        }
    }
}

/// A node of the raw or standardized tree.
///
/// Nodes own their children exclusively; trees are built once (by the
/// parser or the standardizer) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub label: Label,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A leaf node.
    pub fn leaf(label: Label) -> Self {
        TreeNode {
            label,
            children: Vec::new(),
        }
    }

    /// An interior node with the given ordered children.
    pub fn node(label: Label, children: Vec<TreeNode>) -> Self {
        TreeNode { label, children }
    }

    /// Shorthand for an identifier leaf.
    pub fn id(name: impl Into<String>) -> Self {
        TreeNode::leaf(Label::Id(name.into()))
    }
}
