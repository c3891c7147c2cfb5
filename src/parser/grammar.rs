//! Recursive-descent grammar for RPAL.
//!
//! One function per nonterminal, following the reference grammar's
//! E/Ew/T/Ta/Tc/B/.../Rn expression chain and the D/Da/Dr/Db/Vb/Vl
//! definition chain. Each function consumes tokens from the
//! [`ParseState`] and returns the raw tree for its nonterminal.

use crate::ast::{Binop, Label, TreeNode, Unop};
use crate::lexer::Token;

use super::state::{ParseResult, ParseState};

/// E -> 'let' D 'in' E | 'fn' Vb+ '.' E | Ew
pub(super) fn expression(s: &mut ParseState) -> ParseResult<TreeNode> {
    if s.eat(&Token::Let) {
        let def = definition(s)?;
        s.expect(&Token::In)?;
        let body = expression(s)?;
        Ok(TreeNode::node(Label::Let, vec![def, body]))
    } else if s.eat(&Token::Fn) {
        let mut children = Vec::new();
        while at_binding(s) {
            children.push(binding(s)?);
        }
        if children.is_empty() {
            return Err(s.expected("identifier or '('"));
        }
        s.expect(&Token::Dot)?;
        children.push(expression(s)?);
        Ok(TreeNode::node(Label::Lambda, children))
    } else {
        where_expression(s)
    }
}

/// Ew -> T 'where' Dr | T
fn where_expression(s: &mut ParseState) -> ParseResult<TreeNode> {
    let body = tuple_expression(s)?;
    if s.eat(&Token::Where) {
        let def = rec_definition(s)?;
        Ok(TreeNode::node(Label::Where, vec![body, def]))
    } else {
        Ok(body)
    }
}

/// T -> Ta (',' Ta)+ | Ta
fn tuple_expression(s: &mut ParseState) -> ParseResult<TreeNode> {
    let first = aug_expression(s)?;
    let mut elements = vec![first];
    while s.eat(&Token::Comma) {
        elements.push(aug_expression(s)?);
    }
    if elements.len() == 1 {
        Ok(elements.pop().expect("one element"))
    } else {
        Ok(TreeNode::node(Label::Tau, elements))
    }
}

/// Ta -> Ta 'aug' Tc | Tc
fn aug_expression(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = conditional(s)?;
    while s.eat(&Token::Aug) {
        let right = conditional(s)?;
        left = TreeNode::node(Label::Binop(Binop::Aug), vec![left, right]);
    }
    Ok(left)
}

/// Tc -> B '->' Tc '|' Tc | B
fn conditional(s: &mut ParseState) -> ParseResult<TreeNode> {
    let condition = boolean(s)?;
    if s.eat(&Token::Arrow) {
        let then_branch = conditional(s)?;
        s.expect(&Token::Bar)?;
        let else_branch = conditional(s)?;
        Ok(TreeNode::node(
            Label::Cond,
            vec![condition, then_branch, else_branch],
        ))
    } else {
        Ok(condition)
    }
}

/// B -> B 'or' Bt | Bt
fn boolean(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = boolean_term(s)?;
    while s.eat(&Token::Or) {
        let right = boolean_term(s)?;
        left = TreeNode::node(Label::Binop(Binop::Or), vec![left, right]);
    }
    Ok(left)
}

/// Bt -> Bt '&' Bs | Bs
fn boolean_term(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = boolean_secondary(s)?;
    while s.eat(&Token::Ampersand) {
        let right = boolean_secondary(s)?;
        left = TreeNode::node(Label::Binop(Binop::Amp), vec![left, right]);
    }
    Ok(left)
}

/// Bs -> 'not' Bp | Bp
fn boolean_secondary(s: &mut ParseState) -> ParseResult<TreeNode> {
    if s.eat(&Token::Not) {
        let operand = boolean_primary(s)?;
        Ok(TreeNode::node(Label::Unop(Unop::Not), vec![operand]))
    } else {
        boolean_primary(s)
    }
}

/// Bp -> A relop A | A
///
/// The symbolic relationals are canonicalized to their keyword spellings
/// here, so the tree only ever carries `gr`/`ge`/`ls`/`le`.
fn boolean_primary(s: &mut ParseState) -> ParseResult<TreeNode> {
    let left = arithmetic(s)?;
    let op = match s.peek() {
        Some(Token::Gr) | Some(Token::Greater) => Binop::Gr,
        Some(Token::Ge) | Some(Token::GreaterEquals) => Binop::Ge,
        Some(Token::Ls) | Some(Token::Less) => Binop::Ls,
        Some(Token::Le) | Some(Token::LessEquals) => Binop::Le,
        Some(Token::Eq) => Binop::Eq,
        Some(Token::Ne) => Binop::Ne,
        _ => return Ok(left),
    };
    s.advance();
    let right = arithmetic(s)?;
    Ok(TreeNode::node(Label::Binop(op), vec![left, right]))
}

/// A -> A '+' At | A '-' At | '+' At | '-' At | At
fn arithmetic(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = if s.eat(&Token::Plus) {
        term(s)?
    } else if s.eat(&Token::Minus) {
        let operand = term(s)?;
        TreeNode::node(Label::Unop(Unop::Neg), vec![operand])
    } else {
        term(s)?
    };

    loop {
        let op = match s.peek() {
            Some(Token::Plus) => Binop::Plus,
            Some(Token::Minus) => Binop::Minus,
            _ => break,
        };
        s.advance();
        let right = term(s)?;
        left = TreeNode::node(Label::Binop(op), vec![left, right]);
    }
    Ok(left)
}

/// At -> At '*' Af | At '/' Af | Af
fn term(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = factor(s)?;
    loop {
        let op = match s.peek() {
            Some(Token::Star) => Binop::Times,
            Some(Token::Slash) => Binop::Div,
            _ => break,
        };
        s.advance();
        let right = factor(s)?;
        left = TreeNode::node(Label::Binop(op), vec![left, right]);
    }
    Ok(left)
}

/// Af -> Ap '**' Af | Ap  (right-associative)
fn factor(s: &mut ParseState) -> ParseResult<TreeNode> {
    let left = infix_application(s)?;
    if s.eat(&Token::DoubleStar) {
        let right = factor(s)?;
        Ok(TreeNode::node(Label::Binop(Binop::Power), vec![left, right]))
    } else {
        Ok(left)
    }
}

/// Ap -> Ap '@' <identifier> R | R
fn infix_application(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = application(s)?;
    while s.eat(&Token::At) {
        let name = s.expect_identifier()?;
        let right = application(s)?;
        left = TreeNode::node(Label::At, vec![left, TreeNode::id(name), right]);
    }
    Ok(left)
}

/// R -> R Rn | Rn  (application by juxtaposition, left-associative)
fn application(s: &mut ParseState) -> ParseResult<TreeNode> {
    let mut left = operand(s)?;
    while at_operand(s) {
        let right = operand(s)?;
        left = TreeNode::node(Label::Gamma, vec![left, right]);
    }
    Ok(left)
}

fn at_operand(s: &ParseState) -> bool {
    matches!(
        s.peek(),
        Some(Token::Identifier(_))
            | Some(Token::Integer(_))
            | Some(Token::StringLiteral(_))
            | Some(Token::True)
            | Some(Token::False)
            | Some(Token::Nil)
            | Some(Token::Dummy)
            | Some(Token::LParen)
    )
}

/// Rn -> <identifier> | <integer> | <string> | 'true' | 'false' | 'nil'
///       | 'dummy' | '(' E ')'
fn operand(s: &mut ParseState) -> ParseResult<TreeNode> {
    match s.peek() {
        Some(Token::Identifier(name)) => {
            let name = name.clone();
            s.advance();
            Ok(TreeNode::id(name))
        }
        Some(Token::Integer(value)) => {
            let value = *value;
            s.advance();
            Ok(TreeNode::leaf(Label::Int(value)))
        }
        Some(Token::StringLiteral(value)) => {
            let value = value.clone();
            s.advance();
            Ok(TreeNode::leaf(Label::Str(value)))
        }
        Some(Token::True) => {
            s.advance();
            Ok(TreeNode::leaf(Label::True))
        }
        Some(Token::False) => {
            s.advance();
            Ok(TreeNode::leaf(Label::False))
        }
        Some(Token::Nil) => {
            s.advance();
            Ok(TreeNode::leaf(Label::Nil))
        }
        Some(Token::Dummy) => {
            s.advance();
            Ok(TreeNode::leaf(Label::Dummy))
        }
        Some(Token::LParen) => {
            s.advance();
            let inner = expression(s)?;
            s.expect(&Token::RParen)?;
            Ok(inner)
        }
        _ => Err(s.expected("literal, identifier or '('")),
    }
}

/// D -> Da 'within' D | Da
fn definition(s: &mut ParseState) -> ParseResult<TreeNode> {
    let first = and_definition(s)?;
    if s.eat(&Token::Within) {
        let second = definition(s)?;
        Ok(TreeNode::node(Label::Within, vec![first, second]))
    } else {
        Ok(first)
    }
}

/// Da -> Dr ('and' Dr)+ | Dr
fn and_definition(s: &mut ParseState) -> ParseResult<TreeNode> {
    let first = rec_definition(s)?;
    let mut defs = vec![first];
    while s.eat(&Token::And) {
        defs.push(rec_definition(s)?);
    }
    if defs.len() == 1 {
        Ok(defs.pop().expect("one definition"))
    } else {
        Ok(TreeNode::node(Label::And, defs))
    }
}

/// Dr -> 'rec' Db | Db
fn rec_definition(s: &mut ParseState) -> ParseResult<TreeNode> {
    if s.eat(&Token::Rec) {
        let def = basic_definition(s)?;
        Ok(TreeNode::node(Label::Rec, vec![def]))
    } else {
        basic_definition(s)
    }
}

/// Db -> Vl '=' E | <identifier> Vb+ '=' E | '(' D ')'
fn basic_definition(s: &mut ParseState) -> ParseResult<TreeNode> {
    if s.eat(&Token::LParen) {
        let inner = definition(s)?;
        s.expect(&Token::RParen)?;
        return Ok(inner);
    }

    let name = s.expect_identifier()?;
    let name = TreeNode::id(name);

    if s.at(&Token::Comma) || s.at(&Token::Equals) {
        // Variable binding, possibly a comma-separated list.
        let lhs = binding_list(s, name)?;
        s.expect(&Token::Equals)?;
        let value = expression(s)?;
        Ok(TreeNode::node(Label::Equal, vec![lhs, value]))
    } else {
        // Function form: name, one or more bindings, then the body.
        let mut children = vec![name];
        while at_binding(s) {
            children.push(binding(s)?);
        }
        if children.len() == 1 {
            return Err(s.expected("identifier or '('"));
        }
        s.expect(&Token::Equals)?;
        children.push(expression(s)?);
        Ok(TreeNode::node(Label::FunctionForm, children))
    }
}

fn at_binding(s: &ParseState) -> bool {
    matches!(s.peek(), Some(Token::Identifier(_)) | Some(Token::LParen))
}

/// Vb -> <identifier> | '(' Vl ')' | '(' ')'
fn binding(s: &mut ParseState) -> ParseResult<TreeNode> {
    match s.peek() {
        Some(Token::Identifier(name)) => {
            let name = name.clone();
            s.advance();
            Ok(TreeNode::id(name))
        }
        Some(Token::LParen) => {
            s.advance();
            if s.eat(&Token::RParen) {
                return Ok(TreeNode::leaf(Label::Unit));
            }
            let name = s.expect_identifier()?;
            let list = binding_list(s, TreeNode::id(name))?;
            s.expect(&Token::RParen)?;
            Ok(list)
        }
        _ => Err(s.expected("identifier or '('")),
    }
}

/// Vl -> <identifier> (',' <identifier>)*
///
/// A single identifier stays a plain leaf; two or more become a `,` node.
fn binding_list(s: &mut ParseState, first: TreeNode) -> ParseResult<TreeNode> {
    let mut names = vec![first];
    while s.eat(&Token::Comma) {
        let name = s.expect_identifier()?;
        names.push(TreeNode::id(name));
    }
    if names.len() == 1 {
        Ok(names.pop().expect("one name"))
    } else {
        Ok(TreeNode::node(Label::Comma, names))
    }
}
