//! # Parsing
//!
//! Recursive-descent parser from the token stream to the raw tree the
//! standardizer consumes. [`state`] holds the token cursor and the syntax
//! error type; [`grammar`] has one function per nonterminal of the RPAL
//! grammar. The parser builds trees bottom-up and performs no rewriting
//! beyond canonicalizing the symbolic relational operators.

mod grammar;
mod state;

pub use state::{ParseError, ParseResult, ParseState};

use crate::ast::TreeNode;
use crate::lexer::SpannedToken;

/// Parse a complete program from its screened token stream.
pub fn parse(tokens: Vec<SpannedToken>) -> ParseResult<TreeNode> {
    let mut state = ParseState::new(tokens);
    let tree = grammar::expression(&mut state)?;
    if !state.at_end() {
        return Err(state.expected("end of input"));
    }
    Ok(tree)
}
