use thiserror::Error;

use crate::lexer::{SpannedToken, Token};

/// Fatal syntax error, carrying the source line and a description of what
/// was expected versus found.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("syntax error on line {line}: expected {expected}, found {found}")]
pub struct ParseError {
    pub line: u32,
    pub expected: String,
    pub found: String,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Cursor over the screened token stream.
pub struct ParseState {
    tokens: Vec<SpannedToken>,
    index: usize,
}

impl ParseState {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|spanned| &spanned.token)
    }

    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).map(|s| s.token.clone());
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// True if the next token equals `token` (payload variants compare by
    /// payload too, so this is only used with unit-like tokens).
    pub fn at(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    /// Consume the next token if it equals `token`.
    pub fn eat(&mut self, token: &Token) -> bool {
        if self.at(token) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token, failing unless it equals `token`.
    pub fn expect(&mut self, token: &Token) -> ParseResult<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.expected(&token.describe()))
        }
    }

    /// Consume an identifier token and return its name.
    pub fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.index += 1;
                Ok(name)
            }
            _ => Err(self.expected("identifier")),
        }
    }

    /// Build a syntax error describing the current token.
    pub fn expected(&self, expected: &str) -> ParseError {
        let (line, found) = match self.tokens.get(self.index) {
            Some(spanned) => (spanned.line, spanned.token.describe()),
            None => (
                self.tokens.last().map(|s| s.line).unwrap_or(1),
                "end of input".to_string(),
            ),
        };
        ParseError {
            line,
            expected: expected.to_string(),
            found,
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }
}
