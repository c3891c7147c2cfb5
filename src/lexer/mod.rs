//! # Lexical analysis
//!
//! Turns RPAL source text into a flat sequence of typed tokens. Keywords
//! are fixed tokens and win over the identifier pattern on exact matches,
//! which folds the classic screener pass (identifier-to-keyword
//! reclassification, whitespace and comment removal) into the lexer
//! itself. Each token records the 1-based source line it starts on, for
//! syntax error messages.

use logos::Logos;
use thiserror::Error;

/// A single RPAL token.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Keywords
    #[token("let")]
    Let,
    #[token("in")]
    In,
    #[token("where")]
    Where,
    #[token("rec")]
    Rec,
    #[token("fn")]
    Fn,
    #[token("aug")]
    Aug,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("gr")]
    Gr,
    #[token("ge")]
    Ge,
    #[token("ls")]
    Ls,
    #[token("le")]
    Le,
    #[token("eq")]
    Eq,
    #[token("ne")]
    Ne,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nil")]
    Nil,
    #[token("dummy")]
    Dummy,
    #[token("within")]
    Within,
    #[token("and")]
    And,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    DoubleStar,
    #[token("->")]
    Arrow,
    #[token("|")]
    Bar,
    #[token("&")]
    Ampersand,
    #[token("@")]
    At,
    #[token("=")]
    Equals,
    #[token(".")]
    Dot,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEquals,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEquals,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),

    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        Some(s[1..s.len() - 1].to_string())
    })]
    StringLiteral(String),

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| Some(lex.slice().to_string()))]
    Identifier(String),
}

impl Token {
    /// Human-readable description of the token for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("identifier '{name}'"),
            Token::Integer(value) => format!("integer '{value}'"),
            Token::StringLiteral(value) => format!("string '{value}'"),
            Token::Let => "'let'".to_string(),
            Token::In => "'in'".to_string(),
            Token::Where => "'where'".to_string(),
            Token::Rec => "'rec'".to_string(),
            Token::Fn => "'fn'".to_string(),
            Token::Aug => "'aug'".to_string(),
            Token::Or => "'or'".to_string(),
            Token::Not => "'not'".to_string(),
            Token::Gr => "'gr'".to_string(),
            Token::Ge => "'ge'".to_string(),
            Token::Ls => "'ls'".to_string(),
            Token::Le => "'le'".to_string(),
            Token::Eq => "'eq'".to_string(),
            Token::Ne => "'ne'".to_string(),
            Token::True => "'true'".to_string(),
            Token::False => "'false'".to_string(),
            Token::Nil => "'nil'".to_string(),
            Token::Dummy => "'dummy'".to_string(),
            Token::Within => "'within'".to_string(),
            Token::And => "'and'".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::DoubleStar => "'**'".to_string(),
            Token::Arrow => "'->'".to_string(),
            Token::Bar => "'|'".to_string(),
            Token::Ampersand => "'&'".to_string(),
            Token::At => "'@'".to_string(),
            Token::Equals => "'='".to_string(),
            Token::Dot => "'.'".to_string(),
            Token::Greater => "'>'".to_string(),
            Token::GreaterEquals => "'>='".to_string(),
            Token::Less => "'<'".to_string(),
            Token::LessEquals => "'<='".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Semicolon => "';'".to_string(),
            Token::Comma => "','".to_string(),
        }
    }
}

/// A token together with the source line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub line: u32,
}

/// Error raised when the source contains text no token pattern accepts.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid token on line {line}: '{text}'")]
pub struct LexError {
    pub line: u32,
    pub text: String,
}

/// Tokenize a complete source program.
pub fn lex(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut line: u32 = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        line += source[scanned..span.start].matches('\n').count() as u32;
        scanned = span.start;

        match result {
            Ok(token) => tokens.push(SpannedToken { token, line }),
            Err(_) => {
                return Err(LexError {
                    line,
                    text: source[span].to_string(),
                })
            }
        }
    }

    Ok(tokens)
}
