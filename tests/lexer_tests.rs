use rupal::lexer::{lex, Token};

fn tokens(source: &str) -> Vec<Token> {
    lex(source)
        .unwrap()
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

#[test]
fn lex_keywords() {
    let tokens = tokens("let in where rec fn within and");
    assert_eq!(
        tokens,
        vec![
            Token::Let,
            Token::In,
            Token::Where,
            Token::Rec,
            Token::Fn,
            Token::Within,
            Token::And,
        ]
    );
}

#[test]
fn lex_identifiers() {
    let tokens = tokens("foo Bar_3 letter");
    assert!(matches!(&tokens[0], Token::Identifier(name) if name == "foo"));
    assert!(matches!(&tokens[1], Token::Identifier(name) if name == "Bar_3"));
    // Keyword prefixes do not split identifiers.
    assert!(matches!(&tokens[2], Token::Identifier(name) if name == "letter"));
}

#[test]
fn lex_integers() {
    let tokens = tokens("0 42 123");
    assert_eq!(
        tokens,
        vec![Token::Integer(0), Token::Integer(42), Token::Integer(123)]
    );
}

#[test]
fn lex_string_literals() {
    let tokens = tokens("'hello' ''");
    assert_eq!(
        tokens,
        vec![
            Token::StringLiteral("hello".to_string()),
            Token::StringLiteral(String::new()),
        ]
    );
}

#[test]
fn lex_operators() {
    let tokens = tokens("+ - * / ** -> | & @ = .");
    assert_eq!(
        tokens,
        vec![
            Token::Plus,
            Token::Minus,
            Token::Star,
            Token::Slash,
            Token::DoubleStar,
            Token::Arrow,
            Token::Bar,
            Token::Ampersand,
            Token::At,
            Token::Equals,
            Token::Dot,
        ]
    );
}

#[test]
fn lex_symbolic_relationals() {
    let tokens = tokens("> >= < <=");
    assert_eq!(
        tokens,
        vec![
            Token::Greater,
            Token::GreaterEquals,
            Token::Less,
            Token::LessEquals,
        ]
    );
}

#[test]
fn double_star_is_one_token() {
    assert_eq!(tokens("2**3").len(), 3);
}

#[test]
fn lex_skips_comments() {
    let tokens = tokens("1 // the rest of the line\n2");
    assert_eq!(tokens, vec![Token::Integer(1), Token::Integer(2)]);
}

#[test]
fn lex_tracks_lines() {
    let spanned = lex("let x\n  = 3\nin x").unwrap();
    let lines: Vec<u32> = spanned.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 2, 3, 3]);
}

#[test]
fn lex_rejects_stray_characters() {
    let err = lex("let x = #").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.text, "#");
}

#[test]
fn lex_reports_error_line() {
    let err = lex("1\n2\n$").unwrap_err();
    assert_eq!(err.line, 3);
}
