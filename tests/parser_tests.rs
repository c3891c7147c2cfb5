use rupal::ast::{Binop, Label, TreeNode, Unop};
use rupal::lexer::lex;
use rupal::parser::parse;

fn parsed(source: &str) -> TreeNode {
    parse(lex(source).unwrap()).unwrap()
}

#[test]
fn parse_let_definition() {
    let tree = parsed("let x = 3 in x");
    assert_eq!(tree.label, Label::Let);
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].label, Label::Equal);
    assert_eq!(tree.children[1].label, Label::Id("x".to_string()));
}

#[test]
fn parse_where_definition() {
    let tree = parsed("x + 1 where x = 3");
    assert_eq!(tree.label, Label::Where);
    assert_eq!(tree.children[0].label, Label::Binop(Binop::Plus));
    assert_eq!(tree.children[1].label, Label::Equal);
}

#[test]
fn parse_function_form() {
    let tree = parsed("let Add x y = x + y in Add");
    let def = &tree.children[0];
    assert_eq!(def.label, Label::FunctionForm);
    assert_eq!(def.children.len(), 4);
    assert_eq!(def.children[0].label, Label::Id("Add".to_string()));
    assert_eq!(def.children[1].label, Label::Id("x".to_string()));
    assert_eq!(def.children[2].label, Label::Id("y".to_string()));
}

#[test]
fn parse_tuple_pattern_binding() {
    let tree = parsed("let f (x, y) = x in f");
    let def = &tree.children[0];
    assert_eq!(def.label, Label::FunctionForm);
    assert_eq!(def.children[1].label, Label::Comma);
    assert_eq!(def.children[1].children.len(), 2);
}

#[test]
fn parse_parameterless_lambda() {
    let tree = parsed("fn () . 3");
    assert_eq!(tree.label, Label::Lambda);
    assert_eq!(tree.children[0].label, Label::Unit);
}

#[test]
fn parse_multi_parameter_lambda() {
    let tree = parsed("fn x y . x");
    assert_eq!(tree.label, Label::Lambda);
    assert_eq!(tree.children.len(), 3);
}

#[test]
fn application_is_left_associative() {
    let tree = parsed("f x y");
    assert_eq!(tree.label, Label::Gamma);
    assert_eq!(tree.children[0].label, Label::Gamma);
    assert_eq!(tree.children[1].label, Label::Id("y".to_string()));
}

#[test]
fn application_binds_tighter_than_operators() {
    let tree = parsed("f x + 1");
    assert_eq!(tree.label, Label::Binop(Binop::Plus));
    assert_eq!(tree.children[0].label, Label::Gamma);
}

#[test]
fn parse_infix_at_application() {
    let tree = parsed("1 @ Add 2");
    assert_eq!(tree.label, Label::At);
    assert_eq!(tree.children.len(), 3);
    assert_eq!(tree.children[1].label, Label::Id("Add".to_string()));
}

#[test]
fn parse_conditional() {
    let tree = parsed("x eq 1 -> 2 | 3");
    assert_eq!(tree.label, Label::Cond);
    assert_eq!(tree.children.len(), 3);
    assert_eq!(tree.children[0].label, Label::Binop(Binop::Eq));
}

#[test]
fn conditional_nests_to_the_right() {
    let tree = parsed("a -> 1 | b -> 2 | 3");
    assert_eq!(tree.label, Label::Cond);
    assert_eq!(tree.children[2].label, Label::Cond);
}

#[test]
fn symbolic_relationals_are_canonicalized() {
    assert_eq!(parsed("1 > 2").label, Label::Binop(Binop::Gr));
    assert_eq!(parsed("1 >= 2").label, Label::Binop(Binop::Ge));
    assert_eq!(parsed("1 < 2").label, Label::Binop(Binop::Ls));
    assert_eq!(parsed("1 <= 2").label, Label::Binop(Binop::Le));
}

#[test]
fn power_is_right_associative() {
    let tree = parsed("2 ** 3 ** 2");
    assert_eq!(tree.label, Label::Binop(Binop::Power));
    assert_eq!(tree.children[1].label, Label::Binop(Binop::Power));
}

#[test]
fn leading_minus_is_negation() {
    let tree = parsed("-x + 1");
    assert_eq!(tree.label, Label::Binop(Binop::Plus));
    assert_eq!(tree.children[0].label, Label::Unop(Unop::Neg));
}

#[test]
fn parse_tuple_expression() {
    let tree = parsed("1, 2, 3");
    assert_eq!(tree.label, Label::Tau);
    assert_eq!(tree.children.len(), 3);
}

#[test]
fn parse_and_definitions() {
    let tree = parsed("let x = 1 and y = 2 in x");
    let def = &tree.children[0];
    assert_eq!(def.label, Label::And);
    assert_eq!(def.children.len(), 2);
}

#[test]
fn parse_within_definition() {
    let tree = parsed("let x = 1 within y = x in y");
    let def = &tree.children[0];
    assert_eq!(def.label, Label::Within);
    assert_eq!(def.children.len(), 2);
}

#[test]
fn parse_rec_definition() {
    let tree = parsed("let rec f n = n in f");
    let def = &tree.children[0];
    assert_eq!(def.label, Label::Rec);
    assert_eq!(def.children[0].label, Label::FunctionForm);
}

#[test]
fn error_on_missing_in() {
    let err = parse(lex("let x = 3").unwrap()).unwrap_err();
    assert_eq!(err.found, "end of input");
}

#[test]
fn error_on_trailing_tokens() {
    let err = parse(lex("1 + 2 )").unwrap()).unwrap_err();
    assert_eq!(err.expected, "end of input");
    assert_eq!(err.found, "')'");
}

#[test]
fn error_reports_line() {
    let err = parse(lex("let x =\n  in x").unwrap()).unwrap_err();
    assert_eq!(err.line, 2);
}
