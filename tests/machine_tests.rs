use rupal::cse::{EvalError, Machine, Value};
use rupal::fmt::render_value;
use rupal::lexer::lex;
use rupal::parser::parse;
use rupal::standardize::standardize;

fn eval(source: &str) -> Result<Value, EvalError> {
    let tree = standardize(parse(lex(source).unwrap()).unwrap());
    let mut sink = Vec::new();
    Machine::with_output(&tree, &mut sink).run()
}

fn eval_with_output(source: &str) -> (Value, String) {
    let tree = standardize(parse(lex(source).unwrap()).unwrap());
    let mut sink = Vec::new();
    let value = Machine::with_output(&tree, &mut sink).run().unwrap();
    (value, String::from_utf8(sink).unwrap())
}

fn int(source: &str) -> i64 {
    match eval(source).unwrap() {
        Value::Integer(v) => v,
        other => panic!("expected integer, got {other:?}"),
    }
}

fn truth(source: &str) -> bool {
    match eval(source).unwrap() {
        Value::Truth(b) => b,
        other => panic!("expected truthvalue, got {other:?}"),
    }
}

#[test]
fn eval_arithmetic() {
    assert_eq!(int("1 + 2 * 3"), 7);
    assert_eq!(int("10 - 2 - 3"), 5);
    assert_eq!(int("7 / 2"), 3);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(int("2 ** 3 ** 2"), 512);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(int("(0 - 7) / 2"), -3);
    assert_eq!(int("7 / (0 - 2)"), -3);
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(
        eval("1 / 0").unwrap_err(),
        EvalError::Arithmetic("division by zero")
    );
}

#[test]
fn let_binds_name() {
    assert_eq!(int("let X = 3 in X + 1"), 4);
}

#[test]
fn where_binds_name() {
    assert_eq!(int("X * X where X = 5"), 25);
}

#[test]
fn curried_function_form() {
    assert_eq!(int("let Add x y = x + y in Add 3 4"), 7);
}

#[test]
fn lambda_application() {
    assert_eq!(int("(fn x . x * 2) 21"), 42);
}

#[test]
fn inner_binding_shadows_outer() {
    assert_eq!(int("let x = 1 in let x = 2 in x"), 2);
}

#[test]
fn closure_captures_definition_environment() {
    assert_eq!(int("let x = 10 in let f y = x + y in let x = 0 in f 5"), 15);
}

#[test]
fn and_binds_simultaneously() {
    // The old x is still visible while the right-hand sides evaluate.
    assert_eq!(int("let x = 1 in let x = 2 and y = x in x + y"), 3);
}

#[test]
fn within_chains_definitions() {
    assert_eq!(int("let x = 3 within y = x * x in y"), 9);
}

#[test]
fn recursive_factorial() {
    assert_eq!(
        int("let rec Fact n = n eq 0 -> 1 | n * Fact (n - 1) in Fact 5"),
        120
    );
}

#[test]
fn deep_recursion() {
    assert_eq!(
        int("let rec Sum n = n eq 0 -> 0 | n + Sum (n - 1) in Sum 100"),
        5050
    );
}

#[test]
fn conditional_takes_then_branch() {
    assert_eq!(int("2 > 1 -> 10 | 20"), 10);
}

#[test]
fn conditional_takes_else_branch() {
    assert_eq!(int("1 > 2 -> 10 | 20"), 20);
}

#[test]
fn untaken_branch_is_not_evaluated() {
    assert_eq!(int("true -> 1 | 1 / 0"), 1);
}

#[test]
fn conditional_requires_truthvalue() {
    assert!(matches!(
        eval("1 -> 2 | 3").unwrap_err(),
        EvalError::Type { context: "conditional", .. }
    ));
}

#[test]
fn tuple_selection_is_one_indexed() {
    assert_eq!(int("let T = (10, 20, 30) in T 2"), 20);
}

#[test]
fn tuple_selection_out_of_range_fails() {
    assert_eq!(
        eval("let T = (10, 20, 30) in T 4").unwrap_err(),
        EvalError::Selection { index: 4, len: 3 }
    );
}

#[test]
fn tuple_pattern_destructures_argument() {
    assert_eq!(int("let f (x, y) = x + y in f (3, 4)"), 7);
}

#[test]
fn tuple_pattern_arity_mismatch_fails() {
    assert_eq!(
        eval("let f (x, y) = x in f (1, 2, 3)").unwrap_err(),
        EvalError::Destructure {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn parameterless_function() {
    assert_eq!(int("let f () = 42 in f nil"), 42);
}

#[test]
fn aug_extends_tuples() {
    assert_eq!(render_value(&eval("nil aug 1 aug 2").unwrap()), "(1, 2)");
    assert_eq!(int("let T = (1, 2) aug 3 in T 3"), 3);
}

#[test]
fn boolean_operators() {
    assert!(truth("true or false"));
    assert!(!truth("true & false"));
    assert!(truth("not false"));
}

#[test]
fn relational_operators_on_strings() {
    assert!(truth("'abc' ls 'abd'"));
    assert!(truth("'b' ge 'a'"));
}

#[test]
fn equality_operators() {
    assert!(truth("'abc' eq 'abc'"));
    assert!(truth("1 ne 2"));
    assert!(truth("true eq true"));
}

#[test]
fn undeclared_identifier_fails() {
    assert_eq!(
        eval("x + 1").unwrap_err(),
        EvalError::Lookup("x".to_string())
    );
}

#[test]
fn builtin_string_functions() {
    assert_eq!(eval("Stem 'hello'").unwrap(), Value::Str("h".to_string()));
    assert_eq!(eval("Stern 'hello'").unwrap(), Value::Str("ello".to_string()));
    assert_eq!(eval("Stem ''").unwrap(), Value::Str(String::new()));
    assert_eq!(eval("Stern ''").unwrap(), Value::Str(String::new()));
}

#[test]
fn conc_is_curried() {
    assert_eq!(
        eval("Conc 'ab' 'cd'").unwrap(),
        Value::Str("abcd".to_string())
    );
    // The partial application is a first-class value.
    assert_eq!(
        render_value(&eval("let c = Conc 'ab' in (c 'x', c 'y')").unwrap()),
        "(abx, aby)"
    );
}

#[test]
fn order_and_null() {
    assert_eq!(int("Order (1, 2, 3)"), 3);
    assert_eq!(int("Order nil"), 0);
    assert!(truth("Null nil"));
    assert!(!truth("Null (1, 2)"));
}

#[test]
fn type_predicates() {
    assert!(truth("Isinteger 5"));
    assert!(!truth("Isinteger 'x'"));
    assert!(truth("Isstring 'x'"));
    assert!(truth("Istruthvalue false"));
    assert!(truth("Istuple (1, 2)"));
    assert!(truth("Istuple nil"));
    assert!(truth("Isfunction (fn x . x)"));
    assert!(truth("Isfunction Print"));
    assert!(truth("Isdummy dummy"));
}

#[test]
fn itos_converts() {
    assert_eq!(eval("ItoS 42").unwrap(), Value::Str("42".to_string()));
    assert_eq!(eval("ItoS (0 - 7)").unwrap(), Value::Str("-7".to_string()));
}

#[test]
fn print_writes_and_returns_dummy() {
    let (value, output) = eval_with_output("Print (1 + 2)");
    assert_eq!(value, Value::Dummy);
    assert_eq!(output, "3");
}

#[test]
fn print_unescapes_newlines_and_tabs() {
    let (_, output) = eval_with_output("Print 'a\\nb\\tc'");
    assert_eq!(output, "a\nb\tc");
}

#[test]
fn print_renders_tuples() {
    let (_, output) = eval_with_output("Print ('x', 1, true, nil)");
    assert_eq!(output, "(x, 1, true, nil)");
}

#[test]
fn print_accepts_lowercase_spelling() {
    let (_, output) = eval_with_output("print 'ok'");
    assert_eq!(output, "ok");
}

#[test]
fn render_final_values() {
    assert_eq!(render_value(&eval("1, 2").unwrap()), "(1, 2)");
    assert_eq!(render_value(&eval("nil").unwrap()), "nil");
    assert_eq!(render_value(&eval("'str'").unwrap()), "str");
    assert_eq!(render_value(&eval("dummy").unwrap()), "");
}

#[test]
fn arithmetic_type_errors() {
    assert!(matches!(
        eval("1 + 'x'").unwrap_err(),
        EvalError::Type { .. }
    ));
    assert!(matches!(
        eval("true + 1").unwrap_err(),
        EvalError::Type { .. }
    ));
    assert!(matches!(
        eval("not 1").unwrap_err(),
        EvalError::Type { .. }
    ));
}

#[test]
fn applying_a_non_function_fails() {
    assert!(matches!(
        eval("5 6").unwrap_err(),
        EvalError::Type { context: "application", .. }
    ));
}
