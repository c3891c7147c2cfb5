//! Rendering of runtime values.

use crate::cse::{ParamSpec, Value};

/// Render a value the way the evaluator reports results.
///
/// Strings render verbatim without quotes, the empty tuple renders as
/// `nil`, and `dummy` renders as nothing at all.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(v) => v.to_string(),
        Value::Truth(b) => b.to_string(),
        Value::Str(s) => s.clone(),
        Value::Tuple(elements) if elements.is_empty() => "nil".to_string(),
        Value::Tuple(elements) => {
            let inner: Vec<String> = elements.iter().map(render_value).collect();
            format!("({})", inner.join(", "))
        }
        Value::Lambda(closure) => {
            format!("[lambda closure: {}: {}]", param(&closure.param), closure.body)
        }
        Value::Eta(eta) => format!(
            "[eta closure: {}: {}]",
            param(&eta.closure.param),
            eta.closure.body
        ),
        Value::Builtin(builtin) => format!("[builtin: {}]", builtin.name()),
        Value::Ystar => "[Y*]".to_string(),
        Value::Dummy => String::new(),
    }
}

/// Render a value for the `Print` built-in.
///
/// Identical to [`render_value`] except that `\n` and `\t` escape
/// sequences in a string argument are expanded to the characters they
/// name.
pub fn render_printed(value: &Value) -> String {
    match value {
        Value::Str(s) => unescape(s),
        Value::Tuple(elements) if !elements.is_empty() => {
            let inner: Vec<String> = elements.iter().map(render_printed).collect();
            format!("({})", inner.join(", "))
        }
        other => render_value(other),
    }
}

fn param(spec: &ParamSpec) -> String {
    match spec {
        ParamSpec::Single(name) => name.clone(),
        ParamSpec::Tuple(names) => names.join(", "),
        ParamSpec::Empty => "()".to_string(),
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
