//! Primitive binary and unary operators.
//!
//! Operand order: the machine hands the left operand first. All type and
//! arithmetic failures are fatal.

use crate::ast::{Binop, Unop};

use super::error::EvalError;
use super::value::Value;

pub(super) fn binary(op: Binop, left: Value, right: Value) -> Result<Value, EvalError> {
    match op {
        Binop::Plus => {
            let (a, b) = integers("'+'", left, right)?;
            a.checked_add(b)
                .map(Value::Integer)
                .ok_or(EvalError::Arithmetic("integer overflow"))
        }
        Binop::Minus => {
            let (a, b) = integers("'-'", left, right)?;
            a.checked_sub(b)
                .map(Value::Integer)
                .ok_or(EvalError::Arithmetic("integer overflow"))
        }
        Binop::Times => {
            let (a, b) = integers("'*'", left, right)?;
            a.checked_mul(b)
                .map(Value::Integer)
                .ok_or(EvalError::Arithmetic("integer overflow"))
        }
        Binop::Div => {
            let (a, b) = integers("'/'", left, right)?;
            if b == 0 {
                Err(EvalError::Arithmetic("division by zero"))
            } else {
                Ok(Value::Integer(a / b))
            }
        }
        Binop::Power => {
            let (a, b) = integers("'**'", left, right)?;
            if b < 0 {
                return Err(EvalError::Arithmetic("negative exponent"));
            }
            u32::try_from(b)
                .ok()
                .and_then(|exp| a.checked_pow(exp))
                .map(Value::Integer)
                .ok_or(EvalError::Arithmetic("integer overflow"))
        }
        Binop::Gr => compare(op, left, right, |ord| ord.is_gt()),
        Binop::Ge => compare(op, left, right, |ord| ord.is_ge()),
        Binop::Ls => compare(op, left, right, |ord| ord.is_lt()),
        Binop::Le => compare(op, left, right, |ord| ord.is_le()),
        Binop::Eq => equality(left, right).map(Value::Truth),
        Binop::Ne => equality(left, right).map(|eq| Value::Truth(!eq)),
        Binop::Or => {
            let (a, b) = truths("'or'", left, right)?;
            Ok(Value::Truth(a || b))
        }
        Binop::Amp => {
            let (a, b) = truths("'&'", left, right)?;
            Ok(Value::Truth(a && b))
        }
        Binop::Aug => augment(left, right),
    }
}

pub(super) fn unary(op: Unop, operand: Value) -> Result<Value, EvalError> {
    match op {
        Unop::Not => match operand {
            Value::Truth(b) => Ok(Value::Truth(!b)),
            other => Err(EvalError::type_mismatch("'not'", "truthvalue", &other)),
        },
        Unop::Neg => match operand {
            Value::Integer(v) => v
                .checked_neg()
                .map(Value::Integer)
                .ok_or(EvalError::Arithmetic("integer overflow")),
            other => Err(EvalError::type_mismatch("'neg'", "integer", &other)),
        },
    }
}

fn integers(context: &'static str, left: Value, right: Value) -> Result<(i64, i64), EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok((a, b)),
        (Value::Integer(_), other) | (other, _) => {
            Err(EvalError::type_mismatch(context, "integer", &other))
        }
    }
}

fn truths(context: &'static str, left: Value, right: Value) -> Result<(bool, bool), EvalError> {
    match (left, right) {
        (Value::Truth(a), Value::Truth(b)) => Ok((a, b)),
        (Value::Truth(_), other) | (other, _) => {
            Err(EvalError::type_mismatch(context, "truthvalue", &other))
        }
    }
}

/// Relational comparison over two integers or two strings.
fn compare(
    op: Binop,
    left: Value,
    right: Value,
    accept: fn(std::cmp::Ordering) -> bool,
) -> Result<Value, EvalError> {
    let context = match op {
        Binop::Gr => "'gr'",
        Binop::Ge => "'ge'",
        Binop::Ls => "'ls'",
        _ => "'le'",
    };
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Truth(accept(a.cmp(&b)))),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Truth(accept(a.cmp(&b)))),
        (_, other) => Err(EvalError::type_mismatch(
            context,
            "two integers or two strings",
            &other,
        )),
    }
}

/// Equality over matching scalar kinds.
fn equality(left: Value, right: Value) -> Result<bool, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a == b),
        (Value::Truth(a), Value::Truth(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        (_, other) => Err(EvalError::type_mismatch(
            "'eq'",
            "two values of one comparable kind",
            &other,
        )),
    }
}

/// `aug`: append to a tuple. A tuple on the right concatenates; any other
/// value is appended as a single element.
fn augment(left: Value, right: Value) -> Result<Value, EvalError> {
    match left {
        Value::Tuple(mut items) => {
            match right {
                Value::Tuple(more) => items.extend(more),
                single => items.push(single),
            }
            Ok(Value::Tuple(items))
        }
        other => Err(EvalError::type_mismatch("'aug'", "tuple", &other)),
    }
}
