//! Runtime errors raised by the CSE machine.
//!
//! Every variant is fatal: the machine never retries or recovers, it
//! aborts the evaluation and hands the error to the caller. The
//! standardizer and linearizer are total over well-formed trees and have
//! no error type of their own.

use thiserror::Error;

use super::value::Value;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An identifier was not found anywhere in the environment chain.
    #[error("undeclared identifier: {0}")]
    Lookup(String),

    /// Tuple selection with an index outside `1..=len`.
    #[error("cannot select element {index} of a tuple of order {len}")]
    Selection { index: i64, len: usize },

    /// Tuple-pattern parameter applied to a tuple of the wrong length.
    #[error("tuple pattern binds {expected} names but the argument has {found} elements")]
    Destructure { expected: usize, found: usize },

    /// An operator or built-in saw a value of the wrong kind.
    #[error("type error in {context}: expected {expected}, found {found}")]
    Type {
        context: &'static str,
        expected: &'static str,
        found: String,
    },

    /// Division by zero, negative exponent, or integer overflow.
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),

    /// The control/stack invariants were violated. This indicates a
    /// defect in linearization or in a reduction rule, never a valid
    /// outcome of a user program.
    #[error("machine state corrupted: {0}")]
    Machine(&'static str),

    /// The `Print` built-in failed to write to its output stream.
    #[error("output failed: {0}")]
    Output(String),
}

impl EvalError {
    /// Type error describing the offending value by its kind.
    pub fn type_mismatch(context: &'static str, expected: &'static str, found: &Value) -> Self {
        EvalError::Type {
            context,
            expected,
            found: found.kind().to_string(),
        }
    }
}
