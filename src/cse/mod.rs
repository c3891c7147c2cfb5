//! Evaluation of standardized trees.
//!
//! The tree is first linearized into control blocks ([`control`]), then
//! reduced by the [`Machine`] against an environment chain ([`env`])
//! seeded with the built-in functions.

mod control;
mod env;
mod error;
mod machine;
mod ops;
mod value;

pub use control::{linearize, ControlBlock, ControlItem};
pub use env::Environment;
pub use error::EvalError;
pub use machine::Machine;
pub use value::{Builtin, EtaClosure, LambdaClosure, ParamSpec, Value};
