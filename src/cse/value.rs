//! Runtime values of the evaluated language.

use std::rc::Rc;

use super::env::Environment;

/// Parameter specification of an abstraction: a single bound name, an
/// ordered tuple pattern, or the empty `()` binding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamSpec {
    Single(String),
    Tuple(Vec<String>),
    Empty,
}

/// A lambda closure: parameter spec, index of the body's control block,
/// and the environment captured at the point of construction.
///
/// The captured environment is fixed for the closure's lifetime; every
/// application creates a fresh child environment, so two applications of
/// the same closure never observe each other's bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaClosure {
    pub param: ParamSpec,
    pub body: usize,
    pub env: Rc<Environment>,
}

/// The recursion wrapper produced by applying the fixed-point marker to a
/// lambda closure.
///
/// The wrapped closure's parameter is the recursive definition's own
/// name, so applying the eta closure re-binds that name to the eta
/// closure itself in a fresh environment on every call. The self
/// reference is re-derived procedurally at application time; no cyclic
/// structure is ever stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EtaClosure {
    pub closure: LambdaClosure,
}

/// Built-in functions, resolved through the root environment.
///
/// `ConcWith` is the partial application of `Conc` to its first string;
/// it exists only as a runtime value and is never bound to a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
    Print,
    Stem,
    Stern,
    Conc,
    ConcWith(String),
    Order,
    Null,
    Isinteger,
    Istruthvalue,
    Isstring,
    Istuple,
    Isfunction,
    Isdummy,
    ItoS,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Print => "Print",
            Builtin::Stem => "Stem",
            Builtin::Stern => "Stern",
            Builtin::Conc | Builtin::ConcWith(_) => "Conc",
            Builtin::Order => "Order",
            Builtin::Null => "Null",
            Builtin::Isinteger => "Isinteger",
            Builtin::Istruthvalue => "Istruthvalue",
            Builtin::Isstring => "Isstring",
            Builtin::Istuple => "Istuple",
            Builtin::Isfunction => "Isfunction",
            Builtin::Isdummy => "Isdummy",
            Builtin::ItoS => "ItoS",
        }
    }
}

/// The tagged union of runtime values.
///
/// `nil` is not a separate case: it is the empty tuple, which is why
/// `Istuple nil` holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Truth(bool),
    Str(String),
    Tuple(Vec<Value>),
    Lambda(LambdaClosure),
    Eta(EtaClosure),
    Builtin(Builtin),
    /// The fixed-point marker consumed by the recursion rule.
    Ystar,
    Dummy,
}

impl Value {
    /// The empty tuple.
    pub fn nil() -> Self {
        Value::Tuple(Vec::new())
    }

    /// Kind name used in type error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Truth(_) => "truthvalue",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::Lambda(_) => "lambda closure",
            Value::Eta(_) => "eta closure",
            Value::Builtin(_) => "builtin function",
            Value::Ystar => "Y*",
            Value::Dummy => "dummy",
        }
    }
}
