//! The environment chain.
//!
//! Each environment maps bound names to values and optionally links to
//! one parent. Lookup walks the chain outward. Environments are built
//! when a closure is applied, frozen once their bindings are in place,
//! and shared through `Rc`: a closure capturing an environment keeps it
//! alive past the call frame that created it, and it is released when the
//! last closure or frame referencing it is dropped.

use std::collections::HashMap;
use std::rc::Rc;

use super::value::{Builtin, Value};

#[derive(Debug, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// The root environment, holding the built-in names.
    pub fn root() -> Rc<Self> {
        let mut env = Environment {
            bindings: HashMap::new(),
            parent: None,
        };
        for builtin in [
            Builtin::Print,
            Builtin::Stem,
            Builtin::Stern,
            Builtin::Conc,
            Builtin::Order,
            Builtin::Null,
            Builtin::Isinteger,
            Builtin::Istruthvalue,
            Builtin::Isstring,
            Builtin::Istuple,
            Builtin::Isfunction,
            Builtin::Isdummy,
            Builtin::ItoS,
        ] {
            env.bind(builtin.name().to_string(), Value::Builtin(builtin));
        }
        // The reference implementation accepts the lowercase spelling too.
        env.bind("print".to_string(), Value::Builtin(Builtin::Print));
        Rc::new(env)
    }

    /// A new, empty environment whose parent is `parent`.
    pub fn child(parent: &Rc<Environment>) -> Self {
        Environment {
            bindings: HashMap::new(),
            parent: Some(Rc::clone(parent)),
        }
    }

    /// Add a binding. Only called while the environment is under
    /// construction, before it is shared.
    pub fn bind(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Resolve a name by walking the parent chain outward.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(name) {
            Some(value) => Some(value),
            None => self.parent.as_deref()?.lookup(name),
        }
    }
}
