//! The CSE (control / stack / environment) machine.
//!
//! The machine owns three stacks: `control` holds pending instructions
//! and is consumed from the back; `stack` holds intermediate values;
//! `envs` tracks the chain of call environments, its top being the
//! current one. Evaluation is a single synchronous reduction loop with no
//! suspension points: it ends when control runs dry, at which point
//! exactly one value must remain on the stack.

use std::io::{self, Write};
use std::rc::Rc;

use crate::ast::TreeNode;
use crate::fmt::render_printed;

use super::control::{linearize, ControlBlock, ControlItem};
use super::env::Environment;
use super::error::EvalError;
use super::ops;
use super::value::{Builtin, EtaClosure, LambdaClosure, ParamSpec, Value};

pub struct Machine<W: Write> {
    blocks: Vec<ControlBlock>,
    control: Vec<ControlItem>,
    stack: Vec<Value>,
    envs: Vec<Rc<Environment>>,
    out: W,
}

impl Machine<io::Stdout> {
    /// A machine for the given standardized tree, printing to stdout.
    pub fn new(tree: &TreeNode) -> Self {
        Machine::with_output(tree, io::stdout())
    }
}

impl<W: Write> Machine<W> {
    /// A machine whose `Print` built-in writes to `out`.
    pub fn with_output(tree: &TreeNode, out: W) -> Self {
        let blocks = linearize(tree);
        let control = blocks[0].clone();
        Machine {
            blocks,
            control,
            stack: Vec::new(),
            envs: vec![Environment::root()],
            out,
        }
    }

    /// Run the reduction loop to completion.
    pub fn run(mut self) -> Result<Value, EvalError> {
        while let Some(item) = self.control.pop() {
            match item {
                ControlItem::Integer(v) => self.stack.push(Value::Integer(v)),
                ControlItem::Str(v) => self.stack.push(Value::Str(v)),
                ControlItem::Truth(v) => self.stack.push(Value::Truth(v)),
                ControlItem::Nil => self.stack.push(Value::nil()),
                ControlItem::Dummy => self.stack.push(Value::Dummy),
                ControlItem::Ystar => self.stack.push(Value::Ystar),

                ControlItem::Name(name) => {
                    let value = match self.current_env().lookup(&name) {
                        Some(value) => value.clone(),
                        None => return Err(EvalError::Lookup(name)),
                    };
                    self.stack.push(value);
                }

                ControlItem::Lambda { body, param } => {
                    self.stack.push(Value::Lambda(LambdaClosure {
                        param,
                        body,
                        env: Rc::clone(self.current_env()),
                    }));
                }

                ControlItem::Gamma => self.apply()?,

                ControlItem::Beta => {
                    let else_block = self.pop_delta()?;
                    let then_block = self.pop_delta()?;
                    match self.pop()? {
                        Value::Truth(true) => self.load_block(then_block),
                        Value::Truth(false) => self.load_block(else_block),
                        other => {
                            return Err(EvalError::type_mismatch(
                                "conditional",
                                "truthvalue",
                                &other,
                            ))
                        }
                    }
                }

                ControlItem::Tau(n) => {
                    let mut elements = Vec::with_capacity(n);
                    for _ in 0..n {
                        elements.push(self.pop()?);
                    }
                    self.stack.push(Value::Tuple(elements));
                }

                ControlItem::Binop(op) => {
                    let left = self.pop()?;
                    let right = self.pop()?;
                    self.stack.push(ops::binary(op, left, right)?);
                }

                ControlItem::Unop(op) => {
                    let operand = self.pop()?;
                    self.stack.push(ops::unary(op, operand)?);
                }

                ControlItem::ExitEnv => {
                    if self.envs.len() < 2 {
                        return Err(EvalError::Machine("environment restore without a frame"));
                    }
                    self.envs.pop();
                }

                ControlItem::Delta(_) => {
                    return Err(EvalError::Machine("branch block outside a conditional"));
                }
            }
        }

        let result = self
            .stack
            .pop()
            .ok_or(EvalError::Machine("empty stack at termination"))?;
        if !self.stack.is_empty() {
            return Err(EvalError::Machine("leftover values at termination"));
        }
        Ok(result)
    }

    fn current_env(&self) -> &Rc<Environment> {
        self.envs.last().expect("environment stack is never empty")
    }

    fn pop(&mut self) -> Result<Value, EvalError> {
        self.stack
            .pop()
            .ok_or(EvalError::Machine("value stack unexpectedly empty"))
    }

    fn pop_delta(&mut self) -> Result<usize, EvalError> {
        match self.control.pop() {
            Some(ControlItem::Delta(index)) => Ok(index),
            _ => Err(EvalError::Machine("conditional without branch blocks")),
        }
    }

    /// Push a block's instructions onto the control stack.
    fn load_block(&mut self, index: usize) {
        // Blocks are never popped, so this only clones the instructions.
        let block = self.blocks[index].clone();
        self.control.extend(block);
    }

    /// The application rule: dispatch on the rator's kind.
    fn apply(&mut self) -> Result<(), EvalError> {
        let rator = self.pop()?;
        let rand = self.pop()?;

        match rator {
            Value::Lambda(closure) => self.enter(closure, rand),

            Value::Tuple(elements) => match rand {
                Value::Integer(index) => {
                    if index < 1 || index as usize > elements.len() {
                        return Err(EvalError::Selection {
                            index,
                            len: elements.len(),
                        });
                    }
                    self.stack.push(elements[index as usize - 1].clone());
                    Ok(())
                }
                other => Err(EvalError::type_mismatch(
                    "tuple selection",
                    "integer",
                    &other,
                )),
            },

            Value::Ystar => match rand {
                Value::Lambda(closure) => {
                    self.stack.push(Value::Eta(EtaClosure { closure }));
                    Ok(())
                }
                other => Err(EvalError::type_mismatch(
                    "fixed-point application",
                    "lambda closure",
                    &other,
                )),
            },

            Value::Eta(eta) => {
                // Unroll one recursion step: apply the underlying
                // abstraction to the eta closure itself (re-binding the
                // recursive name), then apply the result to the original
                // argument.
                self.control.push(ControlItem::Gamma);
                self.control.push(ControlItem::Gamma);
                self.stack.push(rand);
                self.stack.push(Value::Eta(eta.clone()));
                self.stack.push(Value::Lambda(eta.closure));
                Ok(())
            }

            Value::Builtin(builtin) => self.apply_builtin(builtin, rand),

            other => Err(EvalError::type_mismatch(
                "application",
                "a function or tuple",
                &other,
            )),
        }
    }

    /// Apply a lambda closure: build the call environment, arrange for it
    /// to be restored, and load the body.
    fn enter(&mut self, closure: LambdaClosure, arg: Value) -> Result<(), EvalError> {
        let mut env = Environment::child(&closure.env);
        match closure.param {
            ParamSpec::Single(name) => env.bind(name, arg),
            ParamSpec::Tuple(names) => match arg {
                Value::Tuple(elements) if elements.len() == names.len() => {
                    for (name, element) in names.into_iter().zip(elements) {
                        env.bind(name, element);
                    }
                }
                Value::Tuple(elements) => {
                    return Err(EvalError::Destructure {
                        expected: names.len(),
                        found: elements.len(),
                    });
                }
                other => {
                    return Err(EvalError::type_mismatch(
                        "tuple-pattern application",
                        "tuple",
                        &other,
                    ));
                }
            },
            ParamSpec::Empty => {}
        }

        self.envs.push(Rc::new(env));
        self.control.push(ControlItem::ExitEnv);
        self.load_block(closure.body);
        Ok(())
    }

    fn apply_builtin(&mut self, builtin: Builtin, arg: Value) -> Result<(), EvalError> {
        let result = match builtin {
            Builtin::Print => {
                write!(self.out, "{}", render_printed(&arg))
                    .map_err(|err| EvalError::Output(err.to_string()))?;
                Value::Dummy
            }
            Builtin::Stem => match arg {
                Value::Str(s) => Value::Str(s.chars().take(1).collect()),
                other => return Err(EvalError::type_mismatch("Stem", "string", &other)),
            },
            Builtin::Stern => match arg {
                Value::Str(s) => {
                    let mut chars = s.chars();
                    chars.next();
                    Value::Str(chars.as_str().to_string())
                }
                other => return Err(EvalError::type_mismatch("Stern", "string", &other)),
            },
            Builtin::Conc => match arg {
                Value::Str(s) => Value::Builtin(Builtin::ConcWith(s)),
                other => return Err(EvalError::type_mismatch("Conc", "string", &other)),
            },
            Builtin::ConcWith(first) => match arg {
                Value::Str(second) => Value::Str(first + &second),
                other => return Err(EvalError::type_mismatch("Conc", "string", &other)),
            },
            Builtin::Order => match arg {
                Value::Tuple(elements) => Value::Integer(elements.len() as i64),
                other => return Err(EvalError::type_mismatch("Order", "tuple", &other)),
            },
            Builtin::Null => Value::Truth(arg == Value::nil()),
            Builtin::Isinteger => Value::Truth(matches!(arg, Value::Integer(_))),
            Builtin::Istruthvalue => Value::Truth(matches!(arg, Value::Truth(_))),
            Builtin::Isstring => Value::Truth(matches!(arg, Value::Str(_))),
            Builtin::Istuple => Value::Truth(matches!(arg, Value::Tuple(_))),
            Builtin::Isfunction => Value::Truth(matches!(
                arg,
                Value::Lambda(_) | Value::Eta(_) | Value::Builtin(_) | Value::Ystar
            )),
            Builtin::Isdummy => Value::Truth(matches!(arg, Value::Dummy)),
            Builtin::ItoS => match arg {
                Value::Integer(v) => Value::Str(v.to_string()),
                other => return Err(EvalError::type_mismatch("ItoS", "integer", &other)),
            },
        };
        self.stack.push(result);
        Ok(())
    }
}
