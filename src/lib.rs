//! # rupal
//!
//! An interpreter for the RPAL functional language, organized as a
//! pipeline of passes:
//!
//! 1. [`lexer`] turns source text into a token stream.
//! 2. [`parser`] builds the raw syntax tree by recursive descent.
//! 3. [`standardize`] rewrites the surface constructs (`let`, `where`,
//!    `within`, `and`, `rec`, function forms, infix `@`) into the core
//!    calculus of abstractions, applications, tuples and conditionals.
//! 4. [`cse`] linearizes the standardized tree into control blocks and
//!    reduces them on the CSE machine.
//!
//! [`ast`] carries the tree shared by the middle passes, and [`fmt`]
//! renders trees and runtime values.

pub mod ast;
pub mod cse;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod standardize;
