//! Code generation backends.
//!
//! A backend walks a parsed [`Program`] and renders it as source text in a
//! target language. Backends are looked up by language tag through
//! [`generator::new_generator`]; Lua is the only target.
//!
//! [`Program`]: crate::ast::ast::Program

pub mod expr;
pub mod generator;
pub mod loops;
pub mod lua;
pub mod stmt;
