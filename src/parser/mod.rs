//! Parser module for building the AST.
//!
//! A Pratt parser turns the lexer's token stream into a [`Program`]. Prefix
//! (NUD) and infix (LED) handlers are looked up per token kind, and operator
//! binding power decides how far an expression extends.
//!
//! [`Program`]: crate::ast::ast::Program

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
