//! Lexical analysis module for the translator.
//!
//! This module contains the lexer (tokenizer) that converts DSL source text
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization driven by an ordered regex pattern table
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for error reporting
//! - Line comments, which are kept as COMMENT tokens rather than discarded

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
