//! Error types for the translator.
//!
//! Every parse failure carries the DSL source position it refers to and the
//! crate location that raised it. The tip and name accessors feed the caret
//! diagram printed by [`crate::display_error`].

pub mod errors;
