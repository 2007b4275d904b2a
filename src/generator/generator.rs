use std::collections::HashMap;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::ast::ast::Program;

use super::lua::{new_lua_generator, LuaGenerator};

/// A backend that renders a whole program as target-language source.
pub trait CodeGenerator {
    fn generate(&mut self, program: &Program) -> String;

    /// File extension of the generated source, without the dot.
    fn extension(&self) -> &'static str;
}

pub type GeneratorConstructor = fn() -> Box<dyn CodeGenerator>;

lazy_static! {
    static ref GENERATORS: HashMap<&'static str, GeneratorConstructor> = {
        let mut map: HashMap<&'static str, GeneratorConstructor> = HashMap::new();
        map.insert(LuaGenerator::LANGUAGE, new_lua_generator);
        map
    };
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Builds a fresh backend for the language tag `lang`.
pub fn new_generator(lang: &str) -> Result<Box<dyn CodeGenerator>, GeneratorError> {
    match GENERATORS.get(lang) {
        Some(constructor) => Ok(constructor()),
        None => Err(GeneratorError::UnsupportedLanguage(lang.to_string())),
    }
}
