//! Lua backend state.
//!
//! The generator writes into a single buffer while walking the tree; the
//! per-node rules live in [`super::expr`], [`super::stmt`] and
//! [`super::loops`].

use std::collections::HashMap;

use crate::ast::ast::Program;

use super::{
    generator::CodeGenerator,
    stmt::{gen_import, gen_statement},
};

const INDENT_UNIT: &str = "  ";

pub struct LuaGenerator {
    buf: String,
    indent: usize,
    /// tid value -> local name of the skill declaring it.
    skill_map: HashMap<String, String>,
    /// tid value -> local name of the state declaring it.
    state_map: HashMap<String, String>,
}

impl LuaGenerator {
    pub const LANGUAGE: &'static str = "lua";

    pub fn new() -> Self {
        LuaGenerator {
            buf: String::new(),
            indent: 0,
            skill_map: HashMap::new(),
            state_map: HashMap::new(),
        }
    }

    /// tid maps collected so far. They persist across `generate` calls.
    pub fn skill_map(&self) -> &HashMap<String, String> {
        &self.skill_map
    }

    pub fn state_map(&self) -> &HashMap<String, String> {
        &self.state_map
    }

    pub(super) fn write(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub(super) fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.buf.push_str(INDENT_UNIT);
        }
    }

    pub(super) fn indent(&mut self) {
        self.indent += 1;
    }

    pub(super) fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub(super) fn record_skill_tid(&mut self, tid: String, name: String) {
        log::debug!("skill tid {} -> {}", tid, name);
        self.skill_map.insert(tid, name);
    }

    pub(super) fn record_state_tid(&mut self, tid: String, name: String) {
        log::debug!("state tid {} -> {}", tid, name);
        self.state_map.insert(tid, name);
    }
}

impl Default for LuaGenerator {
    fn default() -> Self {
        LuaGenerator::new()
    }
}

impl CodeGenerator for LuaGenerator {
    fn generate(&mut self, program: &Program) -> String {
        self.buf.clear();
        self.indent = 0;

        for import in &program.imports {
            gen_import(self, import);
        }
        for stmt in &program.statements {
            gen_statement(self, stmt);
        }

        log::debug!("generated {} bytes of lua", self.buf.len());
        std::mem::take(&mut self.buf)
    }

    fn extension(&self) -> &'static str {
        "lua"
    }
}

pub fn new_lua_generator() -> Box<dyn CodeGenerator> {
    Box::new(LuaGenerator::new())
}
