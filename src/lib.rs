#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorTip},
    generator::{generator::CodeGenerator, lua::LuaGenerator},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location inside a named source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }

    pub fn is_before(&self, other: &Position) -> bool {
        (self.line, self.column) < (other.line, other.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Returns the text of the 1-based `line` of `source`, without its newline.
pub fn get_line_at_position(source: &str, line: u32) -> Option<String> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r').to_string())
}

/// Parses `source` and renders it as Lua in one go.
pub fn compile_to_lua(source: String, file: Option<String>) -> Result<String, Vec<Error>> {
    let program = parse(source, file)?;
    Ok(LuaGenerator::new().generate(&program))
}

/// Renders a caret diagram pointing at the position of `error` in `source`.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (expected CloseCurly)
        -> skills.sk
           |
        20 | hp = 10 mp = 4
           |         ^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let column = (position.column as usize).saturating_sub(1);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "skill a {\n  hp = 1\r\n}\n";

        assert_eq!(get_line_at_position(source, 1), Some("skill a {".to_string()));
        assert_eq!(get_line_at_position(source, 2), Some("  hp = 1".to_string()));
        assert_eq!(get_line_at_position(source, 0), None);
        assert_eq!(get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_position_ordering() {
        let file = Rc::new(String::from("a.sk"));
        let early = Position::new(2, 9, Rc::clone(&file));
        let late = Position::new(3, 1, file);

        assert!(early.is_before(&late));
        assert!(!late.is_before(&early));
        assert!(!early.is_before(&early));
    }

    #[test]
    fn test_display_error_points_at_column() {
        let source = "var a = 1\n    var = 2\n";
        let errors = parse(source.to_string(), Some("diag.sk".to_string()))
            .expect_err("should fail");

        let diagram = display_error(&errors[0], source);
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines[1], "-> diag.sk");
        assert_eq!(lines[3], "2 | var = 2");
        // `=` sits at column 9; four leading spaces are stripped.
        assert_eq!(lines[4], "  |     ^");
    }
}
