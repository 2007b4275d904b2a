use crate::{
    ast::{
        ast::{Expr, PropertyDef},
        expressions::{CallExpr, FunctionExpr, InfixExpr, PrefixExpr, TableExpr},
    },
    lexer::tokens::TokenKind,
};

use super::{lua::LuaGenerator, stmt::gen_statement};

/// Function names that receive an implicit leading `ctx` parameter when a
/// skill or state property binds them.
const CONTEXT_FUNCTIONS: [&str; 7] = ["XX1", "XX2", "XX3", "XX4", "XX5", "YY1", "YY2"];

/// Call receivers whose methods get an implicit leading `ctx` argument.
const CONTEXT_RECEIVERS: [&str; 2] = ["UE", "UF"];

/// Lua identifiers cannot contain `-`.
pub fn sanitize(name: &str) -> String {
    name.replace('-', "_")
}

pub fn gen_expression(generator: &mut LuaGenerator, expression: &Expr) {
    match expression {
        Expr::Symbol(symbol) => generator.write(&sanitize(&symbol.value)),
        Expr::Integer(integer) => generator.write(&integer.value.to_string()),
        Expr::Float(float) => generator.write(&format!("{:.1}", float.value)),
        Expr::String(string) => generator.write(&quote_string(&string.value)),
        Expr::Boolean(boolean) => generator.write(if boolean.value { "true" } else { "false" }),
        Expr::Prefix(prefix) => gen_prefix(generator, prefix),
        Expr::Infix(infix) => gen_infix(generator, infix),
        Expr::Member(member) => {
            gen_operand(generator, &member.left);
            generator.write(".");
            match member.member.as_symbol() {
                Some(name) => generator.write(&sanitize(name)),
                None => gen_expression(generator, &member.member),
            }
        }
        Expr::Call(call) => gen_call(generator, call),
        Expr::Table(table) => gen_table(generator, table),
        Expr::Function(function) => gen_function(generator, function, None),
    }
}

/// Emits `expression`, parenthesized when it is a binary operation.
fn gen_operand(generator: &mut LuaGenerator, expression: &Expr) {
    if let Expr::Infix(infix) = expression {
        generator.write("(");
        gen_infix(generator, infix);
        generator.write(")");
    } else {
        gen_expression(generator, expression);
    }
}

fn gen_prefix(generator: &mut LuaGenerator, prefix: &PrefixExpr) {
    if prefix.operator == "not" {
        generator.write("not ");
        gen_operand(generator, &prefix.right);
    } else {
        generator.write(&prefix.operator);
        generator.write("(");
        gen_expression(generator, &prefix.right);
        generator.write(")");
    }
}

pub fn lua_operator(operator: &str) -> &str {
    match operator {
        "!=" => "~=",
        other => other,
    }
}

/// Binding strength of a Lua binary operator.
pub fn operator_precedence(operator: &str) -> u8 {
    match operator {
        "^" => 7,
        "*" | "/" | "%" => 6,
        "+" | "-" => 5,
        "==" | "~=" | "<" | ">" | "<=" | ">=" => 4,
        "and" => 3,
        "or" => 2,
        _ => 1,
    }
}

fn needs_parentheses(child: &InfixExpr, parent: &InfixExpr, is_left: bool) -> bool {
    let child_prec = operator_precedence(lua_operator(&child.operator));
    let parent_prec = operator_precedence(lua_operator(&parent.operator));

    if child_prec != parent_prec {
        return child_prec < parent_prec;
    }

    // Everything but `^` associates to the left, so an equal-precedence
    // right operand only keeps its grouping inside parentheses.
    !is_left && parent.operator != "^"
}

fn gen_infix(generator: &mut LuaGenerator, infix: &InfixExpr) {
    gen_infix_operand(generator, &infix.left, infix, true);

    generator.write(" ");
    generator.write(lua_operator(&infix.operator));
    generator.write(" ");

    gen_infix_operand(generator, &infix.right, infix, false);
}

fn gen_infix_operand(generator: &mut LuaGenerator, operand: &Expr, parent: &InfixExpr, is_left: bool) {
    match operand {
        Expr::Infix(child) if needs_parentheses(child, parent, is_left) => {
            generator.write("(");
            gen_infix(generator, child);
            generator.write(")");
        }
        _ => gen_expression(generator, operand),
    }
}

fn is_context_call(call: &CallExpr) -> bool {
    match call.callee.as_ref() {
        Expr::Member(member) => member
            .left
            .as_symbol()
            .is_some_and(|receiver| CONTEXT_RECEIVERS.contains(&receiver)),
        _ => false,
    }
}

fn gen_call(generator: &mut LuaGenerator, call: &CallExpr) {
    gen_operand(generator, &call.callee);
    generator.write("(");

    let mut first = true;
    if is_context_call(call) {
        generator.write("ctx");
        first = false;
    }

    for argument in &call.arguments {
        if !first {
            generator.write(", ");
        }
        first = false;
        gen_expression(generator, argument);
    }

    generator.write(")");
}

/// Writes the key of a table or declaration entry, without the ` = `.
/// Identifier keys stay bare unless the source wrote them as `[key]`.
pub fn gen_property_key(generator: &mut LuaGenerator, property: &PropertyDef, key: &Expr) {
    match key.as_symbol() {
        Some(name) if property.token.kind != TokenKind::OpenBracket => {
            generator.write(&sanitize(name))
        }
        _ => {
            generator.write("[");
            gen_expression(generator, key);
            generator.write("]");
        }
    }
}

fn gen_table(generator: &mut LuaGenerator, table: &TableExpr) {
    if table.properties.is_empty() {
        generator.write("{}");
        return;
    }

    generator.write("{\n");
    generator.indent();
    gen_entries(generator, &table.properties, |_| None);
    generator.dedent();

    generator.write_indent();
    generator.write("}");
}

/// Writes `key = value` lines, comma separated. `binding_of` names the
/// function a property value binds, if any.
pub fn gen_entries<'a, F>(generator: &mut LuaGenerator, properties: &'a [PropertyDef], binding_of: F)
where
    F: Fn(&'a PropertyDef) -> Option<&'a str>,
{
    for (i, property) in properties.iter().enumerate() {
        generator.write_indent();

        if let Some(key) = &property.key {
            gen_property_key(generator, property, key);
            generator.write(" = ");
        }

        match &property.value {
            Expr::Function(function) => gen_function(generator, function, binding_of(property)),
            value => gen_expression(generator, value),
        }

        if i + 1 < properties.len() {
            generator.write(",");
        }
        generator.write("\n");
    }
}

/// Writes a function literal. `binding` is the property name the literal is
/// assigned to in a skill or state, which decides the implicit `ctx`
/// parameter.
pub fn gen_function(generator: &mut LuaGenerator, function: &FunctionExpr, binding: Option<&str>) {
    let mut params = vec![];
    if binding.is_some_and(|name| CONTEXT_FUNCTIONS.contains(&name)) {
        params.push(String::from("ctx"));
    }
    params.extend(function.parameters.iter().map(|param| sanitize(&param.value)));

    generator.write("function(");
    generator.write(&params.join(", "));
    generator.write(")\n");

    generator.indent();
    for stmt in function.body.iter() {
        gen_statement(generator, stmt);
    }
    generator.dedent();

    generator.write_indent();
    generator.write("end");
}

/// Double-quotes `value` for Lua 5.1. Control characters without a short
/// escape become decimal `\ddd` escapes.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');

    for ch in value.chars() {
        match ch {
            '\u{7}' => quoted.push_str("\\a"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{b}' => quoted.push_str("\\v"),
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            ch if ch.is_ascii_control() => quoted.push_str(&format!("\\{:03}", ch as u32)),
            ch => quoted.push(ch),
        }
    }

    quoted.push('"');
    quoted
}
