//! `for` loop lowering.
//!
//! Range loops become `for k, v in pairs(t)`. Classic loops that count one
//! variable between inclusive bounds become Lua's numeric `for`; every other
//! classic loop becomes a `while`, wrapped in `do ... end` when it has an
//! init so the loop variable stays scoped to the loop.

use crate::ast::{
    ast::{is_same_identifier, Expr, Stmt},
    expressions::SymbolExpr,
    statements::{BlockStmt, ExpressionStmt, ForHeader, ForStmt},
};

use super::{
    expr::{gen_expression, sanitize},
    lua::LuaGenerator,
    stmt::{gen_block, gen_statement},
};

/// The parts of a classic loop that fit `for var = start, end, step`.
pub struct NumericFor<'a> {
    pub var: &'a SymbolExpr,
    pub start: &'a Expr,
    pub end: &'a Expr,
    /// `+` or `-`
    pub step_operator: &'a str,
    pub step: &'a Expr,
}

/// Recognizes `for var v = a; v <= b; v = v + s` and the `>=` / `-` variants.
///
/// Only inclusive comparisons qualify, since Lua's numeric `for` includes
/// both bounds.
pub fn as_numeric_for(header: &ForHeader) -> Option<NumericFor<'_>> {
    let ForHeader::Classic {
        init: Some(init),
        condition: Some(condition),
        post: Some(post),
    } = header
    else {
        return None;
    };

    let Stmt::VarDecl(decl) = init.as_ref() else {
        return None;
    };

    let Expr::Infix(condition) = condition else {
        return None;
    };
    if condition.operator != "<=" && condition.operator != ">=" {
        return None;
    }
    if condition.left.as_symbol() != Some(decl.identifier.value.as_str()) {
        return None;
    }

    let (target, step_operator, step) = post_step(post)?;
    if target.as_symbol() != Some(decl.identifier.value.as_str()) {
        return None;
    }

    Some(NumericFor {
        var: &decl.identifier,
        start: &decl.value,
        end: condition.right.as_ref(),
        step_operator,
        step,
    })
}

/// Splits `v = v + s` / `v = v - s` into `(v, op, s)`.
fn post_step(post: &ExpressionStmt) -> Option<(&Expr, &str, &Expr)> {
    let Expr::Infix(assignment) = &post.expression else {
        return None;
    };
    if assignment.operator != "=" {
        return None;
    }

    let Expr::Infix(operation) = assignment.right.as_ref() else {
        return None;
    };
    if !is_same_identifier(&assignment.left, &operation.left) {
        return None;
    }

    match operation.operator.as_str() {
        "+" | "-" => Some((
            assignment.left.as_ref(),
            operation.operator.as_str(),
            operation.right.as_ref(),
        )),
        _ => None,
    }
}

pub fn gen_for_statement(generator: &mut LuaGenerator, stmt: &ForStmt) {
    match &stmt.header {
        ForHeader::Range {
            key,
            value,
            iterable,
        } => {
            generator.write_indent();
            generator.write("for ");
            if let Some(key) = key {
                generator.write(&sanitize(&key.value));
                generator.write(", ");
            }
            generator.write(&sanitize(&value.value));
            generator.write(" in pairs(");
            gen_expression(generator, iterable);
            generator.write(") do\n");

            gen_block(generator, &stmt.body);

            generator.write_indent();
            generator.write("end\n");
        }
        header @ ForHeader::Classic {
            init,
            condition,
            post,
        } => match as_numeric_for(header) {
            Some(numeric) => gen_numeric_for(generator, &numeric, stmt),
            None => gen_while_for(
                generator,
                init.as_deref(),
                condition.as_ref(),
                post.as_ref(),
                &stmt.body,
            ),
        },
    }
}

fn gen_numeric_for(generator: &mut LuaGenerator, numeric: &NumericFor, stmt: &ForStmt) {
    generator.write_indent();
    generator.write("for ");
    generator.write(&sanitize(&numeric.var.value));
    generator.write(" = ");
    gen_expression(generator, numeric.start);
    generator.write(", ");
    gen_expression(generator, numeric.end);

    let is_unit_step = numeric.step_operator == "+"
        && matches!(numeric.step, Expr::Integer(integer) if integer.value == 1);
    if !is_unit_step {
        generator.write(", ");
        if numeric.step_operator == "-" {
            generator.write("-");
            if matches!(numeric.step, Expr::Integer(_) | Expr::Float(_)) {
                gen_expression(generator, numeric.step);
            } else {
                generator.write("(");
                gen_expression(generator, numeric.step);
                generator.write(")");
            }
        } else {
            gen_expression(generator, numeric.step);
        }
    }
    generator.write(" do\n");

    gen_block(generator, &stmt.body);

    generator.write_indent();
    generator.write("end\n");
}

fn gen_while_for(
    generator: &mut LuaGenerator,
    init: Option<&Stmt>,
    condition: Option<&Expr>,
    post: Option<&ExpressionStmt>,
    body: &BlockStmt,
) {
    if let Some(init) = init {
        generator.write_indent();
        generator.write("do\n");
        generator.indent();
        gen_statement(generator, init);
    }

    generator.write_indent();
    generator.write("while ");
    match condition {
        Some(condition) => gen_expression(generator, condition),
        None => generator.write("true"),
    }
    generator.write(" do\n");

    match post {
        Some(post) => {
            generator.indent();
            gen_body_before_post(generator, body);
            generator.write_indent();
            gen_expression(generator, &post.expression);
            generator.write("\n");
            generator.dedent();
        }
        None => gen_block(generator, body),
    }

    generator.write_indent();
    generator.write("end\n");

    if init.is_some() {
        generator.dedent();
        generator.write_indent();
        generator.write("end\n");
    }
}

/// Loop body followed by the post statement. Lua only allows `break` and
/// `return` last in a block, so a trailing one gets its own `do ... end`.
fn gen_body_before_post(generator: &mut LuaGenerator, body: &BlockStmt) {
    let (last, rest) = match body.body.split_last() {
        Some((last @ (Stmt::Break(_) | Stmt::Return(_)), rest)) => (Some(last), rest),
        _ => (None, body.body.as_slice()),
    };

    for stmt in rest {
        gen_statement(generator, stmt);
    }

    if let Some(last) = last {
        generator.write_indent();
        generator.write("do\n");
        generator.indent();
        gen_statement(generator, last);
        generator.dedent();
        generator.write_indent();
        generator.write("end\n");
    }
}
