//! Unit tests for the parser module.
//!
//! Covers declarations, expressions and precedence, control flow, loose
//! comment handling and error reporting.

use super::parser::parse;
use crate::ast::{
    ast::{Expr, Program, Stmt},
    statements::ForHeader,
};
use crate::errors::errors::ErrorImpl;
use crate::lexer::tokens::TokenKind;

fn parse_ok(source: &str) -> Program {
    match parse(source.to_string(), Some("test.sk".to_string())) {
        Ok(program) => program,
        Err(errors) => panic!("unexpected parse errors: {:?}", errors),
    }
}

fn first_expr(program: &Program) -> &Expr {
    match &program.statements[0] {
        Stmt::Expression(stmt) => &stmt.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

/// Renders an expression fully parenthesized, to check grouping.
fn grouped(expr: &Expr) -> String {
    match expr {
        Expr::Symbol(symbol) => symbol.value.clone(),
        Expr::Integer(integer) => integer.value.to_string(),
        Expr::Float(float) => float.value.to_string(),
        Expr::String(string) => format!("{:?}", string.value),
        Expr::Boolean(boolean) => boolean.value.to_string(),
        Expr::Prefix(prefix) => format!("({} {})", prefix.operator, grouped(&prefix.right)),
        Expr::Infix(infix) => format!(
            "({} {} {})",
            grouped(&infix.left),
            infix.operator,
            grouped(&infix.right)
        ),
        Expr::Member(member) => format!("{}.{}", grouped(&member.left), grouped(&member.member)),
        Expr::Call(call) => format!(
            "{}({})",
            grouped(&call.callee),
            call.arguments.iter().map(grouped).collect::<Vec<_>>().join(", ")
        ),
        Expr::Table(_) => "{..}".to_string(),
        Expr::Function(_) => "func".to_string(),
    }
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_ok("var x = 42;");

    match &program.statements[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.identifier.value, "x");
            assert!(matches!(decl.value, Expr::Integer(ref int) if int.value == 42));
        }
        other => panic!("expected var declaration, got {:?}", other),
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("a + b * c", "(a + (b * c))"),
        ("a * b + c", "((a * b) + c)"),
        ("a - b - c", "((a - b) - c)"),
        ("a or b and c", "(a or (b and c))"),
        ("a == b < c", "(a == (b < c))"),
        ("not a == b", "((not a) == b)"),
        ("-a * b", "((- a) * b)"),
        ("x = a + 1", "(x = (a + 1))"),
        ("(a + b) * c", "((a + b) * c)"),
        ("UE.Damage(ctx, 1 + 2)", "UE.Damage(ctx, (1 + 2))"),
        ("a.b.c", "a.b.c"),
        ("f()()", "f()()"),
    ];

    for (source, expected) in cases {
        let program = parse_ok(source);
        assert_eq!(grouped(first_expr(&program)), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_literals() {
    let program = parse_ok("f(1, 2.5, \"hi\", true, false)");

    match first_expr(&program) {
        Expr::Call(call) => {
            assert_eq!(call.arguments.len(), 5);
            assert!(matches!(call.arguments[1], Expr::Float(ref f) if f.value == 2.5));
            assert!(matches!(call.arguments[2], Expr::String(ref s) if s.value == "hi"));
            assert!(matches!(call.arguments[4], Expr::Boolean(ref b) if !b.value));
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_parse_skill_declaration() {
    let program = parse_ok(
        "skill fireball {\n  tid = 100,\n  damage = 10 * 2,\n  XX1 = func(target) { return target },\n}",
    );

    match &program.statements[0] {
        Stmt::Skill(skill) => {
            assert_eq!(skill.name.value, "fireball");
            let keys: Vec<&str> = skill
                .properties
                .iter()
                .filter_map(|prop| prop.key.as_ref().and_then(Expr::as_symbol))
                .collect();
            assert_eq!(keys, vec!["tid", "damage", "XX1"]);
            assert!(matches!(skill.properties[2].value, Expr::Function(ref f) if f.parameters.len() == 1));
        }
        other => panic!("expected skill, got {:?}", other),
    }
}

#[test]
fn test_parse_state_with_nested_table() {
    let program = parse_ok("state idle { buffs = { speed = 2, [\"k\"] = 3, 4 }, mode = \"calm\" }");

    match &program.statements[0] {
        Stmt::State(state) => {
            assert_eq!(state.name.value, "idle");
            assert_eq!(state.properties.len(), 2);
            match &state.properties[0].value {
                Expr::Table(table) => {
                    assert_eq!(table.properties.len(), 3);
                    assert_eq!(
                        table.properties[0].key.as_ref().and_then(Expr::as_symbol),
                        Some("speed")
                    );
                    assert!(matches!(table.properties[1].key, Some(Expr::String(_))));
                    assert!(table.properties[2].key.is_none());
                }
                other => panic!("expected table, got {:?}", other),
            }
        }
        other => panic!("expected state, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_table_and_trailing_comma() {
    let program = parse_ok("var a = {}\nvar b = { 1, 2, }");

    assert!(matches!(&program.statements[0], Stmt::VarDecl(decl) if matches!(decl.value, Expr::Table(ref t) if t.properties.is_empty())));
    assert!(matches!(&program.statements[1], Stmt::VarDecl(decl) if matches!(decl.value, Expr::Table(ref t) if t.properties.len() == 2)));
}

#[test]
fn test_parse_if_else_chain() {
    let program = parse_ok("if a { x() } else if b { y() } else if c { z() } else { w() }");

    match &program.statements[0] {
        Stmt::If(stmt) => {
            assert_eq!(stmt.consequence.body.len(), 1);
            assert_eq!(stmt.alternatives.len(), 3);
            assert!(stmt.alternatives[0].condition.is_some());
            assert!(stmt.alternatives[1].condition.is_some());
            assert!(stmt.alternatives[2].condition.is_none());
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_parse_range_for() {
    let program = parse_ok("for k, v = range tbl { print(k, v) }\nfor v = range items { use(v) }");

    match &program.statements[0] {
        Stmt::For(stmt) => {
            assert!(stmt.is_range_form());
            match &stmt.header {
                ForHeader::Range { key, value, iterable } => {
                    assert_eq!(key.as_ref().map(|k| k.value.as_str()), Some("k"));
                    assert_eq!(value.value, "v");
                    assert_eq!(iterable.as_symbol(), Some("tbl"));
                }
                other => panic!("expected range header, got {:?}", other),
            }
        }
        other => panic!("expected for, got {:?}", other),
    }

    match &program.statements[1] {
        Stmt::For(stmt) => match &stmt.header {
            ForHeader::Range { key, value, .. } => {
                assert!(key.is_none());
                assert_eq!(value.value, "v");
            }
            other => panic!("expected range header, got {:?}", other),
        },
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_parse_classic_for() {
    let program = parse_ok("for var i = 0; i <= 9; i = i + 1 { f(i) }");

    match &program.statements[0] {
        Stmt::For(stmt) => match &stmt.header {
            ForHeader::Classic { init, condition, post } => {
                assert!(matches!(init.as_deref(), Some(Stmt::VarDecl(_))));
                assert_eq!(condition.as_ref().map(grouped), Some("(i <= 9)".to_string()));
                assert_eq!(
                    post.as_ref().map(|post| grouped(&post.expression)),
                    Some("(i = (i + 1))".to_string())
                );
                assert_eq!(stmt.body.body.len(), 1);
            }
            other => panic!("expected classic header, got {:?}", other),
        },
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_parse_for_variants() {
    // Condition only.
    let program = parse_ok("for n > 0 { n = n - 1 }");
    assert!(matches!(&program.statements[0], Stmt::For(stmt) if matches!(
        stmt.header,
        ForHeader::Classic { init: None, condition: Some(_), post: None }
    )));

    // Expression init, empty condition.
    let program = parse_ok("for i = 0; ; i = i + 1 { break }");
    match &program.statements[0] {
        Stmt::For(stmt) => match &stmt.header {
            ForHeader::Classic { init, condition, post } => {
                assert!(matches!(init.as_deref(), Some(Stmt::Expression(_))));
                assert!(condition.is_none());
                assert!(post.is_some());
            }
            other => panic!("expected classic header, got {:?}", other),
        },
        other => panic!("expected for, got {:?}", other),
    }

    // Empty init and post.
    let program = parse_ok("for ; ok(); { continue }");
    assert!(matches!(&program.statements[0], Stmt::For(stmt) if matches!(
        stmt.header,
        ForHeader::Classic { init: None, condition: Some(_), post: None }
    )));
}

#[test]
fn test_imports_are_collected_separately() {
    let program = parse_ok("skill a { }\nimport lib.common\nimport \"shared\"");

    assert_eq!(program.imports.len(), 2);
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(program.imports[0].value, Expr::Member(_)));
    assert!(matches!(program.imports[1].value, Expr::String(_)));
}

#[test]
fn test_return_without_value() {
    let program = parse_ok("var f = func() { return }\nvar g = func() { return; }");

    for stmt in &program.statements {
        match stmt {
            Stmt::VarDecl(decl) => match &decl.value {
                Expr::Function(function) => {
                    assert!(matches!(&function.body.body[0], Stmt::Return(ret) if ret.value.is_none()));
                }
                other => panic!("expected function, got {:?}", other),
            },
            other => panic!("expected var, got {:?}", other),
        }
    }
}

#[test]
fn test_loose_comments_are_kept() {
    let program = parse_ok("-- header\nvar a = 1 -- trailing\nif a {\n  -- inside\n  f()\n}\n-- footer");

    let kinds: Vec<String> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::Comment(comment) => format!("comment:{}", comment.value),
            Stmt::VarDecl(_) => "var".to_string(),
            Stmt::If(_) => "if".to_string(),
            other => format!("{:?}", other),
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["comment: header", "var", "comment: trailing", "if", "comment: footer"]
    );

    match &program.statements[3] {
        Stmt::If(stmt) => {
            assert!(matches!(&stmt.consequence.body[0], Stmt::Comment(c) if c.value == " inside"));
            assert_eq!(stmt.consequence.body.len(), 2);
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_comments_inside_declarations_are_dropped() {
    let program = parse_ok("skill a {\n  -- hp\n  hp = 1,\n  cast = func() { f() }\n}\n");

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Stmt::Skill(skill) => match &skill.properties[1].value {
            Expr::Function(function) => assert_eq!(function.body.body.len(), 1),
            other => panic!("expected function, got {:?}", other),
        },
        other => panic!("expected skill, got {:?}", other),
    }
}

#[test]
fn test_expect_peek_error_message() {
    let errors = parse("var = 2".to_string(), Some("bad.sk".to_string()))
        .expect_err("should fail");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "=".to_string(),
            expected: TokenKind::Identifier
        }
    );
    assert!(errors[0]
        .to_string()
        .ends_with("bad.sk:1:5: unexpected token \"=\", expected Identifier"));
}

#[test]
fn test_no_prefix_parse_function() {
    let errors = parse("var a = 1 @".to_string(), None).expect_err("should fail");

    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::NoPrefixParseFunction {
            kind: TokenKind::Illegal
        }
    );
    assert_eq!(errors[0].get_position().column, 11);
    assert_eq!(errors[0].get_position().file.as_str(), "shell");
}

#[test]
fn test_import_inside_block_is_rejected() {
    let errors = parse("if a { import b }".to_string(), None).expect_err("should fail");

    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::NoPrefixParseFunction {
            kind: TokenKind::Import
        }
    );
}

#[test]
fn test_table_errors() {
    let errors = parse("var t = { 1 2 }".to_string(), None).expect_err("should fail");
    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::UnexpectedTableSeparator {
            kind: TokenKind::Integer
        }
    );

    let errors = parse("var t = { \"k\" = 1 }".to_string(), None).expect_err("should fail");
    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::InvalidTableKey {
            kind: TokenKind::String
        }
    );
}

#[test]
fn test_malformed_range_for() {
    let errors = parse("for k, 1 = range t { }".to_string(), None).expect_err("should fail");

    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::MalformedRangeFor {
            token: "1".to_string()
        }
    );
}

#[test]
fn test_missing_property_separator() {
    let errors = parse("skill a { hp = 10 mp = 4 }".to_string(), None).expect_err("should fail");

    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "mp".to_string(),
            expected: TokenKind::CloseCurly
        }
    );
}

#[test]
fn test_integer_overflow_is_reported() {
    let errors = parse("var a = 99999999999999999999".to_string(), None).expect_err("should fail");

    assert_eq!(errors[0].get_error_name(), "NumberParseError");
}

#[test]
fn test_float_overflow_is_reported() {
    let source = format!("var x = 1{}.5", "0".repeat(400));
    let errors = parse(source, None).expect_err("should fail");

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].get_internal_error(),
        ErrorImpl::NumberParseError { token } if token.starts_with("1000") && token.ends_with(".5")
    ));
    assert_eq!(errors[0].get_position().column, 9);
}

#[test]
fn test_unterminated_block_ends_at_eof() {
    let program = parse_ok("if a { f()");

    assert!(matches!(&program.statements[0], Stmt::If(stmt) if stmt.consequence.body.len() == 1));
}

#[test]
fn test_function_parameters_must_be_identifiers() {
    let errors = parse("var f = func(a, 1) { }".to_string(), None).expect_err("should fail");

    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "1".to_string(),
            message: "function parameters must be identifiers".to_string(),
        }
    );
    assert_eq!(errors[0].get_position().column, 17);
}
