//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers (with hyphens)
//! - Numeric literals (integers and floats)
//! - String literals without escape processing
//! - Operators and punctuation
//! - Comments
//! - Illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.sk".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "skill state import func if else return true false not and or var for break continue range";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Skill,
            TokenKind::State,
            TokenKind::Import,
            TokenKind::Func,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Var,
            TokenKind::For,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Range,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_1 my-skill CamelCase skills".to_string();
    let tokens = tokenize(source, Some("test.sk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_1");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "my-skill");
    assert_eq!(tokens[3].value, "CamelCase");
    // Keywords only match whole words.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "skills");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 7.".to_string();
    let tokens = tokenize(source, Some("test.sk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    // A float needs a digit after the dot.
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "7");
    assert_eq!(tokens[4].kind, TokenKind::Dot);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings_verbatim() {
    let source = r#""hello" "a\nb" "two words""#.to_string();
    let tokens = tokenize(source, Some("test.sk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "a\\nb");
    assert_eq!(tokens[2].value, "two words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    let tokens = tokenize("x = \"open to the end".to_string(), None);

    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "open to the end");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "= == != < > <= >= + - * / . , ( ) { } [ ] ;";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "a -- trailing note\n-- whole line\nb".to_string();
    let tokens = tokenize(source, Some("test.sk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Comment);
    assert_eq!(tokens[1].value, " trailing note");
    assert_eq!(tokens[2].kind, TokenKind::Comment);
    assert_eq!(tokens[2].value, " whole line");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "b");
}

#[test]
fn test_tokenize_unterminated_comment() {
    let tokens = tokenize("-- no newline".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("a ! _b @".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "!");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "_");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "b");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let source = "var x = 1\n  y".to_string();
    let tokens = tokenize(source, Some("pos.sk".to_string()));

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[3].span.start.column, 9);
    assert_eq!(tokens[4].span.start.line, 2);
    assert_eq!(tokens[4].span.start.column, 3);
    assert_eq!(tokens[4].span.start.file.as_str(), "pos.sk");
}

#[test]
fn test_eof_is_stable() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert!(lexer.at_eof());
}
