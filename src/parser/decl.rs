//! Skill and state declarations, plus the two aggregate literals that show
//! up as their property values: tables and functions.

use crate::{
    ast::{
        ast::{Expr, PropertyDef, Stmt},
        expressions::{FunctionExpr, SymbolExpr, TableExpr},
        statements::{SkillDecl, StateDecl},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_skill_decl(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let name = SymbolExpr::from_token(parser.expect_peek(TokenKind::Identifier)?);
    let properties = parse_decl_properties(parser)?;

    Ok(Stmt::Skill(SkillDecl {
        name,
        properties,
        token,
    }))
}

pub fn parse_state_decl(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let name = SymbolExpr::from_token(parser.expect_peek(TokenKind::Identifier)?);
    let properties = parse_decl_properties(parser)?;

    Ok(Stmt::State(StateDecl {
        name,
        properties,
        token,
    }))
}

/// `{ (ident = expr ,?)* }` of a skill or state, entered with `current` on
/// the declaration name.
fn parse_decl_properties(parser: &mut Parser) -> Result<Vec<PropertyDef>, Error> {
    parser.expect_peek(TokenKind::OpenCurly)?;
    parser.advance();

    let mut properties = vec![];
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
    {
        let key_token = parser.current_token().clone();
        if key_token.kind != TokenKind::Identifier {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: key_token.value.clone(),
                    expected: TokenKind::Identifier,
                },
                key_token.span.start.clone(),
            ));
        }

        parser.expect_peek(TokenKind::Assignment)?;
        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;

        properties.push(PropertyDef {
            key: Some(Expr::Symbol(SymbolExpr::from_token(key_token.clone()))),
            value,
            token: key_token,
        });

        if parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.peek_token_kind() != TokenKind::CloseCurly {
            parser.expect_peek(TokenKind::CloseCurly)?;
        }
        parser.advance();
    }

    Ok(properties)
}

/// Table literal, entered with `current` on `{`.
///
/// Entries are `[expr] = value`, `ident = value` or a bare positional value.
pub fn parse_table_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let mut properties = vec![];

    if parser.peek_token_kind() == TokenKind::CloseCurly {
        parser.advance();
        return Ok(Expr::Table(TableExpr { properties, token }));
    }

    parser.advance();
    loop {
        let entry_token = parser.current_token().clone();

        let property = if entry_token.kind == TokenKind::OpenBracket {
            parser.advance();
            let key = parse_expr(parser, BindingPower::Default)?;
            parser.expect_peek(TokenKind::CloseBracket)?;
            parser.expect_peek(TokenKind::Assignment)?;
            parser.advance();

            PropertyDef {
                key: Some(key),
                value: parse_expr(parser, BindingPower::Default)?,
                token: entry_token,
            }
        } else if entry_token.kind == TokenKind::Identifier
            && parser.peek_token_kind() == TokenKind::Assignment
        {
            parser.advance();
            parser.advance();

            PropertyDef {
                key: Some(Expr::Symbol(SymbolExpr::from_token(entry_token.clone()))),
                value: parse_expr(parser, BindingPower::Default)?,
                token: entry_token,
            }
        } else {
            let value = parse_expr(parser, BindingPower::Default)?;

            // `a.b = 1` or `"k" = 1` would otherwise slip through as a
            // positional assignment expression.
            if let Expr::Infix(infix) = &value {
                if infix.operator == "=" {
                    let key = infix.left.get_token();
                    return Err(Error::new(
                        ErrorImpl::InvalidTableKey { kind: key.kind },
                        key.span.start.clone(),
                    ));
                }
            }

            PropertyDef {
                key: None,
                value,
                token: entry_token,
            }
        };
        properties.push(property);

        match parser.peek_token_kind() {
            TokenKind::Comma => {
                parser.advance();
                if parser.peek_token_kind() == TokenKind::CloseCurly {
                    parser.advance();
                    break;
                }
                parser.advance();
            }
            TokenKind::CloseCurly => {
                parser.advance();
                break;
            }
            kind => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTableSeparator { kind },
                    parser.peek_token().span.start.clone(),
                ));
            }
        }
    }

    Ok(Expr::Table(TableExpr { properties, token }))
}

/// `func(a, b) { body }`, entered with `current` on `func`.
pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    parser.expect_peek(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        loop {
            let param = parser.advance().clone();
            if param.kind != TokenKind::Identifier {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: param.value.clone(),
                        message: String::from("function parameters must be identifiers"),
                    },
                    param.span.start.clone(),
                ));
            }
            parameters.push(SymbolExpr::from_token(param));

            if parser.peek_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                parser.expect_peek(TokenKind::CloseParen)?;
                break;
            }
        }
    }

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        parameters,
        body,
        token,
    }))
}
