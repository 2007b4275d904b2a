use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{InfixExpr, SymbolExpr},
        statements::{
            BlockStmt, BreakStmt, ContinueStmt, ElseStmt, ExpressionStmt, ForHeader, ForStmt,
            IfStmt, ImportStmt, ReturnStmt, VarDeclStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{parse_expr, parse_infix_chain},
    lookups::BindingPower,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.skip_optional_semicolon();

    Ok(Stmt::Expression(ExpressionStmt { expression, token }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let identifier = SymbolExpr::from_token(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_optional_semicolon();

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        value,
        token,
    }))
}

/// `import a.b` or `import "path"`. Only valid at the top level.
pub fn parse_import_stmt(parser: &mut Parser) -> Result<ImportStmt, Error> {
    let token = parser.current_token().clone();

    if parser.peek_token_kind() == TokenKind::String {
        parser.advance();
    } else {
        parser.expect_peek(TokenKind::Identifier)?;
    }

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_optional_semicolon();

    Ok(ImportStmt { value, token })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let value = if parser.peek_token().is_one_of_many(&[
        TokenKind::Semicolon,
        TokenKind::CloseCurly,
        TokenKind::EOF,
    ]) {
        None
    } else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    };
    parser.skip_optional_semicolon();

    Ok(Stmt::Return(ReturnStmt { value, token }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.skip_optional_semicolon();

    Ok(Stmt::Break(BreakStmt { token }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.skip_optional_semicolon();

    Ok(Stmt::Continue(ContinueStmt { token }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let mut alternatives = vec![];
    while parser.peek_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.peek_token_kind() == TokenKind::If {
            parser.advance();
            parser.advance();

            let else_token = parser.current_token().clone();
            let condition = parse_expr(parser, BindingPower::Default)?;
            parser.expect_peek(TokenKind::OpenCurly)?;

            alternatives.push(ElseStmt {
                condition: Some(condition),
                consequence: parse_block_stmt(parser)?,
                token: else_token,
            });
        } else {
            let else_token = parser.expect_peek(TokenKind::OpenCurly)?;

            alternatives.push(ElseStmt {
                condition: None,
                consequence: parse_block_stmt(parser)?,
                token: else_token,
            });
            // Nothing may follow a bare `else`.
            break;
        }
    }

    Ok(Stmt::If(IfStmt {
        condition,
        consequence,
        alternatives,
        token,
    }))
}

/// Parses `{ stmt* }`, entered with `current` on the `{`.
///
/// Loose comments inside the braces become comment statements. A block cut
/// short by end of input ends there without an error.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.discard_comments_before(&token.span.start);
    parser.advance();

    let mut body = vec![];
    loop {
        let start = parser.current_token().span.start.clone();
        body.extend(parser.take_comments_before(&start));

        if parser
            .current_token()
            .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
        {
            break;
        }

        body.push(parse_stmt(parser)?);

        let end = parser.current_token().span.start.clone();
        parser.discard_comments_before(&end);
        parser.advance();
    }

    Ok(BlockStmt { body, token })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    // for key, value = range expr { }
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_token_kind() == TokenKind::Comma
    {
        let key = SymbolExpr::from_token(parser.current_token().clone());
        parser.advance();
        parser.advance();

        if parser.current_token_kind() != TokenKind::Identifier {
            return Err(Error::new(
                ErrorImpl::MalformedRangeFor {
                    token: parser.current_token().value.clone(),
                },
                parser.current_token().span.start.clone(),
            ));
        }
        let value = SymbolExpr::from_token(parser.current_token().clone());

        parser.expect_peek(TokenKind::Assignment)?;
        parser.expect_peek(TokenKind::Range)?;
        return parse_range_for(parser, token, Some(key), value);
    }

    // `ident = ...` is either a key-less range loop or an assignment that
    // opens a classic or condition-only loop.
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_token_kind() == TokenKind::Assignment
    {
        let ident = parser.current_token().clone();
        let assign = parser.advance().clone();
        parser.advance();

        if parser.current_token_kind() == TokenKind::Range {
            return parse_range_for(parser, token, None, SymbolExpr::from_token(ident));
        }

        let right = parse_expr(parser, BindingPower::Assignment)?;
        let assignment = Expr::Infix(InfixExpr {
            left: Box::new(Expr::Symbol(SymbolExpr::from_token(ident))),
            operator: assign.value.clone(),
            right: Box::new(right),
            token: assign,
        });
        let leading = parse_infix_chain(parser, assignment, BindingPower::Default)?;
        return parse_leading_expr_for(parser, token, leading);
    }

    match parser.current_token_kind() {
        TokenKind::Var => {
            let init = parse_var_decl_stmt(parser)?;
            if parser.current_token_kind() != TokenKind::Semicolon {
                parser.expect_peek(TokenKind::Semicolon)?;
            }
            parse_classic_for(parser, token, Some(Box::new(init)))
        }
        TokenKind::Semicolon => parse_classic_for(parser, token, None),
        _ => {
            let leading = parse_expr(parser, BindingPower::Default)?;
            parse_leading_expr_for(parser, token, leading)
        }
    }
}

/// Entered with `current` on `range`.
fn parse_range_for(
    parser: &mut Parser,
    token: Token,
    key: Option<SymbolExpr>,
    value: SymbolExpr,
) -> Result<Stmt, Error> {
    parser.advance();
    let iterable = parse_expr(parser, BindingPower::Default)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        header: ForHeader::Range {
            key,
            value,
            iterable,
        },
        body,
        token,
    }))
}

/// A header that opened with an expression: `for cond { }` when a block
/// follows, otherwise the expression is the init of `for init; cond; post`.
fn parse_leading_expr_for(parser: &mut Parser, token: Token, leading: Expr) -> Result<Stmt, Error> {
    if parser.peek_token_kind() == TokenKind::OpenCurly {
        parser.advance();
        let body = parse_block_stmt(parser)?;

        return Ok(Stmt::For(ForStmt {
            header: ForHeader::Classic {
                init: None,
                condition: Some(leading),
                post: None,
            },
            body,
            token,
        }));
    }

    if parser.peek_token_kind() != TokenKind::Semicolon {
        parser.expect_peek(TokenKind::OpenCurly)?;
    }
    parser.advance();

    let init = Stmt::Expression(ExpressionStmt {
        token: leading.get_token().clone(),
        expression: leading,
    });
    parse_classic_for(parser, token, Some(Box::new(init)))
}

/// Parses `cond; post { body }`, entered with `current` on the `;` that
/// closes the init segment. Condition and post may both be empty.
fn parse_classic_for(
    parser: &mut Parser,
    token: Token,
    init: Option<Box<Stmt>>,
) -> Result<Stmt, Error> {
    parser.advance();

    let condition = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        let condition = parse_expr(parser, BindingPower::Default)?;
        parser.expect_peek(TokenKind::Semicolon)?;
        Some(condition)
    };

    let post = if parser.peek_token_kind() == TokenKind::OpenCurly {
        None
    } else {
        parser.advance();
        let post_token = parser.current_token().clone();
        Some(ExpressionStmt {
            expression: parse_expr(parser, BindingPower::Default)?,
            token: post_token,
        })
    };

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        header: ForHeader::Classic {
            init,
            condition,
            post,
        },
        body,
        token,
    }))
}
