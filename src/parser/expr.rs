use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FloatExpr, InfixExpr, IntegerExpr, MemberExpr, PrefixExpr,
            StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Tokens in `peek` that always end the expression being parsed.
const EXPRESSION_TERMINATORS: [TokenKind; 4] = [
    TokenKind::Semicolon,
    TokenKind::CloseCurly,
    TokenKind::CloseParen,
    TokenKind::OpenCurly,
];

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFunction { kind: token_kind },
            parser.current_token().span.start.clone(),
        ));
    };

    let left = nud(parser)?;
    parse_infix_chain(parser, left, bp)
}

/// Keeps folding infix operators onto `left` while the next operator binds
/// tighter than `bp`.
pub fn parse_infix_chain(
    parser: &mut Parser,
    mut left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    while !parser.peek_token().is_one_of_many(&EXPRESSION_TERMINATORS)
        && bp < parser.peek_binding_power()
    {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Integer => match token.value.parse() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr { value, token })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        },
        // Out-of-range literals parse to infinity, which Lua cannot spell.
        TokenKind::Float => match token.value.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::Float(FloatExpr { value, token })),
            _ => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        },
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr::from_token(token))),
        TokenKind::String => Ok(Expr::String(StringExpr {
            value: token.value.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixParseFunction { kind: token.kind },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        right: Box::new(right),
        token: operator_token,
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator: operator_token.value.clone(),
        right: Box::new(right),
        token: operator_token,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
        token,
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let member = parser.expect_peek(TokenKind::Identifier)?;

    Ok(Expr::Member(MemberExpr {
        left: Box::new(left),
        member: Box::new(Expr::Symbol(SymbolExpr::from_token(member))),
        token,
    }))
}

/// Parses comma separated expressions up to the closing `end` token.
/// Entered with `current` on the opening delimiter.
pub fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut list = vec![];

    if parser.peek_token_kind() == end {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(end)?;
    Ok(list)
}
