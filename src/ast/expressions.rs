use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, PropertyDef},
    statements::BlockStmt,
};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub token: Token,
}

impl SymbolExpr {
    /// Builds a symbol straight from an identifier token.
    pub fn from_token(token: Token) -> Self {
        SymbolExpr {
            value: token.value.clone(),
            token,
        }
    }
}

/// Integer Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub token: Token,
}

/// Float Expression
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
    pub token: Token,
}

/// String Expression
/// Holds the text between the quotes, exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub token: Token,
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub token: Token,
}

// COMPLEX

/// Prefix Expression
/// `not x` or `-x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right: Box<Expr>,
    pub token: Token,
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
///
/// This includes assignment (`a = b`) as well as arithmetic, comparison and
/// logical operators.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub token: Token,
}

/// Member Expression
/// Dotted access, `left.member`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub left: Box<Expr>,
    pub member: Box<Expr>,
    pub token: Token,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub token: Token,
}

/// Table Expression
/// An ordered aggregate of keyed and positional entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExpr {
    pub properties: Vec<PropertyDef>,
    pub token: Token,
}

/// Function Expression
///
/// An anonymous `func(params) { ... }` literal. The name it is bound to, when
/// it is the value of a skill or state property, is supplied by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<SymbolExpr>,
    pub body: BlockStmt,
    pub token: Token,
}
