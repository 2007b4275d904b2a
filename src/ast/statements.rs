use std::slice::Iter;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, PropertyDef, Stmt},
    expressions::SymbolExpr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub token: Token,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub value: Expr,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: SymbolExpr,
    pub value: Expr,
    pub token: Token,
}

/// If Statement
///
/// The primary branch plus the `else if` / `else` alternatives in source
/// order. Only the last alternative may lack a condition.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequence: BlockStmt,
    pub alternatives: Vec<ElseStmt>,
    pub token: Token,
}

/// `else if cond { }` when `condition` is set, plain `else { }` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseStmt {
    pub condition: Option<Expr>,
    pub consequence: BlockStmt,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub token: Token,
}

/// A loose `--` comment between statements; `value` excludes the dashes.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentStmt {
    pub value: String,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub token: Token,
}

/// The two mutually exclusive shapes of a `for` header.
#[derive(Debug, Clone, PartialEq)]
pub enum ForHeader {
    /// `for [key,] value = range iterable`
    Range {
        key: Option<SymbolExpr>,
        value: SymbolExpr,
        iterable: Expr,
    },
    /// `for init; condition; post` or the condition-only `for condition`.
    Classic {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        post: Option<ExpressionStmt>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub header: ForHeader,
    pub body: BlockStmt,
    pub token: Token,
}

impl ForStmt {
    pub fn is_range_form(&self) -> bool {
        matches!(self.header, ForHeader::Range { .. })
    }
}

/// Skill Declaration
///
/// Property order is preserved; it is the order the generated table uses.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillDecl {
    pub name: SymbolExpr,
    pub properties: Vec<PropertyDef>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateDecl {
    pub name: SymbolExpr,
    pub properties: Vec<PropertyDef>,
    pub token: Token,
}
