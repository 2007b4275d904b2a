use crate::lexer::tokens::Token;

use super::{
    expressions::{
        BooleanExpr, CallExpr, FloatExpr, FunctionExpr, InfixExpr, IntegerExpr, MemberExpr,
        PrefixExpr, StringExpr, SymbolExpr, TableExpr,
    },
    statements::{
        BreakStmt, CommentStmt, ContinueStmt, ExpressionStmt, ForStmt, IfStmt, ImportStmt,
        ReturnStmt, SkillDecl, StateDecl, VarDeclStmt,
    },
};

/// Node Trait
///
/// Every AST node can report the literal text of the token it was built from.
pub trait Node {
    fn token_literal(&self) -> &str;
}

/// Statement
///
/// Closed set of every statement kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Import(ImportStmt),
    VarDecl(VarDeclStmt),
    If(IfStmt),
    Return(ReturnStmt),
    Comment(CommentStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    For(ForStmt),
    Skill(SkillDecl),
    State(StateDecl),
}

impl Stmt {
    /// Returns the token the statement was built from.
    pub fn get_token(&self) -> &Token {
        match self {
            Stmt::Expression(stmt) => &stmt.token,
            Stmt::Import(stmt) => &stmt.token,
            Stmt::VarDecl(stmt) => &stmt.token,
            Stmt::If(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Comment(stmt) => &stmt.token,
            Stmt::Break(stmt) => &stmt.token,
            Stmt::Continue(stmt) => &stmt.token,
            Stmt::For(stmt) => &stmt.token,
            Stmt::Skill(stmt) => &stmt.token,
            Stmt::State(stmt) => &stmt.token,
        }
    }
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        &self.get_token().value
    }
}

/// Expression
///
/// Closed set of every expression kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    Float(FloatExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Member(MemberExpr),
    Call(CallExpr),
    Table(TableExpr),
    Function(FunctionExpr),
}

impl Expr {
    /// Returns the token the expression was built from.
    pub fn get_token(&self) -> &Token {
        match self {
            Expr::Symbol(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Float(expr) => &expr.token,
            Expr::String(expr) => &expr.token,
            Expr::Boolean(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::Member(expr) => &expr.token,
            Expr::Call(expr) => &expr.token,
            Expr::Table(expr) => &expr.token,
            Expr::Function(expr) => &expr.token,
        }
    }

    /// Returns the identifier name if this is a plain symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expr::Symbol(symbol) => Some(&symbol.value),
            _ => None,
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        &self.get_token().value
    }
}

/// Property Definition
///
/// A `key = value` entry of a skill, state or table body. A missing key
/// marks a positional (array-style) element.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDef {
    pub key: Option<Expr>,
    pub value: Expr,
    pub token: Token,
}

/// Program
///
/// Imports are kept apart from the other top-level statements and always
/// come first, wherever they appeared in the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub imports: Vec<ImportStmt>,
    pub statements: Vec<Stmt>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

/// Looks up the first property keyed by the identifier `name` and renders
/// its value, if it is an integer or string literal.
pub fn find_property_by_name(name: &str, properties: &[PropertyDef]) -> Option<String> {
    properties
        .iter()
        .filter(|prop| prop.key.as_ref().and_then(Expr::as_symbol) == Some(name))
        .find_map(|prop| match &prop.value {
            Expr::Integer(integer) => Some(integer.value.to_string()),
            Expr::String(string) => Some(string.value.clone()),
            _ => None,
        })
}

pub fn is_same_identifier(left: &Expr, right: &Expr) -> bool {
    match (left.as_symbol(), right.as_symbol()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
