//! Parser state and the top-level program loop.
//!
//! The parser keeps two tokens of lookahead (`current` and `peek`) over an
//! on-demand [`Lexer`]. Handlers are dispatched through lookup tables keyed by
//! [`TokenKind`]:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Every handler is entered with `current` on the first token of its
//! construct and returns with `current` on the last one.

use std::collections::{HashMap, VecDeque};

use crate::{
    ast::{
        ast::{Program, Stmt},
        statements::CommentStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::{parse_import_stmt, parse_stmt},
};

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<Error>,
    /// Comments skipped by `advance`, oldest first, waiting to be either
    /// attached as statements or discarded.
    comments: VecDeque<Token>,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: vec![],
            comments: VecDeque::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        // Fill both lookahead slots.
        parser.advance();
        parser.advance();
        parser
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead window by one significant token and returns the
    /// new current token. Comment tokens never land in either slot.
    pub fn advance(&mut self) -> &Token {
        let next = self.next_significant_token();
        self.current = std::mem::replace(&mut self.peek, next);
        &self.current
    }

    fn next_significant_token(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            if token.kind != TokenKind::Comment {
                return token;
            }
            self.comments.push_back(token);
        }
    }

    /// Advances if `peek` is of the given kind, otherwise fails without
    /// moving.
    #[track_caller]
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind == expected_kind {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.peek.value.clone(),
                    expected: expected_kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Steps over a `;` sitting in `peek`, if there is one.
    pub fn skip_optional_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Turns every pending comment that starts before `position` into a
    /// comment statement.
    pub fn take_comments_before(&mut self, position: &Position) -> Vec<Stmt> {
        let mut stmts = vec![];
        while let Some(comment) = self.comments.front() {
            if !comment.span.start.is_before(position) {
                break;
            }
            if let Some(comment) = self.comments.pop_front() {
                stmts.push(Stmt::Comment(CommentStmt {
                    value: comment.value.clone(),
                    token: comment,
                }));
            }
        }
        stmts
    }

    /// Drops pending comments that start before `position`.
    pub fn discard_comments_before(&mut self, position: &Position) {
        while self
            .comments
            .front()
            .is_some_and(|comment| comment.span.start.is_before(position))
        {
            self.comments.pop_front();
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until end of input or the first error.
    ///
    /// Returns `None` when any error was recorded; the errors are then
    /// available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Option<Program> {
        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF && self.errors.is_empty() {
            let start = self.current.span.start.clone();
            let comments = self.take_comments_before(&start);
            program.statements.extend(comments);

            let result = if self.current.kind == TokenKind::Import {
                parse_import_stmt(self).map(|import| program.imports.push(import))
            } else {
                parse_stmt(self).map(|stmt| program.statements.push(stmt))
            };

            if let Err(error) = result {
                log::debug!("parse error: {}", error);
                self.errors.push(error);
                break;
            }

            let end = self.current.span.start.clone();
            self.discard_comments_before(&end);
            self.advance();
        }

        if !self.errors.is_empty() {
            return None;
        }

        let end = self.current.span.end.clone();
        let trailing = self.take_comments_before(&end);
        program.statements.extend(trailing);

        log::debug!(
            "parsed {} imports and {} statements",
            program.imports.len(),
            program.statements.len()
        );
        Some(program)
    }
}

/// Parses a whole source text, returning the program or every error found.
pub fn parse(source: String, file: Option<String>) -> Result<Program, Vec<Error>> {
    let mut parser = Parser::new(Lexer::new(source, file));

    match parser.parse_program() {
        Some(program) => Ok(program),
        None => Err(parser.into_errors()),
    }
}
