use std::{fmt::Display, panic::Location};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse failure at a DSL source position.
///
/// Besides the DSL position, every error remembers which line of this crate
/// raised it, which makes malformed-input reports easy to trace back to the
/// grammar rule that rejected them.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    origin: &'static Location<'static>,
}

impl Error {
    #[track_caller]
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            origin: Location::caller(),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_origin(&self) -> &'static Location<'static> {
        self.origin
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidTableKey { .. } => "InvalidTableKey",
            ErrorImpl::UnexpectedTableSeparator { .. } => "UnexpectedTableSeparator",
            ErrorImpl::MalformedRangeFor { .. } => "MalformedRangeFor",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("expected {}", expected))
            }
            ErrorImpl::UnexpectedTokenDetailed { message, .. } => {
                ErrorTip::Suggestion(message.clone())
            }
            ErrorImpl::NoPrefixParseFunction { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidTableKey { .. } => ErrorTip::Suggestion(String::from(
                "table keys are identifiers or bracketed expressions",
            )),
            ErrorImpl::UnexpectedTableSeparator { .. } => {
                ErrorTip::Suggestion(String::from("separate table entries with `,`"))
            }
            ErrorImpl::MalformedRangeFor { .. } => ErrorTip::Suggestion(String::from(
                "range loops look like `for k, v = range expr { }`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}:{}:{}: {}",
            self.origin.file(),
            self.origin.line(),
            self.position.file,
            self.position.line,
            self.position.column,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token {token:?}, expected {expected:?}")]
    UnexpectedToken { token: String, expected: TokenKind },
    #[error("unexpected token {token:?}: {message}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("no prefix parse function for token {kind}")]
    NoPrefixParseFunction { kind: TokenKind },
    #[error("could not parse {token:?} as a number")]
    NumberParseError { token: String },
    #[error("invalid table key: {kind}")]
    InvalidTableKey { kind: TokenKind },
    #[error("expected next token to be Comma or CloseCurly, got {kind} instead")]
    UnexpectedTableSeparator { kind: TokenKind },
    #[error("malformed range loop near {token:?}")]
    MalformedRangeFor { token: String },
}
