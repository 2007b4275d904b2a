//! Token construction shorthands for the lexer's pattern table.

/// Builds a [`Token`](crate::lexer::tokens::Token) from a kind, its text and
/// the span it covers.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Handler for fixed-text tokens such as `+` or `==`: consumes `$value`
/// and returns a `$kind` token over it.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _regex: &::regex::Regex| {
            let start = lexer.position();
            lexer.advance_n($value.len());
            $crate::MK_TOKEN!(
                $kind,
                String::from($value),
                $crate::Span {
                    start,
                    end: lexer.position()
                }
            )
        }
    };
}
