use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("invalid token pattern"),
        handler,
    }
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\r\n]+").expect("invalid whitespace pattern");

    // Order matters: longer operators must come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[a-zA-Z][a-zA-Z0-9_-]*", symbol_handler),
        pattern("^[0-9]+(\\.[0-9]+)?", number_handler),
        pattern("^\"[^\"]*\"?", string_handler),
        pattern("^--[^\n]*", comment_handler),
        pattern("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

/// On-demand scanner over a single source text.
///
/// The cursor only ever moves forward, and once it reaches the end of input
/// every further call to [`Lexer::next_token`] returns the same EOF token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    /// Moves the cursor `n` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Returns the text `regex` matches at the cursor.
    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn skip_whitespace(&mut self) {
        if let Some(m) = WHITESPACE.find(self.remainder()) {
            let len = m.end();
            self.advance_n(len);
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = if self.at_eof() {
            let position = self.position();
            MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span {
                    start: position.clone(),
                    end: position
                }
            )
        } else {
            match PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()))
            {
                Some(pattern) => (pattern.handler)(self, &pattern.regex),
                None => self.illegal(),
            }
        };

        log::trace!("{}", token);
        token
    }

    fn illegal(&mut self) -> Token {
        let start = self.position();
        let ch = self.remainder().chars().next().unwrap_or('\0');
        self.advance_n(ch.len_utf8());

        MK_TOKEN!(
            TokenKind::Illegal,
            ch.to_string(),
            Span {
                start,
                end: self.position()
            }
        )
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let matched = lexer.matched(regex);
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let start = lexer.position();
    lexer.advance_n(matched.len());
    MK_TOKEN!(kind, matched, Span { start, end: lexer.position() })
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let matched = lexer.matched(regex);

    // No escape processing: everything between the quotes is kept verbatim,
    // and an unterminated string runs to the end of input.
    let inner = &matched[1..];
    let literal = inner.strip_suffix('"').unwrap_or(inner).to_string();

    let start = lexer.position();
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::String, literal, Span { start, end: lexer.position() })
}

fn comment_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let matched = lexer.matched(regex);
    let text = matched[2..].trim_end_matches('\r').to_string();

    let start = lexer.position();
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::Comment, text, Span { start, end: lexer.position() })
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance_n(value.len());
    MK_TOKEN!(kind, value, Span { start, end: lexer.position() })
}

/// Scans the whole source, returning every token up to and including EOF.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
