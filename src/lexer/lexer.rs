use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    // Identifiers are letters only: no digits, no underscores.
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^\p{L}+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^\p{Nd}+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"^\s+").unwrap();
}

/// Pull-based lexer with a single character of lookahead.
///
/// `pos` is the byte offset of `current`. It only ever moves forward; lexing
/// the same text again needs a fresh `Lexer`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    current: Option<char>,
    file: Rc<String>,
    // Set once the iterator has handed out its end-of-input token.
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let current = source.chars().next();

        Lexer {
            source,
            pos: 0,
            current,
            file: file_name,
            exhausted: false,
        }
    }

    /// Returns the next token, advancing past it.
    ///
    /// Once the input is used up every call returns an end-of-input token.
    /// Unrecognised characters come back as `Illegal` tokens; this never fails.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.current {
            Some('=') => self.single_char_token(TokenKind::Assignment),
            Some('+') => self.single_char_token(TokenKind::Plus),
            Some('-') => self.single_char_token(TokenKind::Minus),
            None => MK_TOKEN!(TokenKind::EOF, String::new(), self.span(self.pos, self.pos)),
            Some(_) => {
                if IDENTIFIER_PATTERN.is_match(self.remainder()) {
                    self.read_identifier()
                } else if NUMBER_PATTERN.is_match(self.remainder()) {
                    self.read_number()
                } else {
                    self.single_char_token(TokenKind::Illegal)
                }
            }
        };

        trace!(kind = %token.kind, value = %token.value, offset = token.span.start.0, "lexed token");
        token
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn read_char(&mut self) {
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
        }
        self.current = self.source[self.pos..].chars().next();
    }

    /// Consumes the run matched by `pattern` and returns its byte range.
    fn read_run(&mut self, pattern: &Regex) -> (usize, usize) {
        let start = self.pos;
        let end = start + pattern.find(self.remainder()).map_or(0, |m| m.end());

        while self.pos < end {
            self.read_char();
        }

        (start, end)
    }

    fn skip_whitespace(&mut self) {
        self.read_run(&WHITESPACE_PATTERN);
    }

    fn single_char_token(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        let value = self.current.map(String::from).unwrap_or_default();
        self.read_char();

        MK_TOKEN!(kind, value, self.span(start, self.pos))
    }

    fn read_identifier(&mut self) -> Token {
        let (start, end) = self.read_run(&IDENTIFIER_PATTERN);
        let value = &self.source[start..end];

        let kind = RESERVED_LOOKUP
            .get(value)
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, String::from(value), self.span(start, end))
    }

    fn read_number(&mut self) -> Token {
        let (start, end) = self.read_run(&NUMBER_PATTERN);

        MK_TOKEN!(
            TokenKind::Number,
            String::from(&self.source[start..end]),
            self.span(start, end)
        )
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }
}

/// Yields every token up to and including the first end-of-input token.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
        }

        Some(token)
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
