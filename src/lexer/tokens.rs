use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Number,

    Assignment, // =
    Plus,       // +
    Minus,      // -

    // Reserved
    If,
    While,

    Illegal,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {:?} }}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// Converts an illegal token into a positioned error.
    ///
    /// The lexer never fails on its own; callers that want to reject garbage
    /// use this to turn the token into something reportable.
    pub fn illegal_error(&self) -> Option<Error> {
        if self.kind != TokenKind::Illegal {
            return None;
        }

        Some(Error::new(
            ErrorImpl::IllegalCharacter {
                token: self.value.clone(),
            },
            self.span.start.clone(),
        ))
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number, TokenKind::Illegal]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
