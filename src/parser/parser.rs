//! Parser state and entry points.

use std::mem;

use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::expr::parse_expr;

/// The main parser structure that maintains parsing state.
///
/// The parser drives exactly one lexer for as long as it lives, holding one
/// token of lookahead.
pub struct Parser<'a> {
    /// The lexer tokens are pulled from
    lexer: &'a mut Lexer,
    /// The lookahead token
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and primes the lookahead with the lexer's next token.
    pub fn new(lexer: &'a mut Lexer) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Returns the start of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses one additive expression.
    ///
    /// Returns `Ok(None)` when the first token cannot start an expression and
    /// `Err` when an operator is not followed by a number. Parsing stops at
    /// the first token that is not `+` or `-`; that token is left in
    /// [`Parser::current_token`]. The grammar has no notion of resuming, so a
    /// second call parses whatever follows as a new expression.
    pub fn parse(&mut self) -> Result<Option<Expr>, Error> {
        let result = parse_expr(self);

        match &result {
            Ok(Some(expr)) => debug!(root = %expr.token().value, "parsed expression"),
            Ok(None) => debug!(found = %self.current.kind, "no expression to parse"),
            Err(error) => debug!(%error, "parse failed"),
        }

        result
    }
}

/// Lexes and parses `source` in one go.
pub fn parse_source(source: String, file: Option<String>) -> Result<Option<Expr>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut parser = Parser::new(&mut lexer);
    parser.parse()
}
