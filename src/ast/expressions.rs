use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST. The literal is kept as source
/// text; nothing downstream needs it as a machine integer.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub token: Token,
}

impl NumberExpr {
    pub fn value(&self) -> &str {
        &self.token.value
    }
}

// OPERATIONS

/// Binary Expression
/// Represents an addition or subtraction. Each node owns both operands.
///
/// The derived impls defer to `Expr`'s, which never recurse on the children.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    /// Builds a new parent over two finished subtrees, taking ownership of both.
    pub fn new(operator: Token, left: Expr, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }
}
