use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `expression := term ( ('+' | '-') term )*`
///
/// A missing leading term yields `Ok(None)`. A missing term after an operator
/// is an error positioned at the token found instead.
pub fn parse_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let Some(mut left) = parse_term(parser) else {
        return Ok(None);
    };

    while matches!(parser.current_token_kind(), TokenKind::Plus | TokenKind::Minus) {
        let operator = parser.advance();

        let Some(right) = parse_term(parser) else {
            return Err(Error::new(
                ErrorImpl::MissingOperand {
                    operator: operator.value,
                    found: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        };

        debug!(operator = %operator.value, "folding binary expression");
        left = Expr::binary(operator, left, right);
    }

    Ok(Some(left))
}

/// `term := NUMBER`
pub fn parse_term(parser: &mut Parser) -> Option<Expr> {
    match parser.current_token_kind() {
        TokenKind::Number => Some(Expr::number(parser.advance())),
        _ => None,
    }
}
