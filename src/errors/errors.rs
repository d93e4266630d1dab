use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::MissingOperand { operator, found } => {
                if found.is_empty() {
                    ErrorTip::Suggestion(format!(
                        "Expected a number after `{}`, found end of input",
                        operator
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Expected a number after `{}`, found `{}`",
                        operator, found
                    ))
                }
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
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

/// The two independent failure conditions of the front-end.
///
/// `IllegalCharacter` comes from the lexer layer and `MissingOperand` from the
/// parser layer; neither is ever produced by the other.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {token:?}")]
    IllegalCharacter { token: String },
    #[error("missing operand after {operator:?}, found {found:?}")]
    MissingOperand { operator: String, found: String },
}
