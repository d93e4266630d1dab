//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from a
//! lexer and folds them into an expression tree. The grammar has two rules:
//!
//! ```text
//! expression := term ( ('+' | '-') term )*
//! term       := NUMBER
//! ```
//!
//! Chains fold to the left, so `1 + 2 - 3` groups as `(1 + 2) - 3`.

pub mod expr;
pub mod parser;
