//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens on demand. It handles:
//!
//! - Identifiers (letters only) and the `if` / `while` keywords
//! - Integer literals, kept as their source text
//! - The `=`, `+` and `-` operators
//! - Whitespace skipping and illegal-character passthrough

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
