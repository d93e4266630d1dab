//! Error types and error handling for the front-end.
//!
//! This module defines the error types produced while lexing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - One variant per failure condition (lexer garbage, incomplete expression)
//! - Error tips used by the caret diagnostic renderer

pub mod errors;
