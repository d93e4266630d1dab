//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators
//! - Illegal characters
//! - End-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("if while".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[0].value, "if");
    assert_eq!(tokens[1].kind, TokenKind::While);
    assert_eq!(tokens[1].value, "while");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_keyword_match_is_exact() {
    let tokens = tokenize("iffy whiles If".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "iffy");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "whiles");
    // Keywords are case sensitive
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "If");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar CamelCase".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_are_letters_only() {
    let tokens = tokenize("baz_123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "baz");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "_");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "123");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unicode_identifier() {
    let tokens = tokenize("größe".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "größe");
    assert_eq!(tokens[0].span.end.0, "größe".len() as u32);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 007".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    // Literals stay as written, leading zeros included
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_numbers_have_no_decimal_point() {
    assert_eq!(
        kinds("3.14"),
        vec![
            TokenKind::Number,
            TokenKind::Illegal,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_maximal_munch_number_then_identifier() {
    let tokens = tokenize("123abc".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "123");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + -".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[0].value, "=");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].value, "+");
    assert_eq!(tokens[2].kind, TokenKind::Minus);
    assert_eq!(tokens[2].value, "-");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_operators_are_single_characters() {
    assert_eq!(
        kinds("==+-"),
        vec![
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = tokenize("@".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "@");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_multibyte_character_is_one_token() {
    let tokens = tokenize("1 € 2".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "€");
    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 5);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "2");
}

#[test]
fn test_nul_character_is_not_end_of_input() {
    let tokens = tokenize("1\u{0}2".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "\u{0}");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_token_converts_to_error() {
    let tokens = tokenize("1 + @".to_string(), Some("test.lang".to_string()));

    assert!(tokens[0].illegal_error().is_none());

    let error = tokens[2].illegal_error().unwrap();
    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_position().0, 4);
    assert_eq!(error.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  x \t =\n\n  42  ".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_unicode_whitespace_is_skipped() {
    // NO-BREAK SPACE and IDEOGRAPHIC SPACE
    assert_eq!(
        kinds("1\u{a0}+\u{3000}2"),
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_empty_and_blank_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_end_of_input_repeats() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
        assert_eq!(token.span.start.0, 1);
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_iterator_stops_after_end_of_input() {
    let mut lexer = Lexer::new("1 + 2".to_string(), None);

    let collected: Vec<_> = lexer.by_ref().collect();
    assert_eq!(collected.len(), 4);
    assert!(lexer.next().is_none());
    // The pull interface keeps answering
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("if x = 10".to_string(), Some("test.lang".to_string()));

    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();
    assert_eq!(spans, vec![(0, 2), (3, 4), (5, 6), (7, 9), (9, 9)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.lang");
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new(String::new(), None);

    assert_eq!(lexer.file().as_str(), "shell");
}

#[test]
fn test_full_statement_token_sequence() {
    let tokens = tokenize("if x = 10 + 5 - 3".to_string(), None);

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[3].value, "10");
    assert_eq!(tokens[5].value, "5");
    assert_eq!(tokens[7].value, "3");
}

#[test]
fn test_token_debug_output() {
    let tokens = tokenize("x + 1".to_string(), None);

    assert_eq!(tokens[0].debug(), "Identifier (x)");
    assert_eq!(tokens[1].debug(), "Plus ()");
    assert_eq!(tokens[2].debug(), "Number (1)");
    assert_eq!(tokens[3].debug(), "EOF ()");
}
