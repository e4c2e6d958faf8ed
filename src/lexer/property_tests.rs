//! Property tests for the lexer
//!
//! Covers whitespace-insensitivity between tokens, end-of-input stability
//! and total behavior on arbitrary input.

use proptest::prelude::*;

use crate::lexer::synonyms::deduce_token_kind;
use crate::lexer::{tokenize, Scanner, TokenKind};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

/// Latin or Cyrillic identifiers that are not keyword or operator words
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-zA-Z_][a-zA-Z0-9_]{0,8}", "[а-я][а-я0-9_]{0,8}"]
        .prop_filter("must not be a reserved word", |s| {
            deduce_token_kind(s) == TokenKind::Identifier
        })
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000..=1000i32).prop_map(|n| n.to_string()),
        (0..=999u32, 0..=99u32).prop_map(|(a, b)| format!("{}.{}", a, b)),
    ]
}

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(">"),
        Just("<"),
        Just(">="),
        Just("<="),
        Just("=="),
        Just("!="),
        Just("="),
    ]
}

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// `ident op number` scans the same with or without separating spaces
    #[test]
    fn prop_adjacent_tokens_match_spaced_tokens(
        ident in identifier_strategy(),
        op in operator_strategy(),
        number in number_strategy()
    ) {
        let tight = format!("{}{}{}", ident, op, number);
        let spaced = format!("{} {} {}", ident, op, number);
        prop_assert_eq!(kinds(&tight), kinds(&spaced));
    }

    /// Identifiers and numbers keep their exact text
    #[test]
    fn prop_token_text_preserved(ident in identifier_strategy(), number in number_strategy()) {
        let tokens = kinds(&format!("{}={}", ident, number));
        prop_assert_eq!(&tokens[0], &(TokenKind::Identifier, ident));
        prop_assert_eq!(&tokens[2], &(TokenKind::Number, number));
    }

    /// Once end of input is reached, it is returned forever
    #[test]
    fn prop_end_of_input_idempotent(ident in identifier_strategy(), extra in 1..10usize) {
        let mut scanner = Scanner::new(&ident);
        prop_assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
        for _ in 0..extra {
            prop_assert!(scanner.next_token().unwrap().is_eof());
        }
    }

    /// Arbitrary input scans to completion or to a lexical error, never panics
    #[test]
    fn prop_scanner_is_total(source in "\\PC{0,40}") {
        let items: Vec<_> = Scanner::new(&source).collect();
        prop_assert!(!items.is_empty());
        let last = items.last().unwrap();
        match last {
            Ok(token) => prop_assert!(token.is_eof()),
            Err(_) => prop_assert!(items[..items.len() - 1].iter().all(|t| t.is_ok())),
        }
    }
}
