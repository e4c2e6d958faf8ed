//! Keyword and operator synonym tables
//!
//! Every surface spelling the language accepts lives here. Adding a language
//! means adding entries to these tables; the scanner does not change.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::token::TokenKind;

/// A group of interchangeable spellings for one token kind
#[derive(Debug)]
pub struct SynonymGroup {
    pub values: &'static [&'static str],
    pub kind: TokenKind,
}

/// Keywords, matched case-insensitively
pub static KEYWORDS: Lazy<Vec<SynonymGroup>> = Lazy::new(|| {
    vec![
        SynonymGroup {
            values: &["if", "если", "коли", "ежели"],
            kind: TokenKind::If,
        },
        SynonymGroup {
            values: &["then", "то", "следовательно"],
            kind: TokenKind::Then,
        },
        SynonymGroup {
            values: &["and", "и"],
            kind: TokenKind::And,
        },
    ]
});

/// Comparison and assignment operators, symbolic and word forms
pub static OPERATORS: Lazy<Vec<SynonymGroup>> = Lazy::new(|| {
    vec![
        SynonymGroup {
            values: &["==", "equals", "equal", "равно", "равен", "является"],
            kind: TokenKind::Equal,
        },
        SynonymGroup {
            values: &["<", "less", "меньше"],
            kind: TokenKind::Less,
        },
        SynonymGroup {
            values: &[">", "more", "больше"],
            kind: TokenKind::More,
        },
        SynonymGroup {
            values: &["<=", "less_or_equal", "меньше_или_равно"],
            kind: TokenKind::LessOrEqual,
        },
        SynonymGroup {
            values: &[">=", "more_or_equal", "больше_или_равно"],
            kind: TokenKind::MoreOrEqual,
        },
        SynonymGroup {
            values: &["!=", "not_equal", "не_равно", "не_равен"],
            kind: TokenKind::NotEqual,
        },
        SynonymGroup {
            values: &["=", "set", "assign", "присвоить", "будет"],
            kind: TokenKind::Assign,
        },
    ]
});

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?$").expect("number pattern is a valid regex")
});

/// Whether `text` is a signed or unsigned decimal number
#[inline]
pub fn is_number(text: &str) -> bool {
    NUMBER_PATTERN.is_match(text)
}

fn lookup(table: &[SynonymGroup], text: &str) -> Option<TokenKind> {
    let lowered = text.to_lowercase();
    table
        .iter()
        .find(|group| group.values.iter().any(|v| *v == lowered))
        .map(|group| group.kind)
}

/// Operator kind for `text`, if it is a known operator spelling
pub fn lookup_operator(text: &str) -> Option<TokenKind> {
    lookup(&OPERATORS, text)
}

/// Keyword kind for `text`, if it is a known keyword spelling
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    lookup(&KEYWORDS, text)
}

/// Deduce the kind of a finished, unquoted token
pub fn deduce_token_kind(text: &str) -> TokenKind {
    if text.is_empty() {
        return TokenKind::EndOfInput;
    }
    if is_number(text) {
        return TokenKind::Number;
    }
    if let Some(kind) = lookup_operator(text) {
        return kind;
    }
    if let Some(kind) = lookup_keyword(text) {
        return kind;
    }
    TokenKind::Identifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduce_numbers() {
        assert_eq!(deduce_token_kind("30"), TokenKind::Number);
        assert_eq!(deduce_token_kind("-1.5"), TokenKind::Number);
        assert_eq!(deduce_token_kind("1."), TokenKind::Identifier);
        assert_eq!(deduce_token_kind("1.2.3"), TokenKind::Identifier);
    }

    #[test]
    fn test_deduce_keywords_case_insensitive() {
        assert_eq!(deduce_token_kind("IF"), TokenKind::If);
        assert_eq!(deduce_token_kind("Если"), TokenKind::If);
        assert_eq!(deduce_token_kind("ТО"), TokenKind::Then);
        assert_eq!(deduce_token_kind("и"), TokenKind::And);
    }

    #[test]
    fn test_deduce_operators() {
        assert_eq!(deduce_token_kind("=="), TokenKind::Equal);
        assert_eq!(deduce_token_kind("="), TokenKind::Assign);
        assert_eq!(deduce_token_kind("!="), TokenKind::NotEqual);
        assert_eq!(deduce_token_kind(">="), TokenKind::MoreOrEqual);
        assert_eq!(deduce_token_kind("Больше"), TokenKind::More);
        assert_eq!(deduce_token_kind("не_равно"), TokenKind::NotEqual);
        assert_eq!(deduce_token_kind("присвоить"), TokenKind::Assign);
    }

    #[test]
    fn test_exact_membership_only() {
        // prefixes of synonyms are plain identifiers
        assert_eq!(deduce_token_kind("equ"), TokenKind::Identifier);
        assert_eq!(deduce_token_kind("iff"), TokenKind::Identifier);
        assert_eq!(deduce_token_kind("age"), TokenKind::Identifier);
    }

    #[test]
    fn test_empty_is_end_of_input() {
        assert_eq!(deduce_token_kind(""), TokenKind::EndOfInput);
    }

    #[test]
    fn test_synonyms_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for group in KEYWORDS.iter().chain(OPERATORS.iter()) {
            for value in group.values {
                assert!(seen.insert(*value), "duplicate synonym: {}", value);
            }
        }
    }
}
