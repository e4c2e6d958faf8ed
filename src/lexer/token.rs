//! Tokens produced by the scanner

/// Token kinds recognized by the rule language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Signed or unsigned decimal number, e.g. `30`, `-1.5`
    Number,
    /// Bare word that is neither a keyword nor an operator word
    Identifier,
    /// Double-quoted literal, e.g. `"junior"`
    Text,
    If,
    Then,
    And,
    /// `==`, `равно`, ...
    Equal,
    /// `<`, `меньше`, ...
    Less,
    /// `>`, `больше`, ...
    More,
    /// `<=`
    LessOrEqual,
    /// `>=`
    MoreOrEqual,
    /// `!=`, `не_равно`, ...
    NotEqual,
    /// `=`, `присвоить`, ...
    Assign,
    EndOfInput,
}

impl TokenKind {
    /// Whether this kind can stand between an identifier and a literal in a condition
    #[inline]
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::Less
                | TokenKind::More
                | TokenKind::LessOrEqual
                | TokenKind::MoreOrEqual
                | TokenKind::NotEqual
        )
    }
}

/// A single lexical token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw token text; for `Text` tokens the quotes are stripped
    pub text: String,
    /// Character offset of the first character of the token
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
