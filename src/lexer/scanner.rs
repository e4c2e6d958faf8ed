//! Finite-state scanner for rule source text

use crate::error::{Result, RuleError};
use crate::lexer::char_class::{next_state, CharClass, State};
use crate::lexer::synonyms::{deduce_token_kind, is_number, lookup_operator};
use crate::lexer::token::{Token, TokenKind};

/// Scanner over a single rule's source text
///
/// Call [`Scanner::next_token`] until it yields `EndOfInput`; further calls keep
/// yielding `EndOfInput`. The first lexical error poisons the scanner and is
/// returned from every later call.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    cursor: usize,
    failed: Option<RuleError>,
    exhausted: bool,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            cursor: 0,
            failed: None,
            exhausted: false,
        }
    }

    /// Scan the next token
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        let mut state = State::Start;
        let mut text = String::new();
        let mut start = self.cursor;

        loop {
            let ch = self.chars.get(self.cursor).copied();
            let class = CharClass::of(ch);
            let next = next_state(state, class);

            match next {
                State::Error => {
                    let message = match (state, class, ch) {
                        (_, CharClass::Other, Some(c)) => format!("unknown character '{}'", c),
                        (State::Quoted, CharClass::End, _) => {
                            format!("unterminated text literal \"{}", text)
                        }
                        (_, _, Some(c)) => format!("unexpected character '{}' after '{}'", c, text),
                        (_, _, None) => format!("unexpected end of input after '{}'", text),
                    };
                    return Err(self.fail(message, self.cursor));
                }
                State::End => {
                    // the terminator stays in the stream for the next call unless it is whitespace
                    if class == CharClass::Space {
                        self.cursor += 1;
                    }
                    return self.finish(state, text, start);
                }
                State::Start => {
                    self.cursor += 1;
                    start = self.cursor;
                }
                _ => {
                    if class != CharClass::Quote {
                        if let Some(c) = ch {
                            text.push(c);
                        }
                    }
                    self.cursor += 1;
                }
            }

            state = next;
        }
    }

    /// Classify a finished token by the state that accumulated it
    fn finish(&mut self, state: State, text: String, start: usize) -> Result<Token> {
        let kind = match state {
            State::Start => TokenKind::EndOfInput,
            State::Closed => TokenKind::Text,
            State::Number => {
                if !is_number(&text) {
                    return Err(self.fail(format!("malformed number '{}'", text), start));
                }
                TokenKind::Number
            }
            State::Operator => match lookup_operator(&text) {
                Some(kind) => kind,
                None => return Err(self.fail(format!("unknown operator '{}'", text), start)),
            },
            _ => deduce_token_kind(&text),
        };
        Ok(Token::new(kind, text, start))
    }

    fn fail(&mut self, message: String, position: usize) -> RuleError {
        let err = RuleError::Lexical { message, position };
        self.failed = Some(err.clone());
        err
    }
}

impl Iterator for Scanner {
    type Item = Result<Token>;

    /// Yields tokens up to and including `EndOfInput`, or up to the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        match &token {
            Ok(t) if !t.is_eof() => {}
            _ => self.exhausted = true,
        }
        Some(token)
    }
}

/// Scan a whole source string, including the trailing `EndOfInput` token
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).collect()
}
