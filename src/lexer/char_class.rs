//! Character classes and the scanner's transition table

/// Class of a single input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Latin or Cyrillic letter, or `_`
    Alpha,
    /// Decimal digit or `.`
    Digit,
    /// One of `= > < !`
    OperatorChar,
    /// `-`
    UnarySign,
    Space,
    /// `"`
    Quote,
    /// Input exhausted
    End,
    /// Character outside every other class
    Other,
}

impl CharClass {
    pub const COUNT: usize = 8;

    /// Classify the character under the cursor (`None` = end of input)
    #[inline]
    pub fn of(ch: Option<char>) -> Self {
        match ch {
            None => CharClass::End,
            Some(c) if is_alpha(c) => CharClass::Alpha,
            Some(c) if c.is_ascii_digit() || c == '.' => CharClass::Digit,
            Some('=' | '>' | '<' | '!') => CharClass::OperatorChar,
            Some('-') => CharClass::UnarySign,
            Some('"') => CharClass::Quote,
            Some(c) if c.is_whitespace() => CharClass::Space,
            Some(_) => CharClass::Other,
        }
    }
}

#[inline]
fn is_alpha(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё' | '_')
}

/// Scanner automaton state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Alpha,
    Number,
    Operator,
    /// Inside a quoted literal
    Quoted,
    /// Closing quote consumed
    Closed,
    Error,
    End,
}

use State as S;

/// `TRANSITIONS[state][class]`, columns in `CharClass` declaration order:
/// Alpha, Digit, OperatorChar, UnarySign, Space, Quote, End, Other
const TRANSITIONS: [[State; CharClass::COUNT]; 8] = [
    // Start
    [S::Alpha, S::Number, S::Operator, S::Number, S::Start, S::Quoted, S::End, S::Error],
    // Alpha
    [S::Alpha, S::Alpha, S::End, S::Error, S::End, S::Error, S::End, S::Error],
    // Number
    [S::Error, S::Number, S::End, S::Error, S::End, S::Error, S::End, S::Error],
    // Operator
    [S::End, S::End, S::Operator, S::End, S::End, S::End, S::End, S::Error],
    // Quoted
    [S::Quoted, S::Quoted, S::Quoted, S::Quoted, S::Quoted, S::Closed, S::Error, S::Quoted],
    // Closed
    [S::Error, S::Error, S::End, S::Error, S::End, S::Error, S::End, S::Error],
    // Error
    [S::Error; CharClass::COUNT],
    // End
    [S::Error; CharClass::COUNT],
];

/// Look up the next automaton state
#[inline]
pub fn next_state(state: State, class: CharClass) -> State {
    TRANSITIONS[state as usize][class as usize]
}
