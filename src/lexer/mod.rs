//! Lexical analysis for derivation rules
//!
//! Turns rule text such as `if age>30 then tier = senior` (or its Cyrillic
//! spelling) into a stream of typed tokens.

mod char_class;
mod scanner;
pub mod synonyms;
mod token;

#[cfg(test)]
mod property_tests;

pub use char_class::{next_state, CharClass, State};
pub use scanner::*;
pub use token::*;
