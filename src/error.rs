//! Error types for the derivation rule engine

use thiserror::Error;

use crate::lexer::TokenKind;

/// Main error type for the derivation rule engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// Unknown character or illegal character-class transition
    #[error("Lexical error at {position}: {message}")]
    Lexical { message: String, position: usize },

    /// Token sequence does not match the rule grammar
    #[error("Syntax error at {position}: expected {expected}, found {found:?} '{text}'")]
    Syntax {
        expected: String,
        found: TokenKind,
        text: String,
        position: usize,
    },

    /// Rule is grammatical but semantically invalid
    #[error("Invalid rule: {0}")]
    Validation(String),

    /// Storable form cannot be turned back into a rule
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Structurally invalid rule reached the evaluator
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Invalid model: {0}")]
    Config(String),

    #[error("Invalid answer: {0}")]
    Answer(String),
}

impl RuleError {
    /// Error kinds that reject a rule while it is being compiled
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            RuleError::Lexical { .. } | RuleError::Syntax { .. } | RuleError::Validation(_)
        )
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        RuleError::Serialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<RuleError> for pyo3::PyErr {
    fn from(err: RuleError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            RuleError::Evaluation(_) => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the derivation rule engine
pub type Result<T> = std::result::Result<T, RuleError>;
