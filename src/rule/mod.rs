//! Derivation rule parsing, storage and evaluation
//!
//! This module turns rule strings like "if age > 30 then tier = senior" into
//! storable rules, and evaluates them against an `EvaluationContext`.

mod ast;
pub mod cache;
mod compile;
mod evaluator;
pub mod parser;
mod storable;
mod validate;


pub use ast::*;
pub use cache::*;
pub use compile::*;
pub use evaluator::*;
pub use parser::*;
pub use storable::*;
pub use validate::*;
