//! Configuration module for decision model descriptions
//!
//! This module handles deserialization of a model (attributes, questions and
//! derivation rules) from JSON, and the schema derived from it.

mod model;
mod schema;

pub use model::*;
pub use schema::*;
