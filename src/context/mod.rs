//! Evaluation context - parameter answers and derived attribute values

use ahash::AHashMap;

use crate::config::{ModelConfig, Schema, ValueKind};
use crate::error::{Result, RuleError};
use crate::rule::Literal;

/// Identifier-keyed values; `None` means unanswered or not yet derived
pub type Bindings = AHashMap<String, Option<Literal>>;

/// Values one session works with during a question-answer exchange
///
/// Rules read `parameters` (falling back to `attributes`) and write only to
/// `attributes`. Evaluation never adds or removes keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
    pub parameters: Bindings,
    pub attributes: Bindings,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with every parameter and attribute of a model declared and unset
    pub fn from_model(model: &ModelConfig) -> Self {
        let mut ctx = Self::new();
        for param in model.parameters() {
            ctx.declare_parameter(&param.name);
        }
        for attr in &model.attributes {
            ctx.declare_attribute(&attr.name);
        }
        ctx
    }

    pub fn declare_parameter(&mut self, name: &str) {
        self.parameters.entry(name.to_string()).or_insert(None);
    }

    pub fn declare_attribute(&mut self, name: &str) {
        self.attributes.entry(name.to_string()).or_insert(None);
    }

    /// Current value of a parameter, if answered
    #[inline]
    pub fn parameter(&self, name: &str) -> Option<&Literal> {
        self.parameters.get(name).and_then(Option::as_ref)
    }

    /// Current value of an attribute, if derived
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&Literal> {
        self.attributes.get(name).and_then(Option::as_ref)
    }

    /// Resolve an identifier for a condition: parameters first, then attributes
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<&Literal> {
        match self.parameters.get(name) {
            Some(value) => value.as_ref(),
            None => self.attribute(name),
        }
    }

    /// Set a parameter value without validation, declaring it if needed
    pub fn set_parameter(&mut self, name: &str, value: impl Into<Literal>) {
        self.parameters.insert(name.to_string(), Some(value.into()));
    }

    /// Overwrite an existing attribute; returns false if the key is not declared
    pub fn assign_attribute(&mut self, name: &str, value: Literal) -> bool {
        match self.attributes.get_mut(name) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// Record an answer after checking it against the parameter's declaration
    pub fn answer(&mut self, schema: &Schema, name: &str, value: Literal) -> Result<()> {
        let kind = schema
            .parameter(name)
            .ok_or_else(|| RuleError::Answer(format!("unknown parameter '{}'", name)))?;

        let valid = match (kind, &value) {
            (ValueKind::Number, Literal::Number(n)) => n.is_finite(),
            (ValueKind::Choice { values }, Literal::Text(text)) => values.contains(text),
            _ => false,
        };
        if !valid {
            return Err(RuleError::Answer(format!(
                "{} is not a valid answer for '{}'",
                value, name
            )));
        }

        self.parameters.insert(name.to_string(), Some(value));
        Ok(())
    }

    /// Forget every derived attribute value, keeping the keys
    pub fn reset_attributes(&mut self) {
        for value in self.attributes.values_mut() {
            *value = None;
        }
    }
}
