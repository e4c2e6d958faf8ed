//! Decision model description

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::config::Schema;
use crate::error::{Result, RuleError};

/// Type of a parameter or attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Choice { values: Vec<String> },
}

/// Named parameter or attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    #[serde(flatten)]
    pub kind: ValueKind,
}

impl Declaration {
    pub fn number(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ValueKind::Number,
        }
    }

    pub fn choice(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: ValueKind::Choice {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        }
    }
}

/// Question bound to the parameter its answer sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub param: String,
    #[serde(flatten)]
    pub kind: ValueKind,
}

/// Questionnaire model as the operator describes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub attributes: Vec<Declaration>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub derivation_rules: Vec<String>,
}

impl ModelConfig {
    /// Deserialize and validate a model from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let model: ModelConfig =
            serde_json::from_str(json).map_err(|e| RuleError::Config(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation of the model
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RuleError::Config("model name is empty".to_string()));
        }
        if self.attributes.is_empty() {
            return Err(RuleError::Config(
                "model must declare at least one attribute".to_string(),
            ));
        }

        let mut names = AHashSet::new();
        for attr in &self.attributes {
            validate_declaration(&attr.name, &attr.kind)?;
            if !names.insert(attr.name.as_str()) {
                return Err(RuleError::Config(format!(
                    "duplicate attribute '{}'",
                    attr.name
                )));
            }
        }

        let mut params = AHashSet::new();
        for question in &self.questions {
            if question.text.trim().is_empty() {
                return Err(RuleError::Config(format!(
                    "question for '{}' has no text",
                    question.param
                )));
            }
            validate_declaration(&question.param, &question.kind)?;
            if !params.insert(question.param.as_str()) {
                return Err(RuleError::Config(format!(
                    "parameter '{}' is asked by more than one question",
                    question.param
                )));
            }
        }

        Ok(())
    }

    /// Parameter declarations, one per question, in question order
    pub fn parameters(&self) -> Vec<Declaration> {
        self.questions
            .iter()
            .map(|q| Declaration {
                name: q.param.clone(),
                kind: q.kind.clone(),
            })
            .collect()
    }

    pub fn schema(&self) -> Schema {
        Schema::new(self.parameters(), self.attributes.clone())
    }
}

fn validate_declaration(name: &str, kind: &ValueKind) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RuleError::Config("declaration has an empty name".to_string()));
    }
    if let ValueKind::Choice { values } = kind {
        if values.len() <= 1 {
            return Err(RuleError::Config(format!(
                "choice '{}' needs at least two values",
                name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "name": "cars",
        "attributes": [
            {"name": "tier", "type": "choice", "values": ["basic", "senior"]},
            {"name": "budget", "type": "number"}
        ],
        "questions": [
            {"text": "How old are you?", "param": "age", "type": "number"},
            {"text": "Family?", "param": "family", "type": "choice", "values": ["yes", "no"]}
        ],
        "derivation_rules": ["if age > 30 then tier = senior"]
    }"#;

    #[test]
    fn test_from_json() {
        let model = ModelConfig::from_json(MODEL).unwrap();
        assert_eq!(model.name, "cars");
        assert_eq!(model.attributes[1], Declaration::number("budget"));
        assert_eq!(model.derivation_rules.len(), 1);
        assert_eq!(
            model.parameters(),
            vec![
                Declaration::number("age"),
                Declaration::choice("family", &["yes", "no"]),
            ]
        );
    }

    #[test]
    fn test_schema_from_model() {
        let schema = ModelConfig::from_json(MODEL).unwrap().schema();
        assert_eq!(schema.parameter("age"), Some(&ValueKind::Number));
        assert!(schema.attribute("tier").is_some());
        assert!(schema.parameter("tier").is_none());
    }

    #[test]
    fn test_rejects_single_value_choice() {
        let json = r#"{"name": "m", "attributes": [{"name": "a", "type": "choice", "values": ["x"]}]}"#;
        assert!(matches!(ModelConfig::from_json(json), Err(RuleError::Config(_))));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let json = r#"{"name": "m", "attributes": [{"name": "a", "type": "date"}]}"#;
        assert!(ModelConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_empty_attributes() {
        let json = r#"{"name": "m", "attributes": []}"#;
        assert!(ModelConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_duplicate_parameter() {
        let json = r#"{"name": "m",
            "attributes": [{"name": "a", "type": "number"}],
            "questions": [
                {"text": "q1", "param": "p", "type": "number"},
                {"text": "q2", "param": "p", "type": "number"}
            ]}"#;
        assert!(ModelConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rule_must_be_string() {
        let json = r#"{"name": "m", "attributes": [{"name": "a", "type": "number"}], "derivation_rules": [1]}"#;
        assert!(ModelConfig::from_json(json).is_err());
    }
}
