//! Closure-free storable form of compiled rules
//!
//! A [`StorableRule`] holds only strings, numbers and tag strings, so it can be
//! persisted in session state and turned back into a [`RuleAst`] without
//! scanning or parsing the source again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, RuleError};
use crate::rule::ast::{Assignment, Comparison, ComparisonOp, Literal, RuleAst};

const LITERAL_NUMBER: &str = "number";
const LITERAL_TEXT: &str = "text";

/// Tagged literal with primitive payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorableLiteral {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorableComparison {
    pub left: String,
    pub op: String,
    pub value: StorableLiteral,
}

/// Storable form of a compiled rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorableRule {
    pub conditions: Vec<StorableComparison>,
    pub target: String,
    pub value: StorableLiteral,
}

impl StorableRule {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Convert a rule AST to its storable form
pub fn to_storable(rule: &RuleAst) -> StorableRule {
    StorableRule {
        conditions: rule
            .condition
            .iter()
            .map(|cmp| StorableComparison {
                left: cmp.left.clone(),
                op: op_tag(cmp.op).to_string(),
                value: literal_to_storable(&cmp.right),
            })
            .collect(),
        target: rule.assignment.target.clone(),
        value: literal_to_storable(&rule.assignment.value),
    }
}

/// Reconstruct a rule AST from its storable form
pub fn from_storable(storable: &StorableRule) -> Result<RuleAst> {
    if storable.conditions.is_empty() {
        return Err(RuleError::Serialization(
            "stored rule has no conditions".to_string(),
        ));
    }

    let mut condition = SmallVec::with_capacity(storable.conditions.len());
    for cmp in &storable.conditions {
        condition.push(Comparison {
            left: identifier(&cmp.left)?,
            op: op_from_tag(&cmp.op)?,
            right: literal_from_storable(&cmp.value)?,
        });
    }

    Ok(RuleAst {
        condition,
        assignment: Assignment {
            target: identifier(&storable.target)?,
            value: literal_from_storable(&storable.value)?,
        },
    })
}

fn identifier(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(RuleError::Serialization("empty identifier".to_string()));
    }
    Ok(name.to_string())
}

fn op_tag(op: ComparisonOp) -> &'static str {
    match op {
        ComparisonOp::Eq => "eq",
        ComparisonOp::Lt => "lt",
        ComparisonOp::Gt => "gt",
        ComparisonOp::Ge => "ge",
        ComparisonOp::Le => "le",
        ComparisonOp::Ne => "ne",
    }
}

fn op_from_tag(tag: &str) -> Result<ComparisonOp> {
    match tag {
        "eq" => Ok(ComparisonOp::Eq),
        "lt" => Ok(ComparisonOp::Lt),
        "gt" => Ok(ComparisonOp::Gt),
        "ge" => Ok(ComparisonOp::Ge),
        "le" => Ok(ComparisonOp::Le),
        "ne" => Ok(ComparisonOp::Ne),
        _ => Err(RuleError::Serialization(format!(
            "unknown operator tag '{}'",
            tag
        ))),
    }
}

fn literal_to_storable(literal: &Literal) -> StorableLiteral {
    match literal {
        Literal::Number(n) => StorableLiteral {
            kind: LITERAL_NUMBER.to_string(),
            number: Some(*n),
            text: None,
        },
        Literal::Text(s) => StorableLiteral {
            kind: LITERAL_TEXT.to_string(),
            number: None,
            text: Some(s.clone()),
        },
    }
}

fn literal_from_storable(literal: &StorableLiteral) -> Result<Literal> {
    match (literal.kind.as_str(), literal.number, &literal.text) {
        (LITERAL_NUMBER, Some(n), None) if n.is_finite() => Ok(Literal::Number(n)),
        (LITERAL_TEXT, None, Some(s)) => Ok(Literal::Text(s.clone())),
        (LITERAL_NUMBER, _, _) | (LITERAL_TEXT, _, _) => Err(RuleError::Serialization(format!(
            "literal payload does not match tag '{}'",
            literal.kind
        ))),
        (tag, _, _) => Err(RuleError::Serialization(format!(
            "unknown literal tag '{}'",
            tag
        ))),
    }
}
