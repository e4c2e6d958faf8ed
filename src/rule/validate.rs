//! Semantic checks on parsed rules

use crate::config::{Schema, ValueKind};
use crate::error::{Result, RuleError};
use crate::rule::ast::{Literal, RuleAst};

/// Reject rules the evaluator cannot give a meaning to
///
/// Ordering operators (`<`, `>`, `<=`, `>=`) are only defined for numbers.
pub fn validate(rule: &RuleAst) -> Result<()> {
    if rule.condition.is_empty() {
        return Err(RuleError::Validation("rule has no condition".to_string()));
    }

    for cmp in &rule.condition {
        if cmp.op.is_ordering() && matches!(cmp.right, Literal::Text(_)) {
            return Err(RuleError::Validation(format!(
                "ordering comparison '{} {} {}' on a text value",
                cmp.left,
                cmp.op.symbol(),
                cmp.right
            )));
        }
    }

    Ok(())
}

/// Check a rule against the declared parameters and attributes of a model
pub fn validate_against(rule: &RuleAst, schema: &Schema) -> Result<()> {
    validate(rule)?;

    for cmp in &rule.condition {
        let kind = schema.lookup(&cmp.left).ok_or_else(|| {
            RuleError::Validation(format!("unknown parameter or attribute '{}'", cmp.left))
        })?;
        check_literal(&cmp.left, kind, &cmp.right)?;
    }

    let target = &rule.assignment.target;
    let kind = schema
        .attribute(target)
        .ok_or_else(|| RuleError::Validation(format!("'{}' is not a declared attribute", target)))?;
    check_literal(target, kind, &rule.assignment.value)
}

fn check_literal(name: &str, kind: &ValueKind, literal: &Literal) -> Result<()> {
    match (kind, literal) {
        (ValueKind::Number, Literal::Number(_)) => Ok(()),
        (ValueKind::Choice { values }, Literal::Text(text)) if values.contains(text) => Ok(()),
        (ValueKind::Choice { values }, _) => Err(RuleError::Validation(format!(
            "{} is not one of the choices of '{}': {:?}",
            literal, name, values
        ))),
        (ValueKind::Number, Literal::Text(_)) => Err(RuleError::Validation(format!(
            "'{}' is numeric but compared with {}",
            name, literal
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Declaration;
    use crate::rule::parser::parse;

    fn schema() -> Schema {
        Schema::new(
            vec![
                Declaration::number("age"),
                Declaration::choice("segment", &["junior", "middle"]),
            ],
            vec![Declaration::choice("tier", &["basic", "senior"]), Declaration::number("score")],
        )
    }

    #[test]
    fn test_text_ordering_rejected() {
        let rule = parse("if tier > \"senior\" then x = 1").unwrap();
        assert!(matches!(validate(&rule), Err(RuleError::Validation(_))));

        let rule = parse("if tier <= senior then x = 1").unwrap();
        assert!(validate(&rule).is_err());
    }

    #[test]
    fn test_text_equality_allowed() {
        let rule = parse("if tier == senior and tier != basic then x = 1").unwrap();
        assert!(validate(&rule).is_ok());
    }

    #[test]
    fn test_schema_accepts_well_typed_rule() {
        let rule = parse("if age > 30 and segment != junior then tier = senior").unwrap();
        assert!(validate_against(&rule, &schema()).is_ok());

        // derived attributes can feed later rules
        let rule = parse("if tier == senior then score = 10").unwrap();
        assert!(validate_against(&rule, &schema()).is_ok());
    }

    #[test]
    fn test_schema_rejects_unknown_identifier() {
        let rule = parse("if height > 30 then tier = senior").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());
    }

    #[test]
    fn test_schema_rejects_parameter_target() {
        let rule = parse("if age > 30 then segment = junior").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());
    }

    #[test]
    fn test_schema_rejects_unknown_choice() {
        let rule = parse("if segment == senior then tier = basic").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());

        let rule = parse("if age > 1 then tier = gold").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());
    }

    #[test]
    fn test_schema_rejects_kind_mismatch() {
        let rule = parse("if age == old then tier = basic").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());

        let rule = parse("if segment == 3 then tier = basic").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());

        let rule = parse("if age > 3 then score = high").unwrap();
        assert!(validate_against(&rule, &schema()).is_err());
    }
}
