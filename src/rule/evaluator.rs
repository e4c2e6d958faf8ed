//! Rule evaluator

use crate::context::EvaluationContext;
use crate::error::{Result, RuleError};
use crate::rule::ast::{Comparison, ComparisonOp, Literal, RuleAst};

/// Evaluate a rule and perform its assignment if the condition holds
///
/// Returns whether the rule fired. An unanswered or unknown identifier makes
/// the condition false; that is not an error. Errors are reserved for
/// structurally invalid rules.
pub fn evaluate(rule: &RuleAst, ctx: &mut EvaluationContext) -> Result<bool> {
    if !check(rule, ctx)? {
        return Ok(false);
    }

    let target = &rule.assignment.target;
    if !ctx.assign_attribute(target, rule.assignment.value.clone()) {
        log::warn!("rule target '{}' is not a declared attribute, skipped", target);
        return Ok(false);
    }
    Ok(true)
}

/// Evaluate only the condition of a rule
pub fn check(rule: &RuleAst, ctx: &EvaluationContext) -> Result<bool> {
    if rule.condition.is_empty() {
        return Err(RuleError::Evaluation("rule has no condition".to_string()));
    }

    for cmp in &rule.condition {
        if !check_single(cmp, ctx)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn check_single(cmp: &Comparison, ctx: &EvaluationContext) -> Result<bool> {
    let left = match ctx.resolve(&cmp.left) {
        Some(value) => value,
        None => return Ok(false),
    };

    match (left, &cmp.right, cmp.op) {
        // Numeric comparisons
        (Literal::Number(l), Literal::Number(r), op) => Ok(compare_numbers(*l, *r, op)),

        // Text supports equality only
        (Literal::Text(l), Literal::Text(r), ComparisonOp::Eq) => Ok(l == r),
        (Literal::Text(l), Literal::Text(r), ComparisonOp::Ne) => Ok(l != r),
        (_, Literal::Text(_), op) if op.is_ordering() => Err(RuleError::Evaluation(format!(
            "ordering comparison '{}' on text value {}",
            op.symbol(),
            cmp.right
        ))),

        // Mixed kinds are never equal
        (_, _, ComparisonOp::Ne) => Ok(true),
        (Literal::Text(l), Literal::Number(_), op) if op.is_ordering() => {
            log::debug!(
                "'{}' holds text {:?}, ordering comparison '{}' is false",
                cmp.left,
                l,
                op.symbol()
            );
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[inline]
fn compare_numbers(l: f64, r: f64, op: ComparisonOp) -> bool {
    match op {
        ComparisonOp::Eq => l == r,
        ComparisonOp::Lt => l < r,
        ComparisonOp::Gt => l > r,
        ComparisonOp::Ge => l >= r,
        ComparisonOp::Le => l <= r,
        ComparisonOp::Ne => l != r,
    }
}
