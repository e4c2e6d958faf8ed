//! Compile rule text to storable form, and bind storable rules for evaluation

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::rule::ast::RuleAst;
use crate::rule::evaluator::evaluate;
use crate::rule::parser::parse;
use crate::rule::storable::{from_storable, to_storable, StorableRule};
use crate::rule::validate::validate;

/// Scan, parse and validate rule text into its storable form
pub fn compile_rule(source: &str) -> Result<StorableRule> {
    let ast = parse(source)?;
    validate(&ast)?;
    Ok(to_storable(&ast))
}

/// Rule reconstructed from storage and ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluableRule {
    ast: RuleAst,
}

impl EvaluableRule {
    /// Rebuild an evaluable rule from its storable form
    pub fn bind(storable: &StorableRule) -> Result<Self> {
        let ast = from_storable(storable)?;
        validate(&ast)?;
        Ok(Self { ast })
    }

    #[inline]
    pub fn ast(&self) -> &RuleAst {
        &self.ast
    }

    /// Run the rule against a context; returns whether it fired
    #[inline]
    pub fn run(&self, ctx: &mut EvaluationContext) -> Result<bool> {
        evaluate(&self.ast, ctx)
    }
}

impl From<RuleAst> for EvaluableRule {
    fn from(ast: RuleAst) -> Self {
        Self { ast }
    }
}
