//! Derivation Rules Core - bilingual rule compiler and evaluator
//!
//! Questionnaire models derive attribute values from answered parameters with
//! small rules such as `if age > 30 then tier = senior`, or in Russian
//! `если возраст больше 30 то группа = старший`. This crate scans and parses
//! those rules, stores them in a closure-free form, and evaluates them against
//! a session's parameter and attribute bindings.
//!
//! ```
//! use derivation_rules_core::{bind, compile, run, EvaluationContext, Literal};
//!
//! let stored = compile("if age>30 then tier=senior", |err| eprintln!("{}", err)).unwrap();
//! let rule = bind(&stored).unwrap();
//!
//! let mut ctx = EvaluationContext::new();
//! ctx.declare_attribute("tier");
//! ctx.set_parameter("age", 40.0);
//! assert!(run(&rule, &mut ctx).unwrap());
//! assert_eq!(ctx.attribute("tier"), Some(&Literal::Text("senior".into())));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod lexer;
pub mod rule;
pub mod ruleset;

#[cfg(feature = "python")]
mod python;

pub use crate::config::{Declaration, ModelConfig, Schema, ValueKind};
pub use crate::context::{Bindings, EvaluationContext};
pub use crate::error::{Result, RuleError};
pub use crate::rule::{EvaluableRule, Literal, RuleAst, StorableRule};
pub use crate::ruleset::{BoundRules, RejectedRule, RuleSet, RunReport};

/// Compile rule text into its storable form
///
/// Lexical, syntax and validation failures are passed to `on_error` and yield
/// `None`, so a caller loading many rules can drop the bad one and go on.
pub fn compile<F>(source: &str, mut on_error: F) -> Option<StorableRule>
where
    F: FnMut(&RuleError),
{
    match rule::get_or_compile(source) {
        Ok(rule) => Some(rule),
        Err(err) => {
            on_error(&err);
            None
        }
    }
}

/// Turn a storable rule back into an evaluable one
pub fn bind(storable: &StorableRule) -> Result<EvaluableRule> {
    EvaluableRule::bind(storable)
}

/// Run one rule against a context; returns whether it fired
pub fn run(rule: &EvaluableRule, ctx: &mut EvaluationContext) -> Result<bool> {
    rule.run(ctx)
}
