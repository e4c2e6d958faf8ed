//! Rule sets - batch compilation and ordered evaluation passes
//!
//! A model's derivation rules are compiled once when the model is loaded into
//! a session, bound once per session, and run once per answered question.

use crate::config::ModelConfig;
use crate::context::EvaluationContext;
use crate::error::{Result, RuleError};
use crate::rule::{get_or_compile, parse, to_storable, validate_against, EvaluableRule, StorableRule};

/// A rule that failed to compile
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRule {
    /// Position of the rule in the declared list
    pub index: usize,
    pub source: String,
    pub error: RuleError,
}

/// Compiled rules of a model, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<StorableRule>,
    /// Declared index of each compiled rule
    indices: Vec<usize>,
}

impl RuleSet {
    /// Compile every source independently
    ///
    /// A rule that fails is reported through `on_error` and dropped; the
    /// remaining rules still compile.
    pub fn compile<S, F>(sources: &[S], mut on_error: F) -> Self
    where
        S: AsRef<str>,
        F: FnMut(&RejectedRule),
    {
        let mut set = Self::default();
        for (index, source) in sources.iter().enumerate() {
            match get_or_compile(source.as_ref()) {
                Ok(rule) => set.push(index, rule),
                Err(error) => set.reject(index, source.as_ref(), error, &mut on_error),
            }
        }
        set
    }

    /// Compile a model's rules, also checking them against its declarations
    pub fn compile_for_model<F>(model: &ModelConfig, mut on_error: F) -> Self
    where
        F: FnMut(&RejectedRule),
    {
        let schema = model.schema();
        let mut set = Self::default();
        for (index, source) in model.derivation_rules.iter().enumerate() {
            let compiled = parse(source).and_then(|ast| {
                validate_against(&ast, &schema)?;
                Ok(to_storable(&ast))
            });
            match compiled {
                Ok(rule) => set.push(index, rule),
                Err(error) => set.reject(index, source, error, &mut on_error),
            }
        }
        set
    }

    fn push(&mut self, index: usize, rule: StorableRule) {
        self.rules.push(rule);
        self.indices.push(index);
    }

    fn reject<F>(&mut self, index: usize, source: &str, error: RuleError, on_error: &mut F)
    where
        F: FnMut(&RejectedRule),
    {
        log::warn!("dropping derivation rule #{} '{}': {}", index, source, error);
        on_error(&RejectedRule {
            index,
            source: source.to_string(),
            error,
        });
    }

    /// Storable rules, ready to persist
    pub fn rules(&self) -> &[StorableRule] {
        &self.rules
    }

    /// Declared index of each compiled rule
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Bind the compiled rules for evaluation
    pub fn bind(&self) -> Result<BoundRules> {
        BoundRules::bind(&self.rules)
    }
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Positions (within the bound list) of the rules that fired, in order
    pub fired: Vec<usize>,
    /// Positions of rules skipped because of an evaluation error
    pub failed: Vec<usize>,
}

/// Evaluable rules in the fixed order they run in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundRules {
    rules: Vec<EvaluableRule>,
}

impl BoundRules {
    /// Reconstruct evaluable rules from storage; any invalid entry fails the bind
    pub fn bind(storables: &[StorableRule]) -> Result<Self> {
        let rules = storables
            .iter()
            .map(EvaluableRule::bind)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule once, in order
    ///
    /// When several rules assign the same attribute, the last one that fires
    /// wins. A rule that fails to evaluate is logged and skipped.
    pub fn run(&self, ctx: &mut EvaluationContext) -> RunReport {
        let mut report = RunReport::default();
        for (i, rule) in self.rules.iter().enumerate() {
            match rule.run(ctx) {
                Ok(true) => report.fired.push(i),
                Ok(false) => {}
                Err(err) => {
                    log::error!("derivation rule #{} failed: {}", i, err);
                    report.failed.push(i);
                }
            }
        }
        report
    }
}
