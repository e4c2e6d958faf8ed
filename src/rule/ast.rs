//! Abstract Syntax Tree for derivation rules

use smallvec::SmallVec;
use std::fmt;

/// Constant value appearing in rule source or held in a binding
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    /// Choice value, written as a bare word or a quoted string
    Text(String),
}

impl Literal {
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            Literal::Number(_) => None,
        }
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equal (==)
    Eq,
    /// Less than (<)
    Lt,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,
    /// Not equal (!=)
    Ne,
}

impl ComparisonOp {
    /// Ordering operators are only defined for numbers
    #[inline]
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            ComparisonOp::Lt | ComparisonOp::Gt | ComparisonOp::Ge | ComparisonOp::Le
        )
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ne => "!=",
        }
    }
}

/// Single comparison like `age > 30`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: String,
    pub op: ComparisonOp,
    pub right: Literal,
}

/// Conjunction of comparisons; holds iff every comparison holds
pub type Condition = SmallVec<[Comparison; 4]>;

/// `target = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub value: Literal,
}

/// A complete `if ... then ...` rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleAst {
    pub condition: Condition,
    pub assignment: Assignment,
}

impl fmt::Display for RuleAst {
    /// Canonical English spelling of the rule
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ")?;
        for (i, cmp) in self.condition.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{} {} {}", cmp.left, cmp.op.symbol(), cmp.right)?;
        }
        write!(
            f,
            " then {} = {}",
            self.assignment.target, self.assignment.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_display_canonical_form() {
        let rule = RuleAst {
            condition: smallvec![
                Comparison {
                    left: "age".into(),
                    op: ComparisonOp::Ge,
                    right: Literal::Number(30.0),
                },
                Comparison {
                    left: "segment".into(),
                    op: ComparisonOp::Ne,
                    right: Literal::Text("junior".into()),
                },
            ],
            assignment: Assignment {
                target: "tier".into(),
                value: Literal::Text("senior".into()),
            },
        };
        assert_eq!(
            rule.to_string(),
            "if age >= 30 and segment != \"junior\" then tier = \"senior\""
        );
    }

    #[test]
    fn test_literal_accessors() {
        assert_eq!(Literal::from(2.5).as_number(), Some(2.5));
        assert_eq!(Literal::from("a").as_text(), Some("a"));
        assert_eq!(Literal::from("a").as_number(), None);
    }
}
