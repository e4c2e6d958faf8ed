//! Recursive-descent parser for derivation rules
//!
//! ```text
//! rule       := IF condition THEN assignment EOF
//! condition  := comparison (AND comparison)*
//! comparison := IDENTIFIER comparison_op literal
//! assignment := IDENTIFIER ASSIGN literal
//! literal    := NUMBER | IDENTIFIER | TEXT
//! ```

use smallvec::SmallVec;

use crate::error::{Result, RuleError};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::rule::ast::{Assignment, Comparison, ComparisonOp, Literal, RuleAst};

/// Parse rule source text into an AST
pub fn parse(source: &str) -> Result<RuleAst> {
    Parser::new(Scanner::new(source))?.parse_rule()
}

/// Single-token-lookahead parser over a scanner
pub struct Parser {
    scanner: Scanner,
    current: Token,
}

impl Parser {
    /// Create a parser, reading the first token
    pub fn new(mut scanner: Scanner) -> Result<Self> {
        let current = scanner.next_token()?;
        Ok(Self { scanner, current })
    }

    /// Parse exactly one rule followed by end of input
    pub fn parse_rule(&mut self) -> Result<RuleAst> {
        self.expect(TokenKind::If, "'if'")?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Then, "'then' or 'and'")?;
        let assignment = self.parse_assignment()?;
        self.expect(TokenKind::EndOfInput, "end of rule")?;

        Ok(RuleAst {
            condition,
            assignment,
        })
    }

    fn parse_condition(&mut self) -> Result<SmallVec<[Comparison; 4]>> {
        let mut condition = SmallVec::new();
        condition.push(self.parse_comparison()?);
        while self.current.kind == TokenKind::And {
            self.advance()?;
            condition.push(self.parse_comparison()?);
        }
        Ok(condition)
    }

    fn parse_comparison(&mut self) -> Result<Comparison> {
        let left = self.expect(TokenKind::Identifier, "identifier")?.text;

        let op = match self.current.kind {
            TokenKind::Equal => ComparisonOp::Eq,
            TokenKind::Less => ComparisonOp::Lt,
            TokenKind::More => ComparisonOp::Gt,
            TokenKind::LessOrEqual => ComparisonOp::Le,
            TokenKind::MoreOrEqual => ComparisonOp::Ge,
            TokenKind::NotEqual => ComparisonOp::Ne,
            _ => return Err(self.unexpected("comparison operator")),
        };
        self.advance()?;

        let right = self.parse_literal()?;
        Ok(Comparison { left, op, right })
    }

    fn parse_assignment(&mut self) -> Result<Assignment> {
        let target = self.expect(TokenKind::Identifier, "identifier")?.text;
        self.expect(TokenKind::Assign, "'='")?;
        let value = self.parse_literal()?;
        Ok(Assignment { target, value })
    }

    fn parse_literal(&mut self) -> Result<Literal> {
        let literal = match self.current.kind {
            TokenKind::Number => {
                // overlong digit runs parse to infinity, which storage cannot hold
                match self.current.text.parse::<f64>() {
                    Ok(n) if n.is_finite() => Literal::Number(n),
                    _ => {
                        return Err(RuleError::Lexical {
                            message: format!("malformed or out-of-range number '{}'", self.current.text),
                            position: self.current.position,
                        })
                    }
                }
            }
            TokenKind::Identifier | TokenKind::Text => Literal::Text(self.current.text.clone()),
            _ => return Err(self.unexpected("number or value")),
        };
        self.advance()?;
        Ok(literal)
    }

    /// Consume the current token if it has `kind`
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.current.kind != kind {
            return Err(self.unexpected(expected));
        }
        self.advance()
    }

    /// Move to the next token, returning the previous one
    fn advance(&mut self) -> Result<Token> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &str) -> RuleError {
        RuleError::Syntax {
            expected: expected.to_string(),
            found: self.current.kind,
            text: self.current.text.clone(),
            position: self.current.position,
        }
    }
}
