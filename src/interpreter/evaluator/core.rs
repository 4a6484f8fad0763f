use std::iter::Peekable;

use crate::{
    error::RuntimeError,
    interpreter::{calculator::Calculator, registry::operator::OperatorEntry, token::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions, and every operator computation, return either a
/// value of type `T` or a `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Calculator {
    /// Evaluates the normalized token of a whole expression.
    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn evaluate_root(&self, token: &Token) -> EvalResult<f64> {
        let value = self.evaluate_token(token, 0)?;
        tracing::trace!(value, "evaluated expression");
        Ok(value)
    }

    /// Evaluates a single token found `depth` groups deep.
    ///
    /// Operands evaluate to themselves and groups are reduced recursively. An
    /// operator on its own has no value.
    pub(crate) fn evaluate_token(&self, token: &Token, depth: usize) -> EvalResult<f64> {
        match token {
            Token::Operand(value) => Ok(*value),
            Token::Group(tokens) => self.evaluate_sequence(tokens, depth),
            Token::Operator(symbol) => Err(RuntimeError::ExpectedOperand { found: symbol.clone() }),
        }
    }

    /// Reduces the contents of one group to a number.
    ///
    /// # Errors
    /// - `NestingTooDeep` if `depth` exceeds the calculator's limit.
    /// - `MissingOperand` if the sequence is empty.
    /// - Anything raised by precedence climbing or by an operator.
    pub(crate) fn evaluate_sequence(&self, tokens: &[Token], depth: usize) -> EvalResult<f64> {
        if depth > self.max_depth {
            return Err(RuntimeError::NestingTooDeep { limit: self.max_depth });
        }

        let mut tokens = tokens.iter().peekable();
        let left = self.operand(&mut tokens, None, depth)?;
        self.climb(&mut tokens, left, depth)
    }

    /// Consumes the next token as an operand and evaluates it.
    ///
    /// # Parameters
    /// - `after`: The operator the operand belongs to, for error reporting.
    /// - `depth`: The nesting depth of the sequence being read.
    pub(crate) fn operand<'t, I>(&self,
                                 tokens: &mut Peekable<I>,
                                 after: Option<&str>,
                                 depth: usize)
                                 -> EvalResult<f64>
        where I: Iterator<Item = &'t Token>
    {
        match tokens.next() {
            Some(Token::Operator(symbol)) => {
                Err(RuntimeError::ExpectedOperand { found: symbol.clone() })
            },
            Some(token) => self.evaluate_token(token, depth + 1),
            None => Err(RuntimeError::MissingOperand { after: after.map(str::to_string) }),
        }
    }

    /// Looks at the next token, which must be a registered operator, without
    /// consuming it.
    ///
    /// # Returns
    /// `None` at the end of the sequence, otherwise the operator symbol and
    /// its registry entry.
    pub(crate) fn peek_operator<'t, I>(&self,
                                       tokens: &mut Peekable<I>)
                                       -> EvalResult<Option<(&'t str, &OperatorEntry)>>
        where I: Iterator<Item = &'t Token>
    {
        match tokens.peek().copied() {
            None => Ok(None),
            Some(Token::Operator(symbol)) => {
                let entry =
                    self.operators
                        .get(symbol)
                        .ok_or_else(|| RuntimeError::UnknownOperator { symbol: symbol.clone() })?;
                Ok(Some((symbol.as_str(), entry)))
            },
            Some(token) => Err(RuntimeError::ExpectedOperator { found: token.to_string() }),
        }
    }
}
