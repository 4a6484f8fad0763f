use crate::{
    error::{ParseError, Result},
    interpreter::{calculator::Calculator, token::Token},
};

/// Returns `true` for the operators that may prefix an expression.
#[must_use]
pub fn is_unary(symbol: &str) -> bool {
    matches!(symbol, "+" | "-")
}

impl Calculator {
    /// Collapses the tokens of one tokenization pass into a single token.
    ///
    /// A leading `+` is dropped and a leading `-` is folded into the operand
    /// after it; a negated group is evaluated and its result negated. Any
    /// other leading operator, or a lone operator, is rejected.
    ///
    /// # Parameters
    /// - `tokens`: The tokens of one pass, at group nesting `depth`.
    ///
    /// # Returns
    /// - `None` if `tokens` is empty.
    /// - The remaining token if exactly one is left.
    /// - A `Group` of the remaining tokens otherwise.
    pub(crate) fn normalize(&self, mut tokens: Vec<Token>, depth: usize) -> Result<Option<Token>> {
        if let Some(symbol) = tokens.first().and_then(Token::as_operator) {
            if tokens.len() < 2 || !is_unary(symbol) {
                return Err(ParseError::IllegalLeadingOperator { operator: symbol.to_string() }.into());
            }

            let negate = symbol == "-";
            tokens.remove(0);
            if negate {
                tokens[0] = self.negate(&tokens[0], depth)?;
            }
        }

        Ok(if tokens.len() > 1 {
               Some(Token::Group(tokens))
           } else {
               tokens.pop()
           })
    }

    fn negate(&self, token: &Token, depth: usize) -> Result<Token> {
        match token {
            Token::Operand(value) => Ok(Token::Operand(-value)),
            Token::Group(_) => Ok(Token::Operand(-self.evaluate_token(token, depth + 1)?)),
            Token::Operator(symbol) => {
                Err(ParseError::IllegalLeadingOperator { operator: symbol.clone() }.into())
            },
        }
    }
}
