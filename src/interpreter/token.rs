/// A classified unit of expression text.
///
/// Tokens are produced by the lexer (or by a registered token parser) and
/// consumed by the evaluator. A `Group` holds the already tokenized and
/// normalized contents of one pair of parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A number, such as `3`, `.5` or `2e10`.
    Operand(f64),
    /// An operator symbol, such as `+` or a registered `max`.
    Operator(String),
    /// A parenthesized sub-expression awaiting evaluation.
    Group(Vec<Token>),
}

impl Token {
    /// Returns the operator symbol if this token is an operator.
    #[must_use]
    pub fn as_operator(&self) -> Option<&str> {
        match self {
            Self::Operator(symbol) => Some(symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::Group(tokens) => {
                write!(f, "(")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{token}")?;
                }
                write!(f, ")")
            },
        }
    }
}
