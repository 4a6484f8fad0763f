#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a token structure.
pub enum RuntimeError {
    /// An operator symbol with no entry in the operator registry.
    UnknownOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// An operator, or an empty group, with nothing to its right.
    MissingOperand {
        /// The operator that needed a right operand, if there was one.
        after: Option<String>,
    },
    /// An operator appeared where an operand was required.
    ExpectedOperand {
        /// The token that was found instead.
        found: String,
    },
    /// Two operands appeared without an operator between them.
    ExpectedOperator {
        /// The token that was found instead.
        found: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator rejected its operands.
    ///
    /// Intended for caller-registered operators that enforce their own
    /// domain, such as a root that refuses negative radicands.
    InvalidOperands {
        /// The operator symbol.
        symbol:  String,
        /// Why the operands were rejected.
        details: String,
    },
    /// Groups are nested deeper than the calculator allows.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { symbol } => {
                write!(f, "The '{symbol}' operator was not found.")
            },
            Self::MissingOperand { after: Some(symbol) } => {
                write!(f, "Expected an operand after '{symbol}'.")
            },
            Self::MissingOperand { after: None } => write!(f, "Expected an operand."),
            Self::ExpectedOperand { found } => {
                write!(f, "Expected an operand but found '{found}'.")
            },
            Self::ExpectedOperator { found } => {
                write!(f, "Expected an operator but found '{found}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidOperands { symbol, details } => {
                write!(f, "Invalid operands for '{symbol}': {details}.")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Groups are nested deeper than the limit of {limit}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
