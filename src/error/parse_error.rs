#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation starts: variable
/// substitution, tokenization and normalization.
///
/// Offsets are byte offsets into the expression after variable substitution.
pub enum ParseError {
    /// A `$name` reference has no value in the supplied variables.
    UndefinedVariable {
        /// The name of the variable, without the leading `$`.
        name: String,
    },
    /// A `$name` reference is bound to `NaN` or an infinity.
    NonFiniteVariable {
        /// The name of the variable, without the leading `$`.
        name: String,
    },
    /// A character that no recognizer accepts, or a stray `)`.
    IllegalExpression {
        /// Offset of the offending character.
        index: usize,
    },
    /// The expression starts with an operator that cannot be applied as a
    /// unary prefix.
    IllegalLeadingOperator {
        /// The operator symbol.
        operator: String,
    },
    /// A run of digits, `.` and `e` that does not form a number.
    InvalidNumber {
        /// The rejected text.
        literal: String,
        /// Offset of the first character of the literal.
        index:   usize,
    },
    /// A `(` without a matching `)`.
    UnmatchedParenthesis {
        /// Offset of the opening parenthesis.
        index: usize,
    },
    /// A `()` pair with nothing evaluable between the parentheses.
    EmptyGroup {
        /// Offset of the opening parenthesis.
        index: usize,
    },
    /// A registered token parser claimed a character but consumed no input.
    StalledTokenParser {
        /// Offset at which the parser was invoked.
        index: usize,
    },
    /// Parentheses are nested deeper than the calculator allows.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Variable '{name}' is not defined."),
            Self::NonFiniteVariable { name } => {
                write!(f, "Variable '{name}' is not a finite number.")
            },
            Self::IllegalExpression { index } => {
                write!(f, "Error at offset {index}: Illegal expression.")
            },
            Self::IllegalLeadingOperator { operator } => write!(f,
                                                                "Illegal expression: '{operator}' cannot start an expression."),
            Self::InvalidNumber { literal, index } => {
                write!(f, "Error at offset {index}: Invalid number: {literal}.")
            },
            Self::UnmatchedParenthesis { index } => write!(f,
                                                           "Error at offset {index}: Expected closing parenthesis ')' but none found."),
            Self::EmptyGroup { index } => {
                write!(f, "Error at offset {index}: Parentheses enclose an empty expression.")
            },
            Self::StalledTokenParser { index } => write!(f,
                                                         "Error at offset {index}: Token parser matched but consumed no input."),
            Self::NestingTooDeep { limit } => {
                write!(f, "Parentheses are nested deeper than the limit of {limit}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
