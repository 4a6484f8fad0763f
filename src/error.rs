/// Parsing errors.
///
/// Defines all error types that can occur while substituting variables,
/// tokenizing and normalizing an expression, before any operator runs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing tokens to a
/// number, such as unknown operators, missing operands or division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used by the substitution, tokenization and normalization
/// phases.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type returned by the public entry points.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
/// Any failure of a single `parse` call.
pub enum Error {
    /// The expression could not be turned into tokens.
    Parse(ParseError),
    /// The tokens could not be reduced to a number.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
