use logos::Logos;

/// The built-in character classes of the expression grammar.
///
/// Operators are not listed here because the operator set is only known at
/// run time; anything that is not one of these classes is checked against
/// the operator registry by the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A run of whitespace.
    #[regex(r"\s+")]
    Whitespace,
    /// A run of digits, `.` and `e`, such as `3.14`, `.5` or `2e10`.
    ///
    /// The run is taken greedily and only validated as a number afterwards,
    /// so `1.2.3` is one (invalid) numeric run.
    #[regex(r"[0-9.e]+")]
    Numeric,
    /// `(`
    #[token("(")]
    Open,
    /// `)`
    #[token(")")]
    Close,
}

/// Classifies the start of `text`.
///
/// # Returns
/// - `Some((lexeme, len))`: `text` starts with `lexeme`, which spans `len`
///   bytes.
/// - `None`: `text` is empty or starts with a character outside every class.
///
/// # Example
/// ```
/// use calcite::interpreter::lexer::lexeme::{Lexeme, classify};
///
/// assert_eq!(classify("12.5 + 1"), Some((Lexeme::Numeric, 4)));
/// assert_eq!(classify("  3"), Some((Lexeme::Whitespace, 2)));
/// assert_eq!(classify("+ 3"), None);
/// ```
#[must_use]
pub fn classify(text: &str) -> Option<(Lexeme, usize)> {
    let mut lexer = Lexeme::lexer(text);
    match lexer.next()? {
        Ok(lexeme) => Some((lexeme, lexer.span().len())),
        Err(()) => None,
    }
}
