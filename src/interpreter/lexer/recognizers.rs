use crate::{
    error::{ParseError, ParseResult, Result},
    interpreter::{
        calculator::Calculator, lexer::cursor::Cursor, registry::parser::TokenParser,
        token::Token,
    },
};

impl Calculator {
    /// Runs a registered token parser and checks that it made progress.
    pub(crate) fn recognize_custom(parser: &dyn TokenParser,
                                   cursor: &mut Cursor<'_>)
                                   -> Result<Token> {
        let index = cursor.index();
        let token = parser.tokenize(cursor)?;
        if cursor.index() == index {
            return Err(ParseError::StalledTokenParser { index }.into());
        }
        Ok(token)
    }

    /// Converts the `len`-byte numeric run at the cursor into an operand.
    ///
    /// The whole run has to parse as an `f64`; a valid prefix is not enough.
    pub(crate) fn recognize_number(cursor: &mut Cursor<'_>, len: usize) -> ParseResult<Token> {
        let index = cursor.index();
        let literal = &cursor.remaining()[..len];
        let value = literal.parse::<f64>()
                           .map_err(|_| ParseError::InvalidNumber { literal: literal.to_string(),
                                                                    index })?;
        cursor.advance(len);
        Ok(Token::Operand(value))
    }

    /// Consumes `symbol`, which the registry matched at the cursor.
    pub(crate) fn recognize_operator(cursor: &mut Cursor<'_>, symbol: &str) -> Token {
        cursor.advance(symbol.len());
        Token::Operator(symbol.to_string())
    }

    /// Tokenizes the parenthesized group opening at the cursor.
    ///
    /// The text between the parentheses goes through the full tokenize and
    /// normalize pipeline one level deeper, and the cursor moves past the
    /// matching `)`.
    ///
    /// # Errors
    /// - `UnmatchedParenthesis` if the `(` is never closed within the
    ///   cursor's range.
    /// - `EmptyGroup` if the parentheses enclose nothing but whitespace.
    pub(crate) fn recognize_group(&self, cursor: &mut Cursor<'_>) -> Result<Token> {
        let open = cursor.index();
        let start = open + 1;
        let close = matching_close(cursor.input(), start, cursor.end())
            .ok_or(ParseError::UnmatchedParenthesis { index: open })?;

        let depth = cursor.depth() + 1;
        let tokens = self.tokenize_range(cursor.input(), start, close, depth)?;
        cursor.seek(close + 1);

        self.normalize(tokens, depth)?
            .ok_or_else(|| ParseError::EmptyGroup { index: open }.into())
    }
}

/// Finds the `)` closing a group whose contents start at `start`.
///
/// The depth counter starts at one for the `(` just before `start`, goes up
/// on every further `(` and down on every `)`; the match is the `)` that
/// brings it to zero.
///
/// # Returns
/// The offset of the matching `)`, or `None` if it does not occur before
/// `end`.
///
/// # Example
/// ```
/// use calcite::interpreter::lexer::recognizers::matching_close;
///
/// let text = "(1 + (2 * 3)) - 4";
/// assert_eq!(matching_close(text, 1, text.len()), Some(12));
/// assert_eq!(matching_close("(1 + (2)", 1, 8), None);
/// ```
#[must_use]
pub fn matching_close(input: &str, start: usize, end: usize) -> Option<usize> {
    let mut depth = 1_usize;
    for (offset, byte) in input.as_bytes().get(start..end)?.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            },
            _ => {},
        }
    }
    None
}
