use std::sync::Arc;

use crate::{
    error::ParseResult,
    interpreter::{lexer::cursor::Cursor, token::Token},
};

/// A caller-supplied recognition rule for the lexer.
///
/// When the character at the scan position satisfies [`TokenParser::matches`],
/// the lexer hands the cursor to [`TokenParser::tokenize`], which must consume
/// at least one character and return the token it recognized.
pub trait TokenParser: Send + Sync {
    /// Returns `true` if this parser handles tokens starting with `ch`.
    fn matches(&self, ch: char) -> bool;

    /// Consumes a token starting at the cursor position.
    fn tokenize(&self, cursor: &mut Cursor<'_>) -> ParseResult<Token>;
}

/// A [`TokenParser`] built from a predicate closure and a tokenize closure.
pub struct FnTokenParser<P, T> {
    predicate: P,
    tokenize:  T,
}

impl<P, T> FnTokenParser<P, T>
    where P: Fn(char) -> bool + Send + Sync,
          T: Fn(&mut Cursor<'_>) -> ParseResult<Token> + Send + Sync
{
    /// Pairs a predicate with the closure that produces the token.
    pub const fn new(predicate: P, tokenize: T) -> Self {
        Self { predicate, tokenize }
    }
}

impl<P, T> TokenParser for FnTokenParser<P, T>
    where P: Fn(char) -> bool + Send + Sync,
          T: Fn(&mut Cursor<'_>) -> ParseResult<Token> + Send + Sync
{
    fn matches(&self, ch: char) -> bool {
        (self.predicate)(ch)
    }

    fn tokenize(&self, cursor: &mut Cursor<'_>) -> ParseResult<Token> {
        (self.tokenize)(cursor)
    }
}

/// Ordered list of registered [`TokenParser`]s.
///
/// Entries are never removed. Earlier entries win when several predicates
/// match the same character.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: Vec<Arc<dyn TokenParser>>,
}

impl ParserRegistry {
    /// Inserts `parser` at `insert_at`, or appends it when `insert_at` is
    /// `None` or past the end of the list.
    ///
    /// # Returns
    /// The position the parser ended up at.
    pub fn insert(&mut self, parser: impl TokenParser + 'static, insert_at: Option<usize>) -> usize {
        let position = insert_at.filter(|&i| i <= self.parsers.len())
                                .unwrap_or(self.parsers.len());
        self.parsers.insert(position, Arc::new(parser));
        tracing::debug!(position, total = self.parsers.len(), "registered token parser");
        position
    }

    /// Returns the first parser whose predicate accepts `ch`.
    #[must_use]
    pub fn find(&self, ch: char) -> Option<&dyn TokenParser> {
        self.parsers
            .iter()
            .find(|parser| parser.matches(ch))
            .map(Arc::as_ref)
    }

    /// The number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns `true` if no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
         .field("len", &self.parsers.len())
         .finish()
    }
}
