use crate::{
    error::{ParseError, Result},
    interpreter::{
        calculator::Calculator,
        lexer::{
            cursor::Cursor,
            lexeme::{Lexeme, classify},
        },
        token::Token,
    },
};

impl Calculator {
    /// Tokenizes and normalizes a whole expression.
    ///
    /// # Returns
    /// `None` when the expression holds nothing but whitespace, otherwise the
    /// single token the expression normalizes to.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(crate) fn tokenize(&self, input: &str) -> Result<Option<Token>> {
        let tokens = self.tokenize_range(input, 0, input.len(), 0)?;
        tracing::trace!(count = tokens.len(), "tokenized expression");
        self.normalize(tokens, 0)
    }

    /// Tokenizes `input[start..end]`, which sits `depth` groups deep.
    ///
    /// The tokens are returned as found; normalizing them is up to the
    /// caller.
    pub(crate) fn tokenize_range(&self,
                                 input: &str,
                                 start: usize,
                                 end: usize,
                                 depth: usize)
                                 -> Result<Vec<Token>> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth }.into());
        }

        let mut cursor = Cursor::new(input, start, end, depth);
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token(&mut cursor)? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Produces the next token, or `None` once the cursor is exhausted.
    ///
    /// Dispatch order, first match wins:
    /// 1. whitespace is skipped;
    /// 2. registered token parsers, in registration order;
    /// 3. a numeric run;
    /// 4. the longest registered operator symbol;
    /// 5. `(`, which opens a group.
    ///
    /// Anything else, including a stray `)`, is an illegal expression.
    fn next_token(&self, cursor: &mut Cursor<'_>) -> Result<Option<Token>> {
        loop {
            let Some(ch) = cursor.peek() else {
                return Ok(None);
            };
            let lexeme = classify(cursor.remaining());

            if let Some((Lexeme::Whitespace, len)) = lexeme {
                cursor.advance(len);
                continue;
            }

            if let Some(parser) = self.parsers.find(ch) {
                return Self::recognize_custom(parser, cursor).map(Some);
            }

            if let Some((Lexeme::Numeric, len)) = lexeme {
                return Ok(Some(Self::recognize_number(cursor, len)?));
            }

            if let Some(symbol) = self.operators.longest_match(cursor.remaining()) {
                return Ok(Some(Self::recognize_operator(cursor, symbol)));
            }

            return match lexeme {
                Some((Lexeme::Open, _)) => self.recognize_group(cursor).map(Some),
                _ => Err(ParseError::IllegalExpression { index: cursor.index() }.into()),
            };
        }
    }
}
