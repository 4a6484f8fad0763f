use crate::{
    error::{ParseResult, Result},
    interpreter::{
        evaluator::core::EvalResult,
        lexer::cursor::Cursor,
        registry::{
            operator::{BinaryOperator, OperatorRegistry},
            parser::{FnTokenParser, ParserRegistry, TokenParser},
        },
        token::Token,
        variables::{Variables, substitute},
    },
};

/// Default limit on group nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Stores the evaluation context.
///
/// This struct holds the operator registry, the token parser registry and the
/// nesting limit. Every `parse` call reads them but never changes them, so a
/// calculator can be shared between threads, and cloning one takes a
/// snapshot that later registrations on the cloned-from calculator do not affect.
///
/// ## Usage
///
/// ```
/// use calcite::Calculator;
///
/// let calculator = Calculator::new().with_operator("max", 200, |l, r| Ok(l.max(r)));
///
/// assert_eq!(calculator.evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculator.evaluate("1 + 2 max 7").unwrap(), 8.0);
/// assert_eq!(calculator.parse("$x * 2", &[("x", 21.0)]).unwrap(), 42.0);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    pub(crate) operators: OperatorRegistry,
    pub(crate) parsers:   ParserRegistry,
    pub(crate) max_depth: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the built-in operators `+ - * / % ^`, no
    /// token parsers, and a nesting limit of [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn new() -> Self {
        Self { operators: OperatorRegistry::default(),
               parsers:   ParserRegistry::default(),
               max_depth: DEFAULT_MAX_DEPTH, }
    }

    /// Returns the calculator with `symbol` registered as an operator.
    ///
    /// See [`Calculator::register_operator`].
    #[must_use]
    pub fn with_operator<F>(mut self, symbol: &str, priority: i32, compute: F) -> Self
        where F: Fn(f64, f64) -> EvalResult<f64> + Send + Sync + 'static
    {
        self.register_operator(symbol, priority, compute);
        self
    }

    /// Returns the calculator with a token parser registered.
    ///
    /// See [`Calculator::register_token_parser`].
    #[must_use]
    pub fn with_token_parser<P, T>(mut self,
                                   predicate: P,
                                   tokenize: T,
                                   insert_at: Option<usize>)
                                   -> Self
        where P: Fn(char) -> bool + Send + Sync + 'static,
              T: Fn(&mut Cursor<'_>) -> ParseResult<Token> + Send + Sync + 'static
    {
        self.register_token_parser(predicate, tokenize, insert_at);
        self
    }

    /// Returns the calculator with a different nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Registers `symbol` as a binary operator, replacing any existing entry.
    ///
    /// Higher priorities bind tighter; the built-in `+` and `-` have priority
    /// 10, and `*`, `/`, `%` and `^` have 100. Symbols may be several
    /// characters long. A symbol starting with a digit, `.`, `e` or whitespace
    /// is shadowed by the built-in recognizers and never matches. An empty
    /// symbol, or one starting with `(` or `)`, is ignored.
    ///
    /// The change applies to every later `parse` call.
    pub fn register_operator<F>(&mut self, symbol: &str, priority: i32, compute: F)
        where F: Fn(f64, f64) -> EvalResult<f64> + Send + Sync + 'static
    {
        self.operators.insert(symbol, priority, compute);
    }

    /// Registers an operator implemented by a [`BinaryOperator`] type.
    pub fn register_binary_operator(&mut self,
                                    symbol: &str,
                                    priority: i32,
                                    operator: impl BinaryOperator + 'static) {
        self.operators.insert(symbol, priority, operator);
    }

    /// Registers a token parser built from two closures.
    ///
    /// Whenever the character at the scan position satisfies `predicate`,
    /// `tokenize` is called with the cursor and must consume the token it
    /// returns. Token parsers are consulted after whitespace is skipped and
    /// before the built-in number, operator and group recognizers.
    ///
    /// # Parameters
    /// - `insert_at`: Position in the parser list; earlier parsers win. `None`
    ///   or an index past the end appends.
    ///
    /// # Example
    /// ```
    /// use calcite::{Calculator, Token};
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.register_token_parser(|c| c == 'π',
    ///                                  |cursor| {
    ///                                      cursor.bump();
    ///                                      Ok(Token::Operand(std::f64::consts::PI))
    ///                                  },
    ///                                  None);
    ///
    /// assert_eq!(calculator.evaluate("2 * π").unwrap(), std::f64::consts::TAU);
    /// ```
    pub fn register_token_parser<P, T>(&mut self, predicate: P, tokenize: T, insert_at: Option<usize>)
        where P: Fn(char) -> bool + Send + Sync + 'static,
              T: Fn(&mut Cursor<'_>) -> ParseResult<Token> + Send + Sync + 'static
    {
        self.parsers.insert(FnTokenParser::new(predicate, tokenize), insert_at);
    }

    /// Registers a token parser implemented by a [`TokenParser`] type.
    ///
    /// See [`Calculator::register_token_parser`] for the meaning of
    /// `insert_at`.
    pub fn register_parser(&mut self, parser: impl TokenParser + 'static, insert_at: Option<usize>) {
        self.parsers.insert(parser, insert_at);
    }

    /// Changes the nesting limit.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// The nesting limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The registered operators.
    #[must_use]
    pub const fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    /// The registered token parsers.
    #[must_use]
    pub const fn token_parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    /// Evaluates `expression` after substituting `variables`.
    ///
    /// An absent or empty expression evaluates to `0`, as does one made only
    /// of whitespace.
    ///
    /// # Errors
    /// Returns the first substitution, tokenization or evaluation error.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use calcite::Calculator;
    ///
    /// let calculator = Calculator::new();
    /// let variables = HashMap::from([("x", 5.0)]);
    ///
    /// assert_eq!(calculator.parse("$x + 1", &variables).unwrap(), 6.0);
    /// assert_eq!(calculator.parse(None::<&str>, &variables).unwrap(), 0.0);
    /// assert!(calculator.parse("$y + 1", &variables).is_err());
    /// ```
    pub fn parse<'a, V>(&self, expression: impl Into<Option<&'a str>>, variables: &V) -> Result<f64>
        where V: Variables + ?Sized
    {
        let Some(expression) = expression.into().filter(|e| !e.is_empty()) else {
            return Ok(0.0);
        };
        tracing::debug!(expression, "parsing expression");

        let source = substitute(expression, variables)?;
        let Some(token) = self.tokenize(&source)? else {
            return Ok(0.0);
        };
        Ok(self.evaluate_root(&token)?)
    }

    /// Evaluates `expression` without any variables.
    ///
    /// # Errors
    /// Same as [`Calculator::parse`]; any `$name` is undefined.
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        self.parse(expression, &[] as &[(&str, f64)])
    }
}
