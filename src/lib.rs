//! # calcite
//!
//! calcite is an arithmetic expression evaluator written in Rust.
//! It substitutes `$name` variables, tokenizes the text (recursing into
//! parenthesized groups), and reduces the tokens to a number by precedence
//! climbing. Both the operator set and the tokenization grammar can be
//! extended at run time through a [`Calculator`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while substituting
/// variables, tokenizing, normalizing or evaluating an expression. Each error
/// carries the offending name, symbol or offset where one is known.
///
/// # Responsibilities
/// - Defines error enums for both phases (parse and runtime).
/// - Wraps them in a single `Error` returned by the public entry points.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together variable substitution, the lexer, the
/// normalizer, the evaluator and the extension registries, and exposes the
/// `Calculator` that owns them.
///
/// # Responsibilities
/// - Coordinates all phases from raw text to a number.
/// - Provides the extension traits for operators and token parsers.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Formatting numbers as expression text and comparing results with a
/// tolerance.
pub mod util;

pub use crate::{
    error::{Error, ParseError, Result, RuntimeError},
    interpreter::{
        calculator::{Calculator, DEFAULT_MAX_DEPTH},
        evaluator::core::EvalResult,
        lexer::cursor::Cursor,
        registry::{operator::BinaryOperator, parser::TokenParser},
        token::Token,
        variables::Variables,
    },
};

/// Evaluates `expression` with the built-in operators after substituting
/// `variables`.
///
/// An absent or empty expression evaluates to `0`. To add operators or token
/// parsers, build a [`Calculator`] instead.
///
/// # Errors
/// Returns an error if a variable is undefined, the text cannot be
/// tokenized, or evaluation fails (for example on division by zero).
///
/// # Examples
/// ```
/// use calcite::{Error, RuntimeError, parse};
///
/// assert_eq!(parse("2 + 3 * 4", &[("unused", 0.0)]).unwrap(), 14.0);
/// assert_eq!(parse("$x + 1", &[("x", 5.0)]).unwrap(), 6.0);
/// assert_eq!(parse("", &[("x", 5.0)]).unwrap(), 0.0);
///
/// let err = parse("10 / 0", &[("x", 5.0)]).unwrap_err();
/// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
/// ```
pub fn parse<'a, V>(expression: impl Into<Option<&'a str>>, variables: &V) -> Result<f64>
    where V: Variables + ?Sized
{
    Calculator::new().parse(expression, variables)
}

/// Evaluates `expression` with the built-in operators and no variables.
///
/// # Errors
/// Same as [`parse`].
///
/// # Examples
/// ```
/// use calcite::evaluate;
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 64.0);
/// assert_eq!(evaluate("-5 + 3").unwrap(), -2.0);
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    Calculator::new().evaluate(expression)
}
