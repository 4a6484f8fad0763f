/// The calculator module owns the evaluation context.
///
/// A `Calculator` bundles the operator registry, the token parser registry
/// and the nesting limit, and exposes the `parse` entry point that runs the
/// whole pipeline against them.
///
/// # Responsibilities
/// - Seeds the built-in operators and an empty token parser list.
/// - Offers builder-style and in-place registration of extensions.
/// - Drives substitution, tokenization, normalization and evaluation.
pub mod calculator;
/// The evaluator module reduces tokens to a number.
///
/// The evaluator walks a normalized token sequence left to right and combines
/// operands by precedence climbing, recursing into groups.
///
/// # Responsibilities
/// - Applies operator priorities, associating equal priorities to the left.
/// - Reports unknown operators, missing operands and misplaced tokens.
/// - Enforces the nesting limit while descending into groups.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer scans the substituted expression one token at a time,
/// consulting registered token parsers before the built-in number, operator
/// and group recognizers. Parenthesized groups are tokenized recursively.
///
/// # Responsibilities
/// - Classifies characters and recognizes numbers, operators and groups.
/// - Matches parentheses and reports unmatched ones.
/// - Exposes the scan `Cursor` to custom token parsers.
pub mod lexer;
/// Collapses a token list into a single evaluable token.
pub mod normalize;
/// The registry module holds the extension points.
///
/// Operators map a symbol to a priority and a compute function; token parsers
/// are an ordered list of recognition rules consulted by the lexer.
///
/// # Responsibilities
/// - Defines the `BinaryOperator` and `TokenParser` traits.
/// - Provides the built-in arithmetic operators.
/// - Stores registrations in a cheaply clonable form.
pub mod registry;
/// Defines the `Token` type shared by the lexer, normalizer and evaluator.
pub mod token;
/// Replaces `$name` references with bound numbers before tokenization.
pub mod variables;
