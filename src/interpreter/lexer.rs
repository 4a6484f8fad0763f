/// Core tokenization loop and per-character dispatch.
///
/// Drives a cursor over the input, skipping whitespace and choosing between
/// registered token parsers and the built-in recognizers.
pub mod core;

/// Scan state shared with custom token parsers.
pub mod cursor;

/// Character classification.
///
/// A `logos` lexeme scan anchored at the cursor that identifies whitespace
/// runs, numeric runs and parentheses.
pub mod lexeme;

/// Built-in number, operator and group recognizers.
pub mod recognizers;
