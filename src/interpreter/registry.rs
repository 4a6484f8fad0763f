/// Operator registry.
///
/// Maps operator symbols to a priority and a binary compute function, seeded
/// with the built-in arithmetic operators.
pub mod operator;

/// Token parser registry.
///
/// Holds the ordered list of caller-supplied recognition rules that the lexer
/// consults before its built-in recognizers.
pub mod parser;
