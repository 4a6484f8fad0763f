/// Numeric formatting helpers.
///
/// This module renders `f64` values as text the tokenizer reads back to the
/// identical value. It is used by variable substitution and by the command
/// line front end.
pub mod num;
