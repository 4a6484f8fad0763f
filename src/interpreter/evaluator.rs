/// Core evaluation logic for tokens and token sequences.
///
/// Contains the result type, operand and operator access, and the nesting
/// limit check.
pub mod core;

/// Precedence climbing.
///
/// Combines operands left to right, deferring a combination while a tighter
/// binding operator follows.
pub mod climb;
