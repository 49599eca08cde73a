/// Core parsing entry points.
///
/// Holds the one-token lookahead stream, the parse options and the public
/// `parse` functions.
pub mod core;

/// Sum and product parsing.
///
/// Implements the expression and term productions together with their
/// left-folding continuations.
pub mod binary;

/// Factor parsing.
///
/// Handles numbers, negation and parenthesised sub-expressions.
pub mod unary;
