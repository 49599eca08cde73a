/// Core evaluation logic.
///
/// Contains the `Evaluator` configuration, the recursive dispatch over tree
/// nodes and the `evaluate` entry point.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operations, including the division-by-zero
/// policy.
pub mod binary;
