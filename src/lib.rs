//! # evalexp
//!
//! evalexp parses and evaluates arithmetic expressions.
//! It supports `+`, `-`, `*`, `/`, parentheses, unary negation and decimal
//! literals, with the usual precedence and left associativity, and produces
//! an `f64`.
//!
//! ```
//! use evalexp::{evaluate, parse};
//!
//! let expr = parse("(1 + 2) * (3 + 4)").unwrap();
//! assert_eq!(evaluate(&expr), Ok(21.0));
//! ```

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
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The tree is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, negation and binary operation nodes.
/// - Guarantees exclusive ownership of child nodes.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression, with the source position where parsing failed.
///
/// # Responsibilities
/// - Defines `ParseError` and `EvaluatorError`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the recursive-descent parser and the
/// tree-walking evaluator.
///
/// # Responsibilities
/// - Tokenizes source text lazily.
/// - Builds the syntax tree with one token of lookahead.
/// - Reduces the tree to a number.
pub mod interpreter;

pub use crate::{
    error::{EvaluatorError, ParseError},
    interpreter::{
        evaluator::core::{DivisionMode, Evaluator, evaluate},
        parser::core::{
            MAX_NESTING_DEPTH, ParenMatching, ParseOptions, TrailingInput, parse, parse_with_options,
        },
    },
};

/// Parses and evaluates `source` with default settings.
///
/// This is a shortcut for [`parse`] followed by [`evaluate`]. Input following
/// a complete expression is ignored and division by zero follows IEEE-754.
///
/// # Errors
/// Returns a [`ParseError`] if the source is not a valid expression, or an
/// [`EvaluatorError`] if evaluation fails.
///
/// # Examples
/// ```
/// use evalexp::get_result;
///
/// assert_eq!(get_result("1 - 2 - 3 - 4").unwrap(), -8.0);
///
/// // A doubled operator cannot start a factor.
/// assert!(get_result("1 ** 2.5").is_err());
/// ```
pub fn get_result(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    debug!(nodes = expr.node_count(), depth = expr.depth(), "parsed expression");

    Ok(evaluate(&expr)?)
}
