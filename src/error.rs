/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression: unrecognised characters, tokens that cannot start a factor,
/// a missing closing parenthesis, and malformed numbers.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while reducing a tree to a number.
/// With the default evaluator no such error is ever produced.
pub mod evaluator_error;

pub use evaluator_error::EvaluatorError;
pub use parse_error::{ParseError, ParseErrorKind};
