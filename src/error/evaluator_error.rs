#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
/// Represents all errors that can occur while evaluating a tree.
///
/// A well-formed tree cannot fail under the default
/// [`DivisionMode::Ieee754`](crate::interpreter::evaluator::core::DivisionMode)
/// evaluator; the variants here are only produced by stricter evaluators.
pub enum EvaluatorError {
    /// Attempted division by zero with [`DivisionMode::Strict`](crate::interpreter::evaluator::core::DivisionMode::Strict).
    DivisionByZero,
}

impl std::fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for EvaluatorError {}
