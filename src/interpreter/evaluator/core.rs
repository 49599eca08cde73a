use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvaluatorError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluatorError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluatorError>;

/// How division by zero is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionMode {
    /// Follow IEEE-754: `x / 0` is a signed infinity, `0 / 0` is NaN.
    #[default]
    Ieee754,
    /// Report a zero divisor as [`EvaluatorError::DivisionByZero`].
    Strict,
}

/// Evaluation settings.
///
/// An `Evaluator` holds no state besides its configuration, so one value can
/// evaluate any number of trees, from any number of threads.
///
/// ## Usage
/// ```
/// use evalexp::{DivisionMode, Evaluator, parse};
///
/// let expr = parse("1 / 0").unwrap();
///
/// assert_eq!(Evaluator::new().evaluate(&expr), Ok(f64::INFINITY));
/// assert!(Evaluator::with_division(DivisionMode::Strict).evaluate(&expr)
///                                                       .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    /// Treatment of zero divisors.
    pub division: DivisionMode,
}

impl Evaluator {
    /// Creates an evaluator with IEEE-754 division.
    #[must_use]
    pub const fn new() -> Self {
        Self { division: DivisionMode::Ieee754 }
    }

    /// Creates an evaluator with the given division mode.
    #[must_use]
    pub const fn with_division(division: DivisionMode) -> Self {
        Self { division }
    }

    /// Reduces an expression tree to a single number.
    ///
    /// Literals yield their value, negation flips the sign of its operand,
    /// and binary operations evaluate the left operand, then the right one,
    /// then combine them. The walk keeps its own work stack instead of
    /// recursing, so long operator chains (which fold into left-deep trees)
    /// do not grow the call stack.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// Returns an [`EvaluatorError`] only when the division mode is
    /// [`DivisionMode::Strict`] and a divisor evaluates to zero.
    ///
    /// # Example
    /// ```
    /// use evalexp::{DivisionMode, Evaluator, EvaluatorError, parse};
    ///
    /// let evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate(&parse("-(1.5 * 2)").unwrap()), Ok(-3.0));
    /// assert_eq!(evaluator.evaluate(&parse("-1 / 0").unwrap()), Ok(f64::NEG_INFINITY));
    ///
    /// let strict = Evaluator::with_division(DivisionMode::Strict);
    /// assert_eq!(strict.evaluate(&parse("1 / (2 - 2)").unwrap()),
    ///            Err(EvaluatorError::DivisionByZero));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        let mut work = vec![Step::Visit(expr)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(Expr::NumberLiteral { value }) => values.push(*value),
                Step::Visit(Expr::UnaryNegate { operand }) => {
                    work.push(Step::Negate);
                    work.push(Step::Visit(&**operand));
                },
                Step::Visit(Expr::BinaryOp { left, op, right }) => {
                    work.push(Step::Apply(*op));
                    work.push(Step::Visit(&**right));
                    work.push(Step::Visit(&**left));
                },
                Step::Negate => {
                    let value = pop_operand(&mut values);
                    values.push(Self::eval_negate(value));
                },
                Step::Apply(op) => {
                    let right = pop_operand(&mut values);
                    let left = pop_operand(&mut values);
                    values.push(self.eval_binary_op(op, left, right)?);
                },
            }
        }

        Ok(pop_operand(&mut values))
    }
}

/// One pending action of the evaluation walk.
enum Step<'a> {
    /// Evaluate a node and push its value.
    Visit(&'a Expr),
    /// Negate the value on top of the stack.
    Negate,
    /// Combine the two values on top of the stack.
    Apply(BinaryOperator),
}

/// Pops an operand that the walk pushed earlier.
fn pop_operand(values: &mut Vec<f64>) -> f64 {
    let Some(value) = values.pop() else {
        unreachable!("every node pushes exactly one value before it is consumed")
    };
    value
}

/// Evaluates `ast` with the default [`Evaluator`].
///
/// # Errors
/// Never fails for trees produced by the parser; the `Result` leaves room for
/// stricter evaluators.
///
/// # Example
/// ```
/// use evalexp::{evaluate, parse};
///
/// let expr = parse("1 + 2 * 3 + 4").unwrap();
///
/// assert_eq!(evaluate(&expr), Ok(11.0));
/// ```
pub fn evaluate(ast: &Expr) -> EvalResult<f64> {
    let value = Evaluator::new().evaluate(ast)?;
    trace!(value, nodes = ast.node_count(), "evaluated expression");

    Ok(value)
}
