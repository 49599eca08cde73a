use crate::{
    ast::BinaryOperator,
    error::EvaluatorError,
    interpreter::evaluator::core::{DivisionMode, EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Addition, subtraction and multiplication follow IEEE-754. Division
    /// does too unless the evaluator is in [`DivisionMode::Strict`], where a
    /// zero divisor (of either sign) is an error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use evalexp::{Evaluator, ast::BinaryOperator};
    ///
    /// let evaluator = Evaluator::new();
    ///
    /// assert_eq!(evaluator.eval_binary_op(BinaryOperator::Mul, 1.5, 2.0), Ok(3.0));
    /// assert_eq!(evaluator.eval_binary_op(BinaryOperator::Div, -1.0, 0.0),
    ///            Ok(f64::NEG_INFINITY));
    /// ```
    pub fn eval_binary_op(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if self.division == DivisionMode::Strict && right == 0.0 {
                    return Err(EvaluatorError::DivisionByZero);
                }
                left / right
            },
        })
    }
}
