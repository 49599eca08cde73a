use crate::interpreter::evaluator::core::Evaluator;

impl Evaluator {
    /// Evaluates arithmetic negation.
    ///
    /// Negation only flips the sign bit, so `-(0)` is `-0.0` and NaN stays
    /// NaN.
    ///
    /// # Example
    /// ```
    /// use evalexp::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_negate(5.0), -5.0);
    /// assert!(Evaluator::eval_negate(0.0).is_sign_negative());
    /// ```
    #[must_use]
    pub const fn eval_negate(value: f64) -> f64 {
        -value
    }
}
