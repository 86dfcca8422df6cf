use crate::{
    ast::{Ast, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::{f64_to_i64_truncated, i64_to_f64_lossy},
};

impl Interpreter<'_> {
    /// Evaluates a unary operation.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           operand: &Ast)
                                                           -> EvalResult<f64> {
        let value = self.eval(operand)?;
        Ok(apply_unary(op, value))
    }
}

/// Applies a unary operator to an evaluated operand.
///
/// `+` returns the value unchanged and `-` negates it. `~` truncates the
/// operand to `i64`, complements the bits, and widens the result back to
/// `f64`, so `~0` is `-1`.
///
/// # Example
/// ```
/// use tally::{ast::UnaryOperator, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 5.0), -5.0);
/// assert_eq!(apply_unary(UnaryOperator::Not, 0.0), -1.0);
/// ```
#[must_use]
pub fn apply_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
        UnaryOperator::Not => i64_to_f64_lossy(!f64_to_i64_truncated(value)),
    }
}
