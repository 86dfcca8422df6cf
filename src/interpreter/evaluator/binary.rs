use crate::{
    ast::{Ast, BinaryOperator},
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::{f64_to_i64_truncated, i64_to_f64_lossy, i64_to_shift_count},
};

impl Interpreter<'_> {
    /// Evaluates a binary operation, left operand first.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Ast,
                                                            op: BinaryOperator,
                                                            right: &Ast)
                                                            -> EvalResult<f64> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        Ok(apply_binary(op, lhs, rhs))
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// `+`, `-`, `*` and `/` operate directly on the float values; division
/// follows native IEEE-754 semantics, so a zero divisor yields an infinity
/// or NaN rather than an error. `**` is `f64::powf`. The remaining
/// operators truncate both operands to `i64`, apply the integer operation,
/// and widen the result back to `f64`:
///
/// - `%` is integer remainder; a zero divisor (and the one overflowing
///   case, `i64::MIN % -1`) yields NaN, mirroring the float-division rule.
/// - `<<` and `>>` mask the shift count to the low six bits of the
///   truncated right operand.
///
/// # Example
/// ```
/// use tally::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Mod, 10.0, 3.0), 1.0);
/// assert_eq!(apply_binary(BinaryOperator::BitAnd, 7.0, 3.0), 3.0);
/// assert_eq!(apply_binary(BinaryOperator::ShiftLeft, 1.0, 4.0), 16.0);
/// assert!(apply_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
        BinaryOperator::Pow => lhs.powf(rhs),

        BinaryOperator::Mod => {
            match f64_to_i64_truncated(lhs).checked_rem(f64_to_i64_truncated(rhs)) {
                Some(remainder) => i64_to_f64_lossy(remainder),
                None => f64::NAN,
            }
        },

        BinaryOperator::BitAnd => {
            i64_to_f64_lossy(f64_to_i64_truncated(lhs) & f64_to_i64_truncated(rhs))
        },
        BinaryOperator::BitOr => {
            i64_to_f64_lossy(f64_to_i64_truncated(lhs) | f64_to_i64_truncated(rhs))
        },
        BinaryOperator::BitXor => {
            i64_to_f64_lossy(f64_to_i64_truncated(lhs) ^ f64_to_i64_truncated(rhs))
        },

        BinaryOperator::ShiftLeft => {
            let count = i64_to_shift_count(f64_to_i64_truncated(rhs));
            i64_to_f64_lossy(f64_to_i64_truncated(lhs).wrapping_shl(count))
        },
        BinaryOperator::ShiftRight => {
            let count = i64_to_shift_count(f64_to_i64_truncated(rhs));
            i64_to_f64_lossy(f64_to_i64_truncated(lhs).wrapping_shr(count))
        },
    }
}
