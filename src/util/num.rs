/// Truncates a float to a 64-bit signed integer, C-style.
///
/// This is the coercion the modulo, bitwise and shift operators apply to
/// their operands: the fractional part is discarded toward zero. The cast
/// is total — NaN becomes `0`, and values beyond the `i64` range clamp to
/// `i64::MIN`/`i64::MAX`.
///
/// ## Example
/// ```
/// use tally::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9), -2);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Widens an integer operation's result back into the value domain.
///
/// Integers beyond 2^53 in magnitude lose their low bits; the language's
/// single numeric type is `f64`, so that loss is inherent to the domain
/// rather than an error.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64_lossy(value: i64) -> f64 {
    value as f64
}

/// Reduces a truncated right operand to a shift count.
///
/// Shift counts are masked to the low six bits, so shifting by 64 is a
/// no-op and negative counts wrap, mirroring `wrapping_shl`/`wrapping_shr`
/// on `i64`.
///
/// ## Example
/// ```
/// use tally::util::num::i64_to_shift_count;
///
/// assert_eq!(i64_to_shift_count(4), 4);
/// assert_eq!(i64_to_shift_count(64), 0);
/// assert_eq!(i64_to_shift_count(-1), 63);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub const fn i64_to_shift_count(value: i64) -> u32 {
    (value as u32) & 63
}
