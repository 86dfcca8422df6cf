/// Numeric conversion helpers.
///
/// This module provides the conversions between `f64` and `i64` that the
/// modulo, bitwise and shift operators are defined in terms of. Unlike
/// general-purpose checked conversions, these are deliberately lossy: the
/// language's semantics call for truncation, not rejection, so each helper
/// documents exactly what is discarded.
pub mod num;
