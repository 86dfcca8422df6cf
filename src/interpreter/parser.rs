/// Core parser state and the program entry point.
///
/// Declares the `Parser` itself, the `eat` primitive that is the sole way
/// the token stream advances, and the top-level `parse` operation.
pub mod core;

/// Binary expression parsing.
///
/// Implements the three left-associative precedence tiers: additive and
/// bitwise operators, multiplicative operators, and exponentiation.
pub mod binary;

/// Unary and atomic expression parsing.
///
/// Handles prefix operators, numeric literals, parenthesized expressions,
/// and variable references.
pub mod unary;

/// Statement parsing.
///
/// Implements compound statements (brace-delimited blocks), statement
/// lists with their semicolon rules, and assignment statements.
pub mod statement;
