use crate::source::Location;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lookahead token did not match what the grammar required.
    UnexpectedToken {
        /// Diagnostic name of the token kind the grammar required.
        expected: String,
        /// Diagnostic name of the token kind that was found.
        found:    String,
        /// Where the mismatching token occurred.
        location: Location,
    },
    /// A statement began with a token that starts no statement.
    VoidExpression {
        /// Diagnostic name of the offending token kind.
        found:    String,
        /// Where the offending token occurred.
        location: Location,
    },
    /// Tokens remained after the program's closing brace.
    TrailingInput {
        /// Diagnostic name of the first unconsumed token kind.
        found:    String,
        /// Where the unconsumed token occurred.
        location: Location,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    location, } => {
                write!(f,
                       "{location}: error: expected {expected}, got {found}\n{}",
                       location.annotated_line())
            },

            Self::VoidExpression { location, .. } => {
                write!(f, "{location}: error: void expression\n{}", location.annotated_line())
            },

            // Wording kept for compatibility with the language's historical
            // diagnostics; the condition is unconsumed trailing tokens.
            Self::TrailingInput { location, .. } => {
                write!(f,
                       "{location}: error: unexpected end of input\n{}",
                       location.annotated_line())
            },
        }
    }
}

impl std::error::Error for ParseError {}
