use crate::source::Location;

/// Classifies a lexing failure before position information is attached.
///
/// This is the error type the token recognizer itself produces; the lexer
/// pairs it with the offending slice and its location to build a full
/// [`LexError`]. The `Default` variant is what unmatched input maps to.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token rule matched the input.
    #[default]
    UnrecognizedCharacter,
    /// A run of digits and decimal points did not form a valid number.
    MalformedNumber,
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character that starts no token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character occurred.
        location:  Location,
    },
    /// A numeric literal that scanned but failed to convert, e.g. `1.2.3`.
    MalformedNumber {
        /// The scanned literal text.
        literal:  String,
        /// Where the literal started.
        location: Location,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, location } => {
                write!(f,
                       "{location}: error: unrecognized character '{character}'\n{}",
                       location.annotated_line())
            },

            Self::MalformedNumber { literal, location } => {
                write!(f,
                       "{location}: error: malformed number literal '{literal}'\n{}",
                       location.annotated_line())
            },
        }
    }
}

impl std::error::Error for LexError {}
