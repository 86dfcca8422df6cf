/// Lexing errors.
///
/// Defines the errors the lexer can raise while turning source text into
/// tokens: unrecognized characters and malformed numeric literals. Both
/// carry the exact source location and render the full caret diagnostic.
pub mod lex_error;
/// Runtime name errors.
///
/// Contains the single error the interpreter can raise during evaluation:
/// reading a variable before it was ever assigned.
pub mod name_error;
/// Parsing errors.
///
/// Defines all error types the parser can raise: token mismatches at an
/// `eat` call, statements that start with no statement-forming token, and
/// input left over after the program's closing brace.
pub mod parse_error;

pub use lex_error::{LexError, LexErrorKind};
pub use name_error::NameError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq)]
/// Any error the pipeline can surface, by phase.
///
/// Lexing, parsing, and evaluation each have their own error type; `Error`
/// wraps the three so one `Result` flows out of [`crate::interpret`] while
/// embedders can still match on the phase and kind.
pub enum Error {
    /// The lexer rejected the source text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation read a variable that was never assigned.
    Name(NameError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<NameError> for Error {
    fn from(error: NameError) -> Self {
        Self::Name(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => error.fmt(f),
            Self::Parse(error) => error.fmt(f),
            Self::Name(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Name(error) => Some(error),
        }
    }
}
