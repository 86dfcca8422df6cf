use logos::Logos;

use crate::{
    error::{LexError, LexErrorKind},
    source::{Position, Source},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The scanner takes the maximal run of digits and decimal points and
    /// converts it afterwards, so a run like `1.2.3` is a lexing error
    /// rather than two adjacent literals. No exponent notation, no sign;
    /// signs are unary operators.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `result`.
    /// The language has no keywords, so every identifier is a variable.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// End of input. Never produced by the token rules; the [`Lexer`]
    /// returns it once the text is exhausted, and keeps returning it on
    /// every call after that.
    Eof,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
    /// Newlines advance the line counter and reset the column origin.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    Newline,
}

impl Token {
    /// The stable diagnostic name of this token's kind, as used in parse
    /// error messages ("expected SEMICOLON, got BLOCK_END").
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Identifier(_) => "ID",
            Self::Plus => "ADDITION",
            Self::Minus => "SUBTRACTION",
            Self::Star => "MULTIPLICATION",
            Self::DoubleStar => "POWER",
            Self::Slash => "DIVISION",
            Self::Percent => "MODULO",
            Self::Ampersand => "BITWISE_AND",
            Self::Pipe => "BITWISE_OR",
            Self::Caret => "BITWISE_XOR",
            Self::Tilde => "BITWISE_NOT",
            Self::ShiftLeft => "BITSHIFT_L",
            Self::ShiftRight => "BITSHIFT_R",
            Self::LParen => "PARENTHESIS_L",
            Self::RParen => "PARENTHESIS_R",
            Self::LBrace => "BLOCK_BEGIN",
            Self::RBrace => "BLOCK_END",
            Self::Semicolon => "SEMICOLON",
            Self::Equals => "ASSIGN",
            Self::Eof => "EOF",
            Self::Whitespace => "WHITESPACE",
            Self::Newline => "NEWLINE",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, from which 1-based columns are computed per token span.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if the slice is a valid number.
/// - `Err(LexErrorKind::MalformedNumber)`: If the scanned run of digits
///   and decimal points does not convert, e.g. `1.2.3`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Produces tokens from a [`Source`], one per call.
///
/// The lexer owns a scan cursor over the source text and tracks the line
/// and column of every token it produces. Once the text is exhausted it
/// returns [`Token::Eof`] on every subsequent call; it never returns an
/// absent token.
///
/// # Example
/// ```
/// use tally::{
///     interpreter::lexer::{Lexer, Token},
///     source::Source,
/// };
///
/// let source = Source::new("{ x = 1; }", None);
/// let mut lexer = Lexer::new(&source);
///
/// let (token, position) = lexer.next_token().unwrap();
/// assert_eq!(token, Token::LBrace);
/// assert_eq!((position.line, position.column), (1, 1));
/// ```
pub struct Lexer<'src> {
    source: &'src Source,
    inner:  logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of the source text,
    /// line 1 column 1.
    #[must_use]
    pub fn new(source: &'src Source) -> Self {
        Self { source,
               inner: Token::lexer_with_extras(source.text(),
                                               LexerExtras { line:       1,
                                                             line_start: 0, }), }
    }

    /// The source this lexer reads from.
    #[must_use]
    pub const fn source(&self) -> &'src Source {
        self.source
    }

    /// Produces the next token and its position.
    ///
    /// Whitespace is skipped. At the end of the input this returns
    /// [`Token::Eof`], and keeps returning it on repeated calls.
    ///
    /// # Errors
    /// Returns a [`LexError`] carrying the offending text and its exact
    /// location if the input contains a character that starts no token,
    /// or a digits-and-dots run that is not a valid number.
    pub fn next_token(&mut self) -> Result<(Token, Position), LexError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok((token, self.position())),
            Some(Err(kind)) => Err(self.error(kind)),
            None => Ok((Token::Eof, self.position())),
        }
    }

    /// Line and column of the most recently scanned slice.
    fn position(&self) -> Position {
        Position { line:   self.inner.extras.line,
                   column: self.inner.span().start - self.inner.extras.line_start + 1, }
    }

    /// Attaches the offending slice and its location to a bare error kind.
    fn error(&self, kind: LexErrorKind) -> LexError {
        let location = self.source.location(self.position());
        match kind {
            LexErrorKind::UnrecognizedCharacter => {
                let character = self.inner.slice().chars().next().unwrap_or('\u{fffd}');
                LexError::UnrecognizedCharacter { character, location }
            },
            LexErrorKind::MalformedNumber => {
                LexError::MalformedNumber { literal: self.inner.slice().to_string(),
                                            location }
            },
        }
    }
}
