use crate::{
    ast::Ast,
    error::{Error, ParseError},
    interpreter::lexer::{Lexer, Token},
    source::{Location, Position},
};

/// Result type used by the parser.
///
/// Parsing can fail with a `ParseError`, or with a `LexError` surfacing
/// from the token stream mid-parse; both arrive wrapped in [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// Recursive-descent parser over a [`Lexer`]'s token stream.
///
/// The parser owns the lexer and a single token of lookahead, populated at
/// construction. Each grammar production is a method one precedence tier
/// above the next; the stream advances only through [`Parser::eat`] and
/// the payload consumers built on it, which is also where every syntax
/// error is detected.
///
/// # Example
/// ```
/// use tally::{
///     ast::Ast,
///     interpreter::{lexer::Lexer, parser::core::Parser},
///     source::Source,
/// };
///
/// let source = Source::new("{ a = 1 + 2; }", None);
/// let mut parser = Parser::new(Lexer::new(&source)).unwrap();
/// let tree = parser.parse().unwrap();
///
/// assert!(matches!(tree, Ast::Compound { .. }));
/// ```
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) lexer:    Lexer<'src>,
    pub(in crate::interpreter::parser) current:  Token,
    pub(in crate::interpreter::parser) position: Position,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes the one-token lookahead buffer.
    ///
    /// # Errors
    /// Returns a `LexError` if the source fails to lex at its very first
    /// token.
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self, Error> {
        let (current, position) = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  position })
    }

    /// Parses one whole program.
    ///
    /// Grammar: `program := compound_statement`
    ///
    /// The token following the program must be `EOF`; anything else is
    /// reported as trailing input.
    ///
    /// # Returns
    /// The root AST node, always an `Ast::Compound`.
    ///
    /// # Errors
    /// Any lex or parse error raised while consuming the program, or a
    /// `ParseError` if tokens remain once it has been consumed.
    pub fn parse(&mut self) -> ParseResult<Ast> {
        let node = self.program()?;
        if self.current != Token::Eof {
            return Err(Error::Parse(ParseError::TrailingInput { found:    self.current
                                                                              .kind_name()
                                                                              .to_string(),
                                                                location: self.location(), }));
        }
        Ok(node)
    }

    /// Parses the `program` production.
    ///
    /// Grammar: `program := compound_statement`
    pub(in crate::interpreter::parser) fn program(&mut self) -> ParseResult<Ast> {
        self.compound_statement()
    }

    /// Consumes the lookahead token only if its kind matches `expected`,
    /// then pulls the next token from the lexer.
    ///
    /// This is the sole mechanism for advancing the token stream and the
    /// sole detection point for malformed syntax.
    ///
    /// # Errors
    /// A `ParseError` naming the expected and actual token kinds and the
    /// position of the offending token, if the kinds differ.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> ParseResult<()> {
        if self.current == *expected {
            self.advance()
        } else {
            Err(self.unexpected(expected.kind_name()))
        }
    }

    /// Consumes an identifier token and returns its name and position.
    ///
    /// The payload-carrying counterpart of [`Parser::eat`]: same matching
    /// rule, same error shape, but hands back the identifier's content.
    pub(in crate::interpreter::parser) fn identifier(&mut self)
                                                     -> ParseResult<(String, Position)> {
        match &self.current {
            Token::Identifier(name) => {
                let name = name.clone();
                let position = self.position;
                self.advance()?;
                Ok((name, position))
            },
            _ => Err(self.unexpected("ID")),
        }
    }

    /// Consumes a number token and returns its value and position.
    pub(in crate::interpreter::parser) fn number(&mut self) -> ParseResult<(f64, Position)> {
        match &self.current {
            Token::Number(value) => {
                let value = *value;
                let position = self.position;
                self.advance()?;
                Ok((value, position))
            },
            _ => Err(self.unexpected("NUMBER")),
        }
    }

    /// Replaces the lookahead buffer with the next token from the lexer.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<()> {
        let (token, position) = self.lexer.next_token()?;
        self.current = token;
        self.position = position;
        Ok(())
    }

    /// Builds the `ParseError` for a lookahead token of the wrong kind.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> Error {
        Error::Parse(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                   found:    self.current.kind_name().to_string(),
                                                   location: self.location(), })
    }

    /// The full location of the current lookahead token.
    pub(in crate::interpreter::parser) fn location(&self) -> Location {
        self.lexer.source().location(self.position)
    }
}
