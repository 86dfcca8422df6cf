use crate::{
    ast::{Ast, UnaryOperator},
    interpreter::{lexer::Token, parser::core::{ParseResult, Parser}},
};

impl Parser<'_> {
    /// Parses a factor: the atoms of the expression grammar.
    ///
    /// A factor is an optional prefix operator wrapping another factor, a
    /// numeric literal, a parenthesized expression, or a variable
    /// reference. Prefix operators are right-associative, so `~-x` parses
    /// as `~(-x)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-" | "~") factor
    ///             | NUMBER
    ///             | "(" expr ")"
    ///             | variable
    /// ```
    ///
    /// # Returns
    /// The parsed factor node.
    ///
    /// # Errors
    /// Any token that fits none of the alternatives falls through to
    /// [`Parser::variable`] and is reported as "expected ID".
    pub(in crate::interpreter::parser) fn factor(&mut self) -> ParseResult<Ast> {
        let position = self.position;
        match &self.current {
            Token::Plus => {
                self.eat(&Token::Plus)?;
                Ok(Ast::UnaryOp { op: UnaryOperator::Plus,
                                  operand: Box::new(self.factor()?),
                                  position })
            },
            Token::Minus => {
                self.eat(&Token::Minus)?;
                Ok(Ast::UnaryOp { op: UnaryOperator::Negate,
                                  operand: Box::new(self.factor()?),
                                  position })
            },
            Token::Tilde => {
                self.eat(&Token::Tilde)?;
                Ok(Ast::UnaryOp { op: UnaryOperator::Not,
                                  operand: Box::new(self.factor()?),
                                  position })
            },
            Token::Number(_) => {
                let (value, position) = self.number()?;
                Ok(Ast::Number { value, position })
            },
            Token::LParen => {
                self.eat(&Token::LParen)?;
                let node = self.expr()?;
                self.eat(&Token::RParen)?;
                Ok(node)
            },
            _ => self.variable(),
        }
    }

    /// Parses a bare identifier as a variable reference.
    ///
    /// Grammar: `variable := ID`
    pub(in crate::interpreter::parser) fn variable(&mut self) -> ParseResult<Ast> {
        let (name, position) = self.identifier()?;
        Ok(Ast::Variable { name, position })
    }
}
