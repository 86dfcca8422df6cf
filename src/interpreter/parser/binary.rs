use crate::{
    ast::{Ast, BinaryOperator},
    interpreter::{lexer::Token, parser::core::{ParseResult, Parser}},
};

impl Parser<'_> {
    /// Parses a full expression: the additive/bitwise tier, lowest
    /// precedence.
    ///
    /// Handles left-associative binary operators: `+`, `-`, `&`, `|`,
    /// `^`, `<<` and `>>`. All seven share one tier, so `2 + 3 << 1`
    /// folds as `(2 + 3) << 1`.
    ///
    /// Grammar: `expr := term (("+" | "-" | "&" | "|" | "^" | "<<" | ">>") term)*`
    ///
    /// # Returns
    /// An `Ast::BinaryOp` tree combining term-level nodes.
    pub(in crate::interpreter::parser) fn expr(&mut self) -> ParseResult<Ast> {
        let mut node = self.term()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && matches!(op,
                           BinaryOperator::Add
                           | BinaryOperator::Sub
                           | BinaryOperator::BitAnd
                           | BinaryOperator::BitOr
                           | BinaryOperator::BitXor
                           | BinaryOperator::ShiftLeft
                           | BinaryOperator::ShiftRight)
            {
                let position = self.position;
                self.advance()?;
                let right = self.term()?;
                node = Ast::BinaryOp { left: Box::new(node),
                                       op,
                                       right: Box::new(right),
                                       position };
                continue;
            }
            break;
        }
        Ok(node)
    }

    /// Parses the multiplicative tier.
    ///
    /// Handles left-associative operators: `*`, `/` and `%`.
    ///
    /// Grammar: `term := power (("*" | "/" | "%") power)*`
    ///
    /// # Returns
    /// A binary expression tree combining power-level nodes.
    pub(in crate::interpreter::parser) fn term(&mut self) -> ParseResult<Ast> {
        let mut node = self.power()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && matches!(op,
                           BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
            {
                let position = self.position;
                self.advance()?;
                let right = self.power()?;
                node = Ast::BinaryOp { left: Box::new(node),
                                       op,
                                       right: Box::new(right),
                                       position };
                continue;
            }
            break;
        }
        Ok(node)
    }

    /// Parses the exponentiation tier.
    ///
    /// Exponentiation is left-associative in this language: `5 ** 2 ** 2`
    /// folds as `(5 ** 2) ** 2 = 625`, not the conventional right fold.
    ///
    /// Grammar: `power := factor ("**" factor)*`
    ///
    /// # Returns
    /// An exponentiation expression tree over factor-level nodes.
    pub(in crate::interpreter::parser) fn power(&mut self) -> ParseResult<Ast> {
        let mut node = self.factor()?;
        while self.current == Token::DoubleStar {
            let position = self.position;
            self.advance()?;
            let right = self.factor()?;
            node = Ast::BinaryOp { left: Box::new(node),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   position };
        }
        Ok(node)
    }
}

/// Maps an operator token to its binary operator, or `None` for any token
/// that is not a binary operator.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        Token::ShiftRight => Some(BinaryOperator::ShiftRight),
        _ => None,
    }
}
