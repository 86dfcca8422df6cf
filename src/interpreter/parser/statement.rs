use crate::{
    ast::Ast,
    error::{Error, ParseError},
    interpreter::{lexer::Token, parser::core::{ParseResult, Parser}},
};

impl Parser<'_> {
    /// Parses a compound statement: a brace-delimited block.
    ///
    /// Grammar: `compound_statement := "{" statement_list "}"`
    ///
    /// # Returns
    /// An `Ast::Compound` wrapping the block's statements in source order.
    pub(in crate::interpreter::parser) fn compound_statement(&mut self) -> ParseResult<Ast> {
        self.eat(&Token::LBrace)?;
        let statements = self.statement_list()?;
        self.eat(&Token::RBrace)?;
        Ok(Ast::Compound { statements })
    }

    /// Parses one or more statements separated by semicolons.
    ///
    /// A statement that is itself a compound (a nested block) takes no
    /// separating semicolon on either side; the list simply continues
    /// after its closing brace.
    ///
    /// Grammar: `statement_list := statement (";" statement)*`
    ///
    /// # Returns
    /// The statements in source order.
    fn statement_list(&mut self) -> ParseResult<Vec<Ast>> {
        let mut statements = vec![self.statement()?];
        loop {
            // A nested block carries no separating semicolon; every other
            // statement continues the list only across one.
            if !matches!(statements.last(), Some(Ast::Compound { .. })) {
                if self.current == Token::Semicolon {
                    self.eat(&Token::Semicolon)?;
                } else {
                    break;
                }
            }
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := compound_statement
    ///                | assignment_statement
    ///                | empty
    /// ```
    ///
    /// The empty alternative applies only at the end of a block, where the
    /// lookahead is `BLOCK_END`; it produces an `Ast::NoOp`. A statement
    /// beginning with any other token is a "void expression" error — bare
    /// expressions are not legal at statement level.
    fn statement(&mut self) -> ParseResult<Ast> {
        match &self.current {
            Token::LBrace => self.compound_statement(),
            Token::Identifier(_) => self.assignment_statement(),
            Token::RBrace => Ok(Ast::NoOp),
            _ => Err(Error::Parse(ParseError::VoidExpression { found:    self.current
                                                                              .kind_name()
                                                                              .to_string(),
                                                               location: self.location(), })),
        }
    }

    /// Parses an assignment statement.
    ///
    /// Grammar: `assignment_statement := variable "=" expr`
    ///
    /// # Returns
    /// An `Ast::Assign` binding the variable name to the right-hand
    /// expression.
    fn assignment_statement(&mut self) -> ParseResult<Ast> {
        let (name, position) = self.identifier()?;
        self.eat(&Token::Equals)?;
        let value = self.expr()?;
        Ok(Ast::Assign { name,
                         value: Box::new(value),
                         position })
    }
}
