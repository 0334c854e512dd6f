//! Statement, block, and program parsing.

use monkey_ir::{BlockStatement, LetStatement, Program, ReturnStatement, Statement, TokenKind};

use super::expr::Precedence;
use crate::Parser;

impl Parser<'_> {
    /// Parse statements until end of input.
    ///
    /// Statements that fail to parse are dropped; their errors stay
    /// recorded on the parser.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.cursor.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.cursor.advance();
        }
        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> ;?`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let start = self.cursor.current_span();

        self.expect_peek(TokenKind::Ident)?;
        let name = self.parse_identifier_node();

        self.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
        Some(LetStatement {
            name,
            value,
            span: self.span_from(start),
        })
    }

    /// `return <expr>? ;?`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let start = self.cursor.current_span();

        let value = match self.cursor.peek_kind() {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => {
                self.cursor.advance();
                Some(self.parse_expression(Precedence::Lowest)?)
            }
        };

        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
        Some(ReturnStatement {
            value,
            span: self.span_from(start),
        })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
        Some(Statement::Expression(expr))
    }

    /// `{ <statement>* }`, starting on `{`.
    ///
    /// Stops at `}` or end of input; a missing `}` is not reported.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let start = self.cursor.current_span();
        let mut statements = Vec::new();
        self.cursor.advance();

        while !self.cursor.current_is(TokenKind::RBrace) && !self.cursor.current_is(TokenKind::Eof)
        {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.cursor.advance();
        }

        BlockStatement {
            statements,
            span: self.span_from(start),
        }
    }
}
