// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statement parsing for MicroJava.
//!
//! This is where panic-mode recovery lives: a statement that does not
//! begin with a statement starter is reported once, and the parser skips
//! to the next statement boundary before continuing.

use super::{Parser, starts_expression, starts_statement};
use crate::source_analysis::{CharSource, TokenKind};

impl<S: CharSource> Parser<S> {
    /// Parses a `Block`.
    ///
    /// ```text
    /// Block = "{" {Statement} "}"
    /// ```
    pub(super) fn parse_block(&mut self) {
        self.check(TokenKind::LeftBrace);

        while !matches!(self.sym, TokenKind::RightBrace | TokenKind::EndOfInput) {
            self.parse_statement();
        }

        self.check(TokenKind::RightBrace);
    }

    /// Parses a `Statement`.
    ///
    /// ```text
    /// Statement = SimpleStatement | IfStatement | WhileStatement
    ///           | ReturnStatement | ReadStatement | PrintStatement
    ///           | Block | ";"
    /// ```
    ///
    /// A lookahead outside the statement starter set triggers panic-mode
    /// recovery before dispatching on whatever follows.
    fn parse_statement(&mut self) {
        if !starts_statement(self.sym) {
            self.error("invalid start of statement");
            self.recover_statement();
        }

        match self.sym {
            TokenKind::Identifier => self.parse_simple_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Read => self.parse_read_statement(),
            TokenKind::Print => self.parse_print_statement(),
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::Semicolon => self.check(TokenKind::Semicolon),
            _ => self.error(format!("illegal start of statement: {}", self.sym)),
        }
    }

    /// Parses a `SimpleStatement`.
    ///
    /// ```text
    /// SimpleStatement = Designator ("=" Expr | ActPars) ";"
    /// ```
    fn parse_simple_statement(&mut self) {
        self.parse_designator();

        if self.sym == TokenKind::Assign {
            self.check(TokenKind::Assign);
            self.parse_expr();
        } else if self.sym == TokenKind::LeftParen {
            self.parse_act_pars();
        } else {
            self.error("invalid assignment or call");
        }

        self.check(TokenKind::Semicolon);
    }

    /// Parses an `IfStatement`.
    ///
    /// ```text
    /// IfStatement = "if" "(" Condition ")" Statement ["else" Statement]
    /// ```
    fn parse_if_statement(&mut self) {
        self.check(TokenKind::If);
        self.check(TokenKind::LeftParen);
        self.parse_condition();
        self.check(TokenKind::RightParen);
        self.parse_statement();

        if self.sym == TokenKind::Else {
            self.check(TokenKind::Else);
            self.parse_statement();
        }
    }

    /// Parses a `WhileStatement`.
    ///
    /// ```text
    /// WhileStatement = "while" "(" Condition ")" Statement
    /// ```
    fn parse_while_statement(&mut self) {
        self.check(TokenKind::While);
        self.check(TokenKind::LeftParen);
        self.parse_condition();
        self.check(TokenKind::RightParen);
        self.parse_statement();
    }

    /// Parses a `ReturnStatement`.
    ///
    /// ```text
    /// ReturnStatement = "return" [Expr] ";"
    /// ```
    fn parse_return_statement(&mut self) {
        self.check(TokenKind::Return);

        if starts_expression(self.sym) {
            self.parse_expr();
        }

        self.check(TokenKind::Semicolon);
    }

    /// Parses a `ReadStatement`.
    ///
    /// ```text
    /// ReadStatement = "read" "(" Designator ")" ";"
    /// ```
    fn parse_read_statement(&mut self) {
        self.check(TokenKind::Read);
        self.check(TokenKind::LeftParen);
        self.parse_designator();
        self.check(TokenKind::RightParen);
        self.check(TokenKind::Semicolon);
    }

    /// Parses a `PrintStatement`.
    ///
    /// ```text
    /// PrintStatement = "print" "(" Expr ["," number] ")" ";"
    /// ```
    fn parse_print_statement(&mut self) {
        self.check(TokenKind::Print);
        self.check(TokenKind::LeftParen);
        self.parse_expr();

        if self.sym == TokenKind::Comma {
            self.check(TokenKind::Comma);
            self.check(TokenKind::Number);
        }

        self.check(TokenKind::RightParen);
        self.check(TokenKind::Semicolon);
    }
}
