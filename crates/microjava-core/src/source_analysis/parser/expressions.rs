// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing for MicroJava.
//!
//! Expressions have two precedence levels (addition over multiplication)
//! plus an optional leading minus; conditions are a single relational
//! comparison between two expressions.

use super::{Parser, is_addop, is_mulop, is_relational, starts_expression};
use crate::source_analysis::{CharSource, TokenKind};

impl<S: CharSource> Parser<S> {
    /// Parses a `Condition`.
    ///
    /// ```text
    /// Condition = Expr Relop Expr
    /// ```
    pub(super) fn parse_condition(&mut self) {
        self.parse_expr();

        if is_relational(self.sym) {
            self.scan();
        } else {
            self.error("relational operator expected");
        }

        self.parse_expr();
    }

    /// Parses an `Expr`.
    ///
    /// ```text
    /// Expr = ["-"] Term {Addop Term}
    /// ```
    ///
    /// A lookahead that cannot begin an expression is reported and left in
    /// place for the caller to synchronize on.
    pub(super) fn parse_expr(&mut self) {
        if !starts_expression(self.sym) {
            self.error("invalid expression");
            return;
        }

        if self.sym == TokenKind::Minus {
            self.check(TokenKind::Minus);
        }

        self.parse_term();

        while is_addop(self.sym) {
            self.scan();
            self.parse_term();
        }
    }

    /// Parses a `Term`.
    ///
    /// ```text
    /// Term = Factor {Mulop Factor}
    /// ```
    fn parse_term(&mut self) {
        self.parse_factor();

        while is_mulop(self.sym) {
            self.scan();
            self.parse_factor();
        }
    }

    /// Parses a `Factor`.
    ///
    /// ```text
    /// Factor = Designator [ActPars] | number | charConst
    ///        | "new" ident ["[" Expr "]"] | "(" Expr ")"
    /// ```
    fn parse_factor(&mut self) {
        match self.sym {
            TokenKind::Identifier => {
                self.parse_designator();
                if self.sym == TokenKind::LeftParen {
                    self.parse_act_pars();
                }
            }
            TokenKind::Number => self.check(TokenKind::Number),
            TokenKind::Character => self.check(TokenKind::Character),
            TokenKind::New => {
                self.check(TokenKind::New);
                self.check(TokenKind::Identifier);

                if self.sym == TokenKind::LeftBracket {
                    self.check(TokenKind::LeftBracket);
                    self.parse_expr();
                    self.check(TokenKind::RightBracket);
                }
            }
            TokenKind::LeftParen => {
                self.check(TokenKind::LeftParen);
                self.parse_expr();
                self.check(TokenKind::RightParen);
            }
            // Anything else was already reported by the expression-starter
            // check in `parse_expr`; leave the token for the caller
            _ => {}
        }
    }

    /// Parses a `Designator`.
    ///
    /// ```text
    /// Designator = ident {"." ident | "[" Expr "]"}
    /// ```
    pub(super) fn parse_designator(&mut self) {
        self.check(TokenKind::Identifier);

        loop {
            if self.sym == TokenKind::Period {
                self.check(TokenKind::Period);
                self.check(TokenKind::Identifier);
            } else if self.sym == TokenKind::LeftBracket {
                self.check(TokenKind::LeftBracket);
                self.parse_expr();
                self.check(TokenKind::RightBracket);
            } else {
                break;
            }
        }
    }

    /// Parses an `ActPars`.
    ///
    /// ```text
    /// ActPars = "(" [Expr {"," Expr}] ")"
    /// ```
    pub(super) fn parse_act_pars(&mut self) {
        self.check(TokenKind::LeftParen);

        if starts_expression(self.sym) {
            self.parse_expr();

            while self.sym == TokenKind::Comma {
                self.check(TokenKind::Comma);
                self.parse_expr();
            }
        }

        self.check(TokenKind::RightParen);
    }
}
