// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Declaration parsing for MicroJava.
//!
//! Covers the program head and everything that may precede the method
//! block: constant, class, and variable declarations, method signatures,
//! types, and formal parameter lists.

use super::Parser;
use crate::source_analysis::{CharSource, TokenKind};

impl<S: CharSource> Parser<S> {
    /// Parses a `Program`.
    ///
    /// ```text
    /// Program = "program" ident {ConstDecl | ClassDecl | VarDecl}
    ///           "{" {MethodDecl} "}"
    /// ```
    pub(super) fn parse_program(&mut self) {
        self.check(TokenKind::Program);
        self.check(TokenKind::Identifier);

        loop {
            match self.sym {
                TokenKind::Final => self.parse_const_decl(),
                TokenKind::Class => self.parse_class_decl(),
                TokenKind::Identifier => self.parse_var_decl(),
                _ => break,
            }
        }

        self.check(TokenKind::LeftBrace);

        while matches!(self.sym, TokenKind::Identifier | TokenKind::Void) {
            self.parse_method_decl();
        }

        self.check(TokenKind::RightBrace);
    }

    /// Parses a `ConstDecl`.
    ///
    /// ```text
    /// ConstDecl = "final" Type ident "=" (number | charConst) ";"
    /// ```
    fn parse_const_decl(&mut self) {
        self.check(TokenKind::Final);
        self.parse_type();
        self.check(TokenKind::Identifier);
        self.check(TokenKind::Assign);

        if !matches!(self.sym, TokenKind::Number | TokenKind::Character) {
            self.error("number or character constant expected");
        }
        self.scan();

        self.check(TokenKind::Semicolon);
    }

    /// Parses a `ClassDecl`.
    ///
    /// ```text
    /// ClassDecl = "class" ident "{" {VarDecl} "}"
    /// ```
    fn parse_class_decl(&mut self) {
        self.check(TokenKind::Class);
        self.check(TokenKind::Identifier);
        self.check(TokenKind::LeftBrace);

        while self.sym == TokenKind::Identifier {
            self.parse_var_decl();
        }

        self.check(TokenKind::RightBrace);
    }

    /// Parses a `VarDecl`.
    ///
    /// ```text
    /// VarDecl = Type ident {"," ident} ";"
    /// ```
    pub(super) fn parse_var_decl(&mut self) {
        self.parse_type();
        self.check(TokenKind::Identifier);

        while self.sym == TokenKind::Comma {
            self.check(TokenKind::Comma);
            self.check(TokenKind::Identifier);
        }

        self.check(TokenKind::Semicolon);
    }

    /// Parses a `MethodDecl`.
    ///
    /// ```text
    /// MethodDecl = (Type | "void") ident "(" [FormPars] ")" {VarDecl} Block
    /// ```
    fn parse_method_decl(&mut self) {
        if self.sym == TokenKind::Identifier {
            self.parse_type();
        } else {
            self.check(TokenKind::Void);
        }

        self.check(TokenKind::Identifier);
        self.check(TokenKind::LeftParen);

        if self.sym == TokenKind::Identifier {
            self.parse_form_pars();
        }

        self.check(TokenKind::RightParen);

        while self.sym == TokenKind::Identifier {
            self.parse_var_decl();
        }

        self.parse_block();
    }

    /// Parses a `Type`.
    ///
    /// ```text
    /// Type = ident ["[" "]"]
    /// ```
    fn parse_type(&mut self) {
        self.check(TokenKind::Identifier);

        if self.sym == TokenKind::LeftBracket {
            self.check(TokenKind::LeftBracket);
            self.check(TokenKind::RightBracket);
        }
    }

    /// Parses a `FormPars`.
    ///
    /// ```text
    /// FormPars = Type ident {"," Type ident}
    /// ```
    fn parse_form_pars(&mut self) {
        self.parse_type();
        self.check(TokenKind::Identifier);

        while self.sym == TokenKind::Comma {
            self.check(TokenKind::Comma);
            self.parse_type();
            self.check(TokenKind::Identifier);
        }
    }
}
