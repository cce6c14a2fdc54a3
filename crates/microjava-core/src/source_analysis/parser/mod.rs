// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for MicroJava source code.
//!
//! The parser pulls tokens from a [`Scanner`] with a single token of
//! lookahead and validates them against the MicroJava grammar. It builds no
//! syntax tree: its output is a [`ParseReport`] carrying the error count
//! and the collected diagnostics.
//!
//! # Design Philosophy
//!
//! - **Error recovery is mandatory** - the parser MUST consume any input
//!   to the end without panicking or looping
//! - **Multiple errors** - report all errors, don't stop at the first
//! - **Cascade suppression** - a diagnostic is only reported when at least
//!   [`MIN_ERROR_DISTANCE`] tokens matched since the previous one, so one
//!   root error doesn't produce dozens of follow-up messages
//! - **Synchronization points** - recovery skips to statement boundaries
//!
//! # Grammar
//!
//! ```text
//! Program      = "program" ident {ConstDecl|ClassDecl|VarDecl} "{" {MethodDecl} "}"
//! ConstDecl    = "final" Type ident "=" (number|charConst) ";"
//! ClassDecl    = "class" ident "{" {VarDecl} "}"
//! VarDecl      = Type ident {"," ident} ";"
//! MethodDecl   = (Type|"void") ident "(" [FormPars] ")" {VarDecl} Block
//! Type         = ident ["[" "]"]
//! FormPars     = Type ident {"," Type ident}
//! Block        = "{" {Statement} "}"
//! Statement    = SimpleStatement | IfStatement | WhileStatement
//!              | ReturnStatement | ReadStatement | PrintStatement
//!              | Block | ";"
//! SimpleStatement = Designator ("=" Expr | ActPars) ";"
//! IfStatement  = "if" "(" Condition ")" Statement ["else" Statement]
//! WhileStatement = "while" "(" Condition ")" Statement
//! ReturnStatement = "return" [Expr] ";"
//! ReadStatement = "read" "(" Designator ")" ";"
//! PrintStatement = "print" "(" Expr ["," number] ")" ";"
//! Condition    = Expr Relop Expr
//! Expr         = ["-"] Term {Addop Term}
//! Term         = Factor {Mulop Factor}
//! Factor       = Designator [ActPars] | number | charConst
//!              | "new" ident ["[" Expr "]"] | "(" Expr ")"
//! Designator   = ident {"." ident | "[" Expr "]"}
//! ActPars      = "(" [Expr {"," Expr}] ")"
//! ```
//!
//! Each nonterminal is one method, dispatching on the cached lookahead
//! kind: a predictive LL(1) parser with no backtracking.
//!
//! # Usage
//!
//! ```
//! use microjava_core::source_analysis::parse_source;
//!
//! let report = parse_source("program P { void main() { x = 1; } }");
//! assert_eq!(report.errors, 0);
//! ```

use ecow::EcoString;

use crate::source_analysis::{CharSource, Diagnostic, Scanner, Token, TokenKind};

mod declarations;
mod expressions;
mod statements;

// Property-based tests
#[cfg(test)]
mod property_tests;

/// Number of tokens that must match after a reported diagnostic before the
/// next diagnostic is shown.
const MIN_ERROR_DISTANCE: u32 = 3;

/// The result of one full parse.
///
/// `errors` counts the *reported* syntax diagnostics (cascade suppression
/// means some diagnostics are swallowed and not counted); `diagnostics`
/// holds every reported lexical and syntactic diagnostic in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Number of reported syntax errors.
    pub errors: usize,
    /// All reported diagnostics, lexical and syntactic, in order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns `true` if any syntax error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// The parser state.
///
/// A parser owns its scanner exclusively and is single-use: [`Parser::parse`]
/// consumes it, so a finished parse cannot be restarted by construction.
pub struct Parser<S> {
    /// The scanner supplying tokens.
    scanner: Scanner<S>,
    /// The most recently consumed token.
    current: Option<Token>,
    /// One-token lookahead driving every parsing decision.
    lookahead: Token,
    /// Kind of `lookahead`, cached for cheap repeated comparisons.
    sym: TokenKind,
    /// Reported syntax errors.
    errors: usize,
    /// Tokens matched since the last reported diagnostic.
    err_dist: u32,
    /// Accumulated diagnostics, lexical and syntactic.
    diagnostics: Vec<Diagnostic>,
}

impl<S: CharSource> Parser<S> {
    /// Creates a parser over the given scanner, pulling the first token.
    #[must_use]
    pub fn new(mut scanner: Scanner<S>) -> Self {
        let lookahead = scanner.next_token();
        let sym = lookahead.kind();
        let mut parser = Self {
            scanner,
            current: None,
            lookahead,
            sym,
            errors: 0,
            err_dist: MIN_ERROR_DISTANCE,
            diagnostics: Vec::new(),
        };
        parser.drain_lexical();
        parser
    }

    /// Performs one full top-down derivation of `Program`.
    ///
    /// Never fails and never loops: every diagnostic is recovered from, and
    /// the whole token stream up to `EndOfInput` is consumed. A trailing
    /// token after the program closes is one final diagnostic.
    #[must_use]
    pub fn parse(mut self) -> ParseReport {
        self.parse_program();

        if self.sym != TokenKind::EndOfInput {
            self.error("end of input found before end of program");
        }

        ParseReport {
            errors: self.errors,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the most recently consumed token, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Consumes the lookahead and pulls the next token from the scanner.
    fn scan(&mut self) {
        let next = self.scanner.next_token();
        self.drain_lexical();
        self.current = Some(std::mem::replace(&mut self.lookahead, next));
        self.sym = self.lookahead.kind();
        self.err_dist += 1;
    }

    /// Moves lexical errors reported by the scanner into the diagnostic
    /// list, keeping lexical and syntactic diagnostics in source order.
    fn drain_lexical(&mut self) {
        for error in self.scanner.take_diagnostics() {
            self.diagnostics.push(error.into());
        }
    }

    /// Consumes the lookahead if it has the expected kind, else reports an
    /// error without advancing.
    fn check(&mut self, expected: TokenKind) {
        if self.sym == expected {
            self.scan();
        } else {
            self.error(format!("{expected} expected, found {}", self.sym));
        }
    }

    // ========================================================================
    // Error Handling & Recovery
    // ========================================================================

    /// Reports a syntax error at the lookahead position.
    ///
    /// The diagnostic is suppressed (but still resets the error distance)
    /// when fewer than [`MIN_ERROR_DISTANCE`] tokens matched since the last
    /// reported one.
    fn error(&mut self, message: impl Into<EcoString>) {
        if self.err_dist >= MIN_ERROR_DISTANCE {
            self.diagnostics.push(Diagnostic::syntax(
                message,
                self.lookahead.line(),
                self.lookahead.column(),
            ));
            self.errors += 1;
        }
        self.err_dist = 0;
    }

    /// Discards tokens until a statement boundary.
    ///
    /// Stops at a semicolon (consumed), a right brace (left for the
    /// enclosing block), or the end of input. Resets the error distance so
    /// the next diagnostic after recovery is not reported immediately.
    fn recover_statement(&mut self) {
        while !matches!(
            self.sym,
            TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::EndOfInput
        ) {
            self.scan();
        }
        if self.sym == TokenKind::Semicolon {
            self.scan();
        }
        self.err_dist = 0;
    }
}

/// Parses everything the scanner produces and returns the report.
///
/// This is the main entry point for parsing.
#[must_use]
pub fn parse<S: CharSource>(scanner: Scanner<S>) -> ParseReport {
    Parser::new(scanner).parse()
}

/// Parses an in-memory source string.
#[must_use]
pub fn parse_source(source: &str) -> ParseReport {
    parse(Scanner::from_source(source))
}

// ============================================================================
// Lookahead classification
// ============================================================================

/// Returns `true` if a statement may begin with this token.
fn starts_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Return
            | TokenKind::Read
            | TokenKind::Print
            | TokenKind::LeftBrace
            | TokenKind::Semicolon
    )
}

/// Returns `true` if an expression may begin with this token.
fn starts_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Minus
            | TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Character
            | TokenKind::New
            | TokenKind::LeftParen
    )
}

/// Returns `true` for the relational operators of `Condition`.
fn is_relational(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual
    )
}

/// Returns `true` for the addition-level operators of `Expr`.
fn is_addop(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Plus | TokenKind::Minus)
}

/// Returns `true` for the multiplication-level operators of `Term`.
fn is_mulop(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Times | TokenKind::Slash | TokenKind::Rem)
}
