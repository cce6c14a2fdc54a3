// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for MicroJava source code.
//!
//! This module converts a character stream into [`Token`]s. The scanner is
//! hand-written, reads with a single character of lookahead, and applies
//! maximal munch: `<=` is one token, never `<` followed by `=`.
//!
//! # Design Principles
//!
//! - **Error recovery**: never stop on malformed input; report a
//!   [`LexError`] and emit a [`TokenKind::None`] sentinel token instead
//! - **Total output**: every input, valid or not, yields a finite token
//!   stream terminated by [`TokenKind::EndOfInput`]
//! - **Forward progress**: every call consumes at least one character
//!   until the end of input is reached
//!
//! # Example
//!
//! ```
//! use microjava_core::source_analysis::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_source("while (x < 10)");
//! assert_eq!(scanner.next_token().kind(), TokenKind::While);
//! assert_eq!(scanner.next_token().kind(), TokenKind::LeftParen);
//! ```

use ecow::EcoString;

use super::error::{LexError, LexErrorKind};
use super::source::{CharSource, ReadOutcome};
use super::token::{Token, TokenKind, TokenValue, keyword_kind};

/// Maximum number of characters accumulated for one lexeme.
///
/// Longer lexemes are silently truncated: the accumulation loop stops at
/// the cap and the remaining characters start the next token.
const MAX_LEXEME_LEN: usize = 64;

/// Payload substituted for character literals that could not be read.
const ERROR_MARKER: &str = "\u{FFFD}";

/// A scanner that tokenizes MicroJava source code.
///
/// The scanner owns all lexical state: one buffered lookahead character,
/// the line/column/offset counters, and the lexical diagnostics reported
/// so far. It implements [`Iterator`] for easy consumption; the iterator
/// ends before the `EndOfInput` token, while [`Scanner::next_token`] can be
/// called indefinitely and keeps returning `EndOfInput` once the source is
/// exhausted.
pub struct Scanner<S> {
    /// The character stream being scanned.
    source: S,
    /// One-character lookahead; `None` once the source is exhausted.
    ch: Option<char>,
    /// 1-based line of the lookahead character.
    line: u32,
    /// 0-based column of the lookahead character.
    column: u32,
    /// Characters pulled from the source so far.
    offset: usize,
    /// Lexical errors reported so far; drained by the caller.
    diagnostics: Vec<LexError>,
}

impl<'a> Scanner<std::str::Chars<'a>> {
    /// Creates a scanner over an in-memory source string.
    #[must_use]
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner over the given character source.
    ///
    /// Immediately pulls one character so the lookahead invariant holds
    /// before the first [`Scanner::next_token`] call.
    #[must_use]
    pub fn new(source: S) -> Self {
        let mut scanner = Self {
            source,
            ch: None,
            line: 1,
            column: 0,
            offset: 0,
            diagnostics: Vec::new(),
        };
        scanner.advance();
        scanner
    }

    /// Returns the current 1-based line.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current 0-based column.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the number of characters pulled from the source so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the lexical errors reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[LexError] {
        &self.diagnostics
    }

    /// Removes and returns the lexical errors reported so far.
    pub fn take_diagnostics(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Pulls the next character into the lookahead.
    ///
    /// A failed read is treated as end of stream; the scanner never raises
    /// I/O errors of its own.
    fn advance(&mut self) {
        self.column += 1;
        self.offset += 1;
        self.ch = match self.source.next_char() {
            ReadOutcome::Char(c) => {
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                }
                Some(c)
            }
            ReadOutcome::EndOfStream | ReadOutcome::ReadError => None,
        };
    }

    /// Records a lexical error at the current position.
    fn report(&mut self, kind: LexErrorKind) {
        self.diagnostics
            .push(LexError::new(kind, self.line, self.column));
    }

    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.line, self.column)
    }

    fn token_with_value(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::with_value(kind, self.line, self.column, value)
    }

    /// Consumes the lookahead and returns a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.advance();
        self.token(kind)
    }

    /// Consumes the lookahead, then returns `combined` if the next
    /// character is `=` (consuming it too) and `plain` otherwise.
    fn with_optional_eq(&mut self, combined: TokenKind, plain: TokenKind) -> Token {
        self.advance();
        if self.ch == Some('=') {
            self.advance();
            self.token(combined)
        } else {
            self.token(plain)
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace (every character at or below U+0020) and `//` line
    /// comments are invisible: scanning continues until a real token or the
    /// end of input is found. After the end of input, every call returns
    /// another `EndOfInput` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            while matches!(self.ch, Some(c) if c <= ' ') {
                self.advance();
            }

            let Some(c) = self.ch else {
                return self.token(TokenKind::EndOfInput);
            };

            match c {
                ';' => return self.single(TokenKind::Semicolon),
                '.' => return self.single(TokenKind::Period),
                ',' => return self.single(TokenKind::Comma),
                '+' => return self.single(TokenKind::Plus),
                '-' => return self.single(TokenKind::Minus),
                '*' => return self.single(TokenKind::Times),
                '%' => return self.single(TokenKind::Rem),
                '(' => return self.single(TokenKind::LeftParen),
                ')' => return self.single(TokenKind::RightParen),
                '[' => return self.single(TokenKind::LeftBracket),
                ']' => return self.single(TokenKind::RightBracket),
                '{' => return self.single(TokenKind::LeftBrace),
                '}' => return self.single(TokenKind::RightBrace),
                '=' => return self.with_optional_eq(TokenKind::Equal, TokenKind::Assign),
                '<' => return self.with_optional_eq(TokenKind::LessEqual, TokenKind::Less),
                '>' => return self.with_optional_eq(TokenKind::GreaterEqual, TokenKind::Greater),
                // A bare `!` has no single-character meaning
                '!' => return self.with_optional_eq(TokenKind::NotEqual, TokenKind::None),
                '/' => {
                    self.advance();
                    if self.ch == Some('/') {
                        // Line comment: discard to end of line and rescan
                        while !matches!(self.ch, Some('\n') | None) {
                            self.advance();
                        }
                        continue;
                    }
                    return self.token(TokenKind::Slash);
                }
                '\'' => return self.read_character(),
                c if c.is_ascii_digit() => return self.read_number(),
                c if c.is_ascii_alphabetic() => return self.read_name(),
                c => {
                    self.advance();
                    self.report(LexErrorKind::UnexpectedCharacter(c));
                    return self.token(TokenKind::None);
                }
            }
        }
    }

    /// Reads an identifier or keyword.
    ///
    /// The lookahead holds the first letter. Accumulates letters and digits
    /// up to [`MAX_LEXEME_LEN`], then looks the spelling up in the keyword
    /// table.
    fn read_name(&mut self) -> Token {
        let mut text = EcoString::new();
        while text.len() < MAX_LEXEME_LEN {
            let Some(c) = self.ch else { break };
            if !c.is_ascii_alphanumeric() {
                break;
            }
            text.push(c);
            self.advance();
        }

        match keyword_kind(&text) {
            Some(kind) => self.token(kind),
            None => self.token_with_value(TokenKind::Identifier, TokenValue::Text(text)),
        }
    }

    /// Reads a decimal number literal.
    ///
    /// A digit sequence outside the `i32` range is a lexical error: it is
    /// reported and the sentinel token is returned in place of a number.
    fn read_number(&mut self) -> Token {
        let mut text = EcoString::new();
        while text.len() < MAX_LEXEME_LEN {
            let Some(c) = self.ch else { break };
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.advance();
        }

        match text.parse::<i32>() {
            Ok(value) => self.token_with_value(TokenKind::Number, TokenValue::Integer(value)),
            Err(_) => {
                self.report(LexErrorKind::NumberOverflow(text));
                self.token(TokenKind::None)
            }
        }
    }

    /// Reads a character literal.
    ///
    /// The lookahead holds the opening quote. Content is accumulated until
    /// the closing quote, end of line, or end of input; a backslash escapes
    /// the character after it, so `'\''` reads as one literal. The
    /// accumulated character count decides the classification:
    ///
    /// - 0: empty literal (reported, empty payload)
    /// - 1: the character itself
    /// - 2: an escape sequence `\n`, `\t`, `\r`, or `\'`; anything else
    ///   is invalid
    /// - more: invalid
    ///
    /// Invalid and unterminated literals still produce a `Character` token,
    /// carrying [`ERROR_MARKER`] as payload.
    fn read_character(&mut self) -> Token {
        self.advance(); // opening quote

        let mut text = EcoString::new();
        while text.len() < MAX_LEXEME_LEN {
            match self.ch {
                None | Some('\'' | '\n' | '\r') => break,
                // A backslash always takes the following character with it,
                // so an escaped quote does not end the literal
                Some('\\') => {
                    text.push('\\');
                    self.advance();
                    match self.ch {
                        None | Some('\n' | '\r') => break,
                        Some(c) => {
                            text.push(c);
                            self.advance();
                        }
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }

        if self.ch != Some('\'') {
            self.report(LexErrorKind::UnterminatedCharacter);
            return self.token_with_value(
                TokenKind::Character,
                TokenValue::Text(ERROR_MARKER.into()),
            );
        }
        self.advance(); // closing quote

        let (first, second, third) = {
            let mut chars = text.chars();
            (chars.next(), chars.next(), chars.next())
        };
        let content = match (first, second, third) {
            (None, _, _) => {
                self.report(LexErrorKind::EmptyCharacter);
                EcoString::new()
            }
            (Some(_), None, _) => text,
            (Some('\\'), Some('n'), None) => "\n".into(),
            (Some('\\'), Some('t'), None) => "\t".into(),
            (Some('\\'), Some('r'), None) => "\r".into(),
            (Some('\\'), Some('\''), None) => "'".into(),
            _ => {
                self.report(LexErrorKind::InvalidCharacterLiteral(text));
                ERROR_MARKER.into()
            }
        };

        self.token_with_value(TokenKind::Character, TokenValue::Text(content))
    }
}

impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Token;

    /// Yields tokens up to, but excluding, `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind() == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans a source string into a vector of tokens, excluding `EndOfInput`.
///
/// Lexical errors are dropped; use a [`Scanner`] directly when diagnostics
/// matter.
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::from_source(source).collect()
}

/// Scans a source string into a vector of tokens, including the final
/// `EndOfInput`.
#[must_use]
pub fn scan_with_eof(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::from_source(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind() == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
