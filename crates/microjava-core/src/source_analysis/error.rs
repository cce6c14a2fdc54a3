// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error and diagnostic types for the MicroJava front end.
//!
//! Lexical errors are typed ([`LexError`]) and integrate with [`miette`].
//! Both lexical and syntactic problems ultimately surface as [`Diagnostic`]
//! values, whose `Display` output is the stable
//! `<context>: <line>, <column>: <message>` reporting line.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use thiserror::Error;

/// A lexical error and the scanner position where it was reported.
///
/// The scanner uses error recovery, so lexical errors never stop
/// tokenization: the offending input is replaced by a sentinel token and
/// the error is recorded for the caller to drain.
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// 1-based source line.
    pub line: u32,
    /// 0-based source column.
    pub column: u32,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character literal with nothing between the quotes: `''`.
    #[error("empty character literal")]
    EmptyCharacter,

    /// A character literal missing its closing quote.
    #[error("unterminated character literal")]
    UnterminatedCharacter,

    /// A character literal that is neither a single character nor a
    /// recognized escape sequence.
    #[error("invalid character literal '{0}'")]
    InvalidCharacterLiteral(EcoString),

    /// A number literal outside the 32-bit signed integer range.
    #[error("number '{0}' out of range")]
    NumberOverflow(EcoString),

    /// A character with no meaning in the language.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// Which analysis phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Reported by the scanner.
    Lexical,
    /// Reported by the parser.
    Syntax,
}

impl std::fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => f.write_str("lexical error"),
            Self::Syntax => f.write_str("syntax error"),
        }
    }
}

/// A diagnostic message with its source position.
///
/// The `(line, column, category)` triple is stable; the message wording is
/// informative only.
///
/// # Examples
///
/// ```
/// use microjava_core::source_analysis::Diagnostic;
///
/// let diagnostic = Diagnostic::syntax("';' expected, found '}'", 4, 1);
/// assert_eq!(diagnostic.to_string(), "syntax error: 4, 1: ';' expected, found '}'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The producing phase.
    pub category: DiagnosticCategory,
    /// 1-based source line.
    pub line: u32,
    /// 0-based source column.
    pub column: u32,
    /// The error message.
    pub message: EcoString,
}

impl Diagnostic {
    /// Creates a lexical diagnostic.
    #[must_use]
    pub fn lexical(message: impl Into<EcoString>, line: u32, column: u32) -> Self {
        Self {
            category: DiagnosticCategory::Lexical,
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates a syntax diagnostic.
    #[must_use]
    pub fn syntax(message: impl Into<EcoString>, line: u32, column: u32) -> Self {
        Self {
            category: DiagnosticCategory::Syntax,
            line,
            column,
            message: message.into(),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Self::lexical(error.to_string(), error.line, error.column)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}",
            self.category, self.line, self.column, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let error = LexError::new(LexErrorKind::UnexpectedCharacter('#'), 1, 4);
        assert_eq!(error.to_string(), "unexpected character '#'");

        let error = LexError::new(LexErrorKind::NumberOverflow("2147483648".into()), 2, 12);
        assert_eq!(error.to_string(), "number '2147483648' out of range");
    }

    #[test]
    fn lexical_diagnostic_from_error() {
        let error = LexError::new(LexErrorKind::EmptyCharacter, 3, 7);
        let diagnostic = Diagnostic::from(error);
        assert_eq!(diagnostic.category, DiagnosticCategory::Lexical);
        assert_eq!(diagnostic.line, 3);
        assert_eq!(diagnostic.column, 7);
        assert_eq!(
            diagnostic.to_string(),
            "lexical error: 3, 7: empty character literal"
        );
    }

    #[test]
    fn syntax_diagnostic_display() {
        let diagnostic = Diagnostic::syntax("invalid start of statement", 10, 0);
        assert_eq!(
            diagnostic.to_string(),
            "syntax error: 10, 0: invalid start of statement"
        );
    }
}
