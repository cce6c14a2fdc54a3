// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical and syntactic analysis for MicroJava source code.
//!
//! This module contains the scanner, the parser, and the token definitions.
//!
//! # Lexical Analysis
//!
//! The [`Scanner`] converts a character stream into a stream of [`Token`]s.
//! Each token carries its source line and column and, for literals, a typed
//! [`TokenValue`] payload.
//!
//! ```
//! use microjava_core::source_analysis::{scan, TokenKind};
//!
//! let tokens = scan("x = 1");
//! assert_eq!(tokens.len(), 3); // x, =, 1 (EndOfInput excluded)
//! assert_eq!(tokens[0].kind(), TokenKind::Identifier);
//! ```
//!
//! # Parsing
//!
//! The [`Parser`] pulls tokens from a scanner one at a time and drives a
//! predictive recursive descent derivation of the MicroJava grammar. It
//! produces no syntax tree; its result is a [`ParseReport`] with the error
//! count and the collected diagnostics.
//!
//! ```
//! use microjava_core::source_analysis::parse_source;
//!
//! let report = parse_source("program P { }");
//! assert_eq!(report.errors, 0);
//! ```
//!
//! # Error Handling
//!
//! Both phases use error recovery: lexical errors are reported and replaced
//! by [`TokenKind::None`] sentinel tokens, and syntax errors synchronize at
//! statement boundaries, so an invalid program still yields a complete
//! diagnostic list rather than stopping at the first problem. Diagnostics
//! that follow too closely after a reported one are suppressed to avoid
//! cascades caused by a single root error.

mod error;
mod parser;
mod scanner;
mod source;
mod token;


pub use error::{Diagnostic, DiagnosticCategory, LexError, LexErrorKind};
pub use parser::{ParseReport, Parser, parse, parse_source};
pub use scanner::{Scanner, scan, scan_with_eof};
pub use source::{CharSource, ReadOutcome, ReaderSource};
pub use token::{Token, TokenKind, TokenValue, keyword_kind};
