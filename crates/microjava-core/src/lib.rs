// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! MicroJava compiler front end.
//!
//! This crate contains the front end of a compiler for MicroJava, a small
//! Pascal/Java-like teaching language:
//! - Lexical analysis (tokenization)
//! - Syntactic validation (recursive descent parsing with error recovery)
//!
//! The parser performs pure grammar validation: it reports diagnostics and
//! an error count, but builds no syntax tree. Semantic analysis and code
//! generation are out of scope.

pub mod source_analysis;
