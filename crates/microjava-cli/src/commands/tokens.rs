// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token-stream dump driver.
//!
//! Prints one line per token, including the final `EndOfInput` marker.
//! Lexical diagnostics go to stderr as they are produced, interleaved
//! with the token lines on stdout.

use std::fs::File;

use microjava_core::source_analysis::{Diagnostic, ReaderSource, Scanner, TokenKind};
use miette::{Context, IntoDiagnostic, Result};
use tracing::debug;

/// Scans `path` and prints its token stream.
pub fn run(path: &str) -> Result<()> {
    let file = File::open(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot open input file '{path}'"))?;

    debug!(path = %path, "scanning");
    let mut scanner = Scanner::new(ReaderSource::new(file));

    loop {
        let token = scanner.next_token();
        for error in scanner.take_diagnostics() {
            eprintln!("{}", Diagnostic::from(error));
        }
        println!("{token}");
        if token.kind() == TokenKind::EndOfInput {
            return Ok(());
        }
    }
}
