// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Syntax check driver.
//!
//! Runs one full parse and prints every diagnostic, followed by the error
//! count summary. A program with errors is still a successful run: the
//! count is the result.

use std::fs::File;

use microjava_core::source_analysis::{Parser, ReaderSource, Scanner};
use miette::{Context, IntoDiagnostic, Result};
use tracing::debug;

/// Parses `path` and reports the diagnostics and error count.
pub fn run(path: &str) -> Result<()> {
    let file = File::open(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot open input file '{path}'"))?;

    debug!(path = %path, "parsing");
    let report = Parser::new(Scanner::new(ReaderSource::new(file))).parse();

    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }
    println!("{} errors detected", report.errors);

    Ok(())
}
