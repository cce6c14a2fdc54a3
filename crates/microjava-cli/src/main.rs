// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! MicroJava command-line interface.
//!
//! This is the main entry point for the `microjava` command. The
//! subcommands are thin drivers over `microjava-core`: they open the
//! source file, run the scanner or parser, and print the results.

use clap::{Parser, Subcommand};
use miette::Result;

mod commands;

/// MicroJava: scanner and parser for a small teaching language
#[derive(Debug, Parser)]
#[command(name = "microjava")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan a source file and print its token stream
    Tokens {
        /// Source file to scan
        file: String,
    },

    /// Parse a source file and report syntax errors
    Check {
        /// Source file to parse
        file: String,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Tokens { file } => commands::tokens::run(&file),
        Command::Check { file } => commands::check::run(&file),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
