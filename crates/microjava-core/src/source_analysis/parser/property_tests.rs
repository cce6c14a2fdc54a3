// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the MicroJava parser.
//!
//! These tests use `proptest` to verify parser invariants over generated
//! inputs:
//!
//! 1. **Parser never panics** — arbitrary input always produces a report
//! 2. **Error accounting** — the error count equals the number of syntax
//!    diagnostics in the report
//! 3. **Parser is deterministic** — same input, same report
//! 4. **Well-formed programs are clean** — generated valid programs parse
//!    with zero errors

use proptest::prelude::*;

use super::parse_source;
use crate::source_analysis::{DiagnosticCategory, keyword_kind};

// ============================================================================
// Generators
// ============================================================================

/// An identifier that is guaranteed not to collide with a keyword.
fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}".prop_filter("keywords are not identifiers", |name| {
        keyword_kind(name).is_none()
    })
}

/// A single well-formed statement using the given variable name.
fn statement(name: String) -> impl Strategy<Value = String> {
    let options = vec![
        format!("{name} = 1;"),
        format!("{name} = {name} + 2 * 3;"),
        format!("if ({name} < 10) {name} = 0;"),
        format!("while ({name} > 0) {name} = {name} - 1;"),
        format!("read({name});"),
        format!("print({name}, 4);"),
        format!("{name}.next[0] = new Node[8];"),
        ";".to_string(),
    ];
    prop::sample::select(options)
}

/// A well-formed program with a random method body.
fn valid_program() -> impl Strategy<Value = String> {
    (identifier(), identifier())
        .prop_flat_map(|(program_name, var_name)| {
            (
                Just(program_name),
                Just(var_name.clone()),
                prop::collection::vec(statement(var_name), 0..6),
            )
        })
        .prop_map(|(program_name, var_name, statements)| {
            format!(
                "program {program_name} int {var_name}; {{ void main() {{ {} }} }}",
                statements.join(" ")
            )
        })
}

// ============================================================================
// Property tests
// ============================================================================

/// Default is 256 cases; override via `PROPTEST_CASES` env var.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: The parser never panics and always terminates on
    /// arbitrary string input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,400}") {
        let _report = parse_source(&input);
    }

    /// Property 2: The error count is exactly the number of syntax
    /// diagnostics in the report.
    #[test]
    fn error_count_matches_syntax_diagnostics(input in "\\PC{0,400}") {
        let report = parse_source(&input);
        let syntax_count = report
            .diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Syntax)
            .count();
        prop_assert_eq!(report.errors, syntax_count);
    }

    /// Property 3: The parser is deterministic.
    #[test]
    fn parser_is_deterministic(input in "\\PC{0,400}") {
        prop_assert_eq!(parse_source(&input), parse_source(&input));
    }

    /// Property 4: Generated well-formed programs parse without errors.
    #[test]
    fn valid_programs_parse_cleanly(source in valid_program()) {
        let report = parse_source(&source);
        prop_assert_eq!(
            report.errors,
            0,
            "diagnostics for {:?}: {:?}",
            source,
            report.diagnostics
        );
    }
}
