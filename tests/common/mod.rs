#![allow(dead_code)]

use rlox::interpreter::{run_program, ParseResult, Parser};
use rlox::lexer;

/// Runs a program to completion and returns everything it printed.
pub fn run(source: &str) -> String {
    match run_program(source, Vec::new()) {
        Ok(out) => String::from_utf8(out).expect("print output should be utf-8"),
        Err(diagnostics) => panic!("program failed unexpectedly: {:?}", diagnostics),
    }
}

/// Runs a program expected to fail and returns its diagnostics, each
/// rendered as a `[line N] Error...` header.
pub fn run_errors(source: &str) -> Vec<String> {
    match run_program(source, Vec::new()) {
        Ok(out) => panic!(
            "program succeeded unexpectedly with output: {:?}",
            String::from_utf8_lossy(&out)
        ),
        Err(diagnostics) => diagnostics.iter().map(|d| d.to_string()).collect(),
    }
}

/// Scans and parses without interpreting.
pub fn parse(source: &str) -> ParseResult {
    let tokens = lexer::scan(source).expect("scan should succeed");
    Parser::new(tokens).parse()
}

/// Diagnostics from a parse expected to fail.
pub fn parse_errors(source: &str) -> Vec<String> {
    let parsed = parse(source);
    assert!(!parsed.is_ok(), "parse succeeded unexpectedly");
    parsed.errors.iter().map(|e| e.to_string()).collect()
}
