//! # rlox
//!
//! rlox is a tree-walking interpreter for the Lox language, written in Rust.
//! It tokenizes, parses, and evaluates Lox source text, covering the
//! expression and statement core of the language: literals, grouping, unary
//! and binary operators, expression statements, and `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Interpreter, lexer, parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree, together with the visitor
/// traits used to traverse it. The AST is built by the parser and walked by
/// the evaluator and the debug printer.
///
/// # Responsibilities
/// - Defines expression and statement types, including reserved variants
///   for not-yet-executable language constructs.
/// - Attaches operator and name tokens to nodes for error reporting.
/// - Provides the double-dispatch visitation contract.
pub mod ast;
/// Collects and reports diagnostics on behalf of the driver.
///
/// The pipeline returns structured errors; this module turns them into
/// user-visible reports and tracks whether a source unit failed. The
/// collector is owned and reset by the driver, never by the pipeline.
///
/// # Responsibilities
/// - Prints each error's display form to standard error.
/// - Tracks the had-error and had-runtime-error flags behind the process
///   exit codes.
pub mod diagnostics;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised by the pipeline. It
/// standardizes error reporting and carries detailed information about
/// failures, including source lines and offending lexemes.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and location descriptions for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the debug printer to provide a complete front-end
/// pipeline for Lox source text.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, printer.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs one unit of source text through the full pipeline.
///
/// The source is tokenized and parsed; every lexical and parse error found
/// is reported to `diagnostics`. If any occurred, evaluation is suppressed
/// entirely, so a partial statement list is never executed. Otherwise the
/// statements are evaluated in order, and at most one runtime error is
/// reported.
///
/// Each call owns its own token list and AST; nothing is cached or shared
/// across calls, so independent runs (a script, or successive REPL lines)
/// cannot affect each other.
///
/// # Parameters
/// - `source`: One complete source unit, either a file's contents or one
///   prompt line.
/// - `diagnostics`: The driver-owned error collector.
///
/// # Examples
/// ```
/// use rlox::{diagnostics::Diagnostics, run};
///
/// let mut diagnostics = Diagnostics::new();
/// run("print 1 + 2;", &mut diagnostics);
/// assert!(!diagnostics.had_error());
///
/// // A type error surfaces as a runtime error, not a crash.
/// run("print -\"muffin\";", &mut diagnostics);
/// assert!(diagnostics.had_runtime_error());
/// ```
pub fn run(source: &str, diagnostics: &mut diagnostics::Diagnostics) {
    let (tokens, lex_errors) = lexer::scan(source);
    for error in &lex_errors {
        diagnostics.lex_error(error);
    }

    let (statements, parse_errors) = parser::statement::parse(&tokens);
    for error in &parse_errors {
        diagnostics.parse_error(error);
    }

    if diagnostics.had_error() {
        return;
    }

    if let Err(error) = Interpreter::new().interpret(&statements) {
        diagnostics.runtime_error(&error);
    }
}
