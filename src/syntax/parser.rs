//! Parlance Parser
//!
//! Matches canonical text against `grammar.pest` and hands the resulting
//! parse tree to the AST builder. `parse` handles one statement and fails
//! hard; `parse_program` handles one statement per line and skips the lines
//! that fail, reporting each as a `LineDiagnostic`.

use pest::error::{Error as PestError, ErrorVariant};
use pest::{Parser, Position};
use pest_derive::Parser;
use tracing::{debug, warn};

use crate::ast::AstNode;

use super::builder::build_ast;
use super::error::{LineDiagnostic, ParseError};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct GrammarParser;

/// Every statement ends with this character.
pub const STATEMENT_DELIMITER: char = '.';

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Settings for multi-line parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Lines whose first non-blank character is this marker are skipped.
    pub comment_marker: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_marker: '#',
        }
    }
}

/// The statements of a program plus the lines that were left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedProgram {
    /// In source line order. May be shorter than the number of code lines.
    pub statements: Vec<AstNode>,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParsedProgram {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a single canonical statement. A missing trailing `.` is added.
pub fn parse(text: &str) -> Result<AstNode, ParseError> {
    let input = terminate(text);
    let mut pairs =
        GrammarParser::parse(Rule::start, &input).map_err(|e| ParseError::from_pest(e, &input))?;

    let statement = pairs
        .next()
        .and_then(|start| start.into_inner().next())
        .ok_or_else(|| empty_statement(&input))?;

    let node = build_ast(statement, &input)?;
    debug!(statement = %input, ast = %node, "parsed statement");
    Ok(node)
}

/// Parses a multi-line program with the default configuration.
pub fn parse_program(text: &str) -> ParsedProgram {
    parse_program_with(text, &ParserConfig::default())
}

/// Parses each non-blank, non-comment line as its own statement.
///
/// A line that fails to parse never aborts the program: it is logged at
/// warning level, recorded in `diagnostics` and left out of `statements`.
pub fn parse_program_with(text: &str, config: &ParserConfig) -> ParsedProgram {
    let mut program = ParsedProgram::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(config.comment_marker) {
            continue;
        }
        match parse(line) {
            Ok(node) => program.statements.push(node),
            Err(error) => {
                let diagnostic = LineDiagnostic {
                    line: index + 1,
                    text: line.to_string(),
                    message: error.message,
                };
                warn!("{}", diagnostic);
                program.diagnostics.push(diagnostic);
            }
        }
    }

    debug!(
        statements = program.statements.len(),
        skipped = program.diagnostics.len(),
        "parsed program"
    );
    program
}

// ============================================================================
// UTILITIES
// ============================================================================

fn terminate(text: &str) -> String {
    let trimmed = text.trim();
    let mut input = String::with_capacity(trimmed.len() + 1);
    input.push_str(trimmed);
    if !trimmed.ends_with(STATEMENT_DELIMITER) {
        input.push(STATEMENT_DELIMITER);
    }
    input
}

fn empty_statement(input: &str) -> ParseError {
    let error = PestError::new_from_pos(
        ErrorVariant::CustomError {
            message: "expected a statement".to_string(),
        },
        Position::from_start(input),
    );
    ParseError::from_pest(error, input)
}
