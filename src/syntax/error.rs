//! Parse failures.
//!
//! A statement that does not match the grammar is a `ParseError`: a miette
//! diagnostic that carries the grammar engine's message, the offending text
//! and the location the engine pointed at. In program mode the same failure
//! is downgraded to a `LineDiagnostic` and the line is skipped.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use pest::error::{Error as PestError, InputLocation};
use thiserror::Error;

use super::parser::Rule;

/// A statement did not match any statement form of the grammar.
#[derive(Error, Diagnostic, Debug, Clone)]
#[error("Parse error: {message}")]
#[diagnostic(code(parlance::parse))]
pub struct ParseError {
    /// The grammar engine's own diagnostic.
    pub message: String,
    /// The text handed to the grammar, after delimiter completion.
    pub input: String,
    #[source_code]
    src: Arc<NamedSource<String>>,
    #[label("does not match any statement form")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl ParseError {
    pub(crate) fn from_pest(error: PestError<Rule>, input: &str) -> Self {
        let span = match &error.location {
            InputLocation::Pos(pos) => SourceSpan::from((*pos, 0)),
            InputLocation::Span((start, end)) => SourceSpan::from((*start, end - start)),
        };
        let error = error.renamed_rules(describe_rule);
        Self {
            message: error.variant.message().into_owned(),
            input: input.to_string(),
            src: Arc::new(NamedSource::new("<statement>", input.to_string())),
            span,
            help: Some(
                "statements start with let, define, set, print, if, for, while, import or return"
                    .to_string(),
            ),
        }
    }

    /// Byte offset into `input` where matching failed.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::EOI => "end of statement".to_string(),
        Rule::value => "an expression".to_string(),
        other => format!("{:?}", other).replace('_', " "),
    }
}

/// Why a program line was left out of the parsed program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The trimmed line as it appeared in the source.
    pub text: String,
    pub message: String,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: could not parse line {} '{}': {}",
            self.line, self.text, self.message
        )
    }
}
