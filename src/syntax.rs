//! Syntax front-end: grammar matching and AST construction.

pub mod builder;
pub mod error;
pub mod parser;

pub use error::{LineDiagnostic, ParseError};
pub use parser::{parse, parse_program, parse_program_with, ParsedProgram, ParserConfig};
