//! Parlance: English-like statements in, Python out.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`normalize()`] rewrites informal phrasing (`create`, `plus`, `is at least`)
//!    into canonical keywords and operators.
//! 2. [`syntax::parse`] matches one canonical statement against the grammar.
//! 3. The AST builder folds the parse tree into an [`ast::AstNode`].
//! 4. [`codegen::Transpiler`] lowers statements into Python.
//!
//! [`convert()`] runs all four over a multi-line program.
//!
//! ```rust
//! let python = parlance::convert("create total as 2 plus 3.\nshow total.");
//! assert!(python.ends_with("total = 2 + 3\nprint(total)"));
//! ```

pub use crate::ast::{AstNode, Tag};
pub use crate::codegen::{Fragment, GenerationContext, GeneratorConfig, SkipReason, Transpiler};
pub use crate::convert::{convert, Conversion, Converter};
pub use crate::normalize::{normalize, normalize_with, NormalizerConfig};
pub use crate::syntax::{parse, parse_program, LineDiagnostic, ParseError, ParsedProgram, ParserConfig};

pub mod ast;
pub mod cli;
pub mod codegen;
pub mod convert;
pub mod logging;
pub mod normalize;
pub mod syntax;
