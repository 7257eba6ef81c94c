//! Arguments for `parlance`. Each subcommand stops the pipeline at a
//! different stage: `normalize` after phrase rewriting, `ast` and `parse`
//! after the builder, `convert` after code generation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "parlance",
    version,
    about = "Turns English-like statements into Python."
)]
pub struct ParlanceArgs {
    /// Log every pipeline stage to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full pipeline: normalize, parse, and print the generated Python.
    Convert {
        /// The source file, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
        /// Leave out the interpreter line and docstring.
        #[arg(long)]
        no_header: bool,
        /// Keep the case and wording of double-quoted strings.
        #[arg(long)]
        preserve_literals: bool,
    },
    /// Print the source after phrase normalization.
    Normalize {
        /// The source file, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
        /// Keep the case and wording of double-quoted strings.
        #[arg(long)]
        preserve_literals: bool,
    },
    /// Show the Abstract Syntax Tree (AST) of every statement.
    Ast {
        /// The source file, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit JSON instead of s-expressions.
        #[arg(long)]
        json: bool,
    },
    /// Parse a single statement and report a full diagnostic if it fails.
    Parse {
        /// The statement text, e.g. "let x be 5".
        #[arg(required = true)]
        statement: String,
    },
    /// Check every `.parl` file under a path and list the lines that fail.
    Check {
        /// A source file or a directory to search.
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
