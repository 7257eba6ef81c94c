//! The Parlance Command-Line Interface.
//!
//! A thin caller around the library: reads files, runs the pipeline and
//! prints the result. Nothing here executes the generated code.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io, process};

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use walkdir::WalkDir;

use crate::cli::args::{Command, ParlanceArgs};
use crate::codegen::GeneratorConfig;
use crate::convert::Converter;
use crate::logging;
use crate::normalize::{normalize, normalize_with, NormalizerConfig};
use crate::syntax::{parse, parse_program, ParseError, ParserConfig};

pub mod args;
pub mod output;

/// Extension of Parlance source files.
pub const SOURCE_EXTENSION: &str = "parl";

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(parlance::io))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to serialize the AST: {0}")]
    #[diagnostic(code(parlance::json))]
    Json(#[from] serde_json::Error),
    #[error("{failures} line(s) failed to parse")]
    #[diagnostic(code(parlance::check), help("run `parlance ast <file>` to see what did parse"))]
    CheckFailed { failures: usize },
}

/// The main entry point for the CLI.
pub fn run() {
    let args = ParlanceArgs::parse();
    logging::init_cli(args.verbose);

    if let Err(error) = dispatch(args.command) {
        eprintln!("{:?}", miette::Report::new(error));
        process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<(), CliError> {
    match command {
        Command::Convert {
            file,
            no_header,
            preserve_literals,
        } => handle_convert(&file, no_header, NormalizerConfig { preserve_literals }),
        Command::Normalize {
            file,
            preserve_literals,
        } => {
            let source = read_source(&file)?;
            println!("{}", normalize_with(&source, &NormalizerConfig { preserve_literals }));
            Ok(())
        }
        Command::Ast { file, json } => handle_ast(&file, json),
        Command::Parse { statement } => {
            let node = parse(&normalize(&statement))?;
            println!("{}", node.pretty());
            Ok(())
        }
        Command::Check { path } => handle_check(&path),
    }
}

fn handle_convert(
    file: &Path,
    no_header: bool,
    normalizer: NormalizerConfig,
) -> Result<(), CliError> {
    let source = read_source(file)?;
    let generator = GeneratorConfig {
        emit_header: !no_header,
        ..GeneratorConfig::default()
    };
    let mut converter =
        Converter::with_config(ParserConfig::default(), generator).with_normalizer(normalizer);
    let conversion = converter.convert(&source);

    let origin = file.display().to_string();
    output::print_line_diagnostics(&origin, &conversion.diagnostics);
    output::print_skipped(&origin, &conversion.skipped);
    println!("{}", conversion.code);
    Ok(())
}

fn handle_ast(file: &Path, json: bool) -> Result<(), CliError> {
    let source = read_source(file)?;
    let program = parse_program(&normalize(&source));
    output::print_line_diagnostics(&file.display().to_string(), &program.diagnostics);

    if json {
        println!("{}", serde_json::to_string_pretty(&program.statements)?);
    } else {
        for statement in &program.statements {
            println!("{}", statement.pretty());
        }
    }
    Ok(())
}

fn handle_check(path: &Path) -> Result<(), CliError> {
    let mut files = 0;
    let mut failures = 0;

    for file in source_files(path) {
        let source = read_source(&file)?;
        let program = parse_program(&normalize(&source));
        output::print_line_diagnostics(&file.display().to_string(), &program.diagnostics);
        files += 1;
        failures += program.diagnostics.len();
    }

    output::print_summary(files, failures);
    if failures > 0 {
        return Err(CliError::CheckFailed { failures });
    }
    Ok(())
}

/// `path` itself when it is a file, otherwise every source file beneath it.
fn source_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                output::print_warning(&format!("skipping unreadable entry: {}", e));
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
        .collect();
    files.sort();
    files
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let read_error = |source: io::Error| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        return Ok(source);
    }
    fs::read_to_string(path).map_err(read_error)
}
