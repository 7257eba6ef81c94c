//! End-to-end conversion: normalize, parse line by line, generate.

use tracing::{debug, info};

use crate::ast::AstNode;
use crate::codegen::{GeneratorConfig, SkippedStatement, Transpiler};
use crate::normalize::{normalize_with, NormalizerConfig};
use crate::syntax::{parse_program_with, LineDiagnostic, ParserConfig};

/// Everything one conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The generated Python program.
    pub code: String,
    /// The source after phrase normalization.
    pub normalized: String,
    /// Statements that parsed, in source order.
    pub statements: Vec<AstNode>,
    /// Lines that failed to parse and were left out.
    pub diagnostics: Vec<LineDiagnostic>,
    /// Parsed statements that generated no code.
    pub skipped: Vec<SkippedStatement>,
}

impl Conversion {
    /// True when every code line made it into the output.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty() && self.skipped.is_empty()
    }
}

/// Runs the whole pipeline. Reusable: every conversion starts from an empty
/// generation context.
#[derive(Debug, Default)]
pub struct Converter {
    normalizer: NormalizerConfig,
    parser: ParserConfig,
    transpiler: Transpiler,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(parser: ParserConfig, generator: GeneratorConfig) -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            parser,
            transpiler: Transpiler::with_config(generator),
        }
    }

    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn transpiler(&self) -> &Transpiler {
        &self.transpiler
    }

    pub fn convert(&mut self, source: &str) -> Conversion {
        let normalized = normalize_with(source, &self.normalizer);
        debug!(normalized = %normalized, "normalized source");

        let program = parse_program_with(&normalized, &self.parser);
        let output = self.transpiler.transpile_program(&program.statements);

        info!(
            statements = program.statements.len(),
            skipped_lines = program.diagnostics.len(),
            skipped_nodes = output.skipped.len(),
            "converted program"
        );

        Conversion {
            code: output.code,
            normalized,
            statements: program.statements,
            diagnostics: program.diagnostics,
            skipped: output.skipped,
        }
    }
}

/// Converts informal source text to Python with default settings.
///
/// Lines that fail to parse are reported through `tracing` and left out; the
/// rest of the program is still generated.
pub fn convert(source: &str) -> String {
    Converter::new().convert(source).code
}
