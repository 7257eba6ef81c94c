//! Python code generation.
//!
//! Lowers statements one node at a time. Nodes whose shape does not fit their
//! tag never abort generation: they come back as `Fragment::Skipped` and are
//! left out of the program text.

use tracing::debug;

use crate::ast::{AstNode, Tag};

pub mod context;
pub mod fragment;

pub use context::GenerationContext;
pub use fragment::{Fragment, SkipReason};

/// Lines every generated program starts with.
pub const PROGRAM_HEADER: &[&str] = &[
    "#!/usr/bin/env python3",
    "\"\"\"Generated Python code from Parlance.\"\"\"",
    "",
];

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit `PROGRAM_HEADER` at the top of a program.
    pub emit_header: bool,
    /// Prefix for lines nested under an `if`.
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            emit_header: true,
            indent: "    ".to_string(),
        }
    }
}

/// A generated program and the statements that were left out of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramOutput {
    pub code: String,
    pub skipped: Vec<SkippedStatement>,
}

/// A statement that lowered to nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStatement {
    /// Position in the statement list handed to `transpile_program`.
    pub index: usize,
    pub reason: SkipReason,
}

// ============================================================================
// TRANSPILER
// ============================================================================

/// Lowers AST nodes into Python source.
///
/// Not meant to be shared between concurrent conversions: the generation
/// context is plain mutable state.
#[derive(Debug, Default)]
pub struct Transpiler {
    config: GeneratorConfig,
    context: GenerationContext,
}

impl Transpiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            context: GenerationContext::default(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// State accumulated since the last `transpile_program` started.
    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Lowers one node, dispatching on its tag.
    pub fn transpile(&mut self, node: &AstNode) -> Fragment {
        let fragment = Fragment::from(self.statement(node));
        if let Fragment::Skipped(reason) = &fragment {
            debug!(node = %node, %reason, "skipped node");
        }
        fragment
    }

    /// Lowers a whole program: header, sorted imports, then each statement in
    /// order. The generation context starts empty on every call.
    ///
    /// `import` statements are hoisted into the import block rather than
    /// repeated in the body.
    pub fn transpile_program(&mut self, statements: &[AstNode]) -> ProgramOutput {
        self.context.reset();

        let mut body = Vec::with_capacity(statements.len());
        let mut skipped = Vec::new();
        for (index, statement) in statements.iter().enumerate() {
            match self.transpile(statement) {
                Fragment::Code(code) => {
                    if statement.tag() != Some(&Tag::Import) {
                        body.push(code);
                    }
                }
                Fragment::Skipped(reason) => skipped.push(SkippedStatement { index, reason }),
            }
        }

        let mut lines: Vec<String> = Vec::new();
        if self.config.emit_header {
            lines.extend(PROGRAM_HEADER.iter().map(|line| line.to_string()));
        }
        if self.context.has_imports() {
            lines.extend(self.context.imports().map(|module| format!("import {}", module)));
            lines.push(String::new());
        }
        lines.extend(body);

        ProgramOutput {
            code: lines.join("\n"),
            skipped,
        }
    }

    // ------------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------------

    fn statement(&mut self, node: &AstNode) -> Result<String, SkipReason> {
        let AstNode::Composite { tag, children } = node else {
            return self.expression(node);
        };

        match tag {
            Tag::Let | Tag::Define | Tag::Set => {
                let [target, value] = exactly::<2>(tag, children)?;
                let name = identifier(tag, target)?;
                let value = self.expression(value)?;
                self.context.declare(name);
                Ok(format!("{} = {}", name, value))
            }
            Tag::Print => match at_most_one(tag, children)? {
                Some(value) => Ok(format!("print({})", self.expression(value)?)),
                None => Ok("print()".to_string()),
            },
            Tag::If => {
                let [condition, body] = exactly::<2>(tag, children)?;
                // Checked before lowering so a guarded import never reaches
                // the context.
                if let Some(inner @ (Tag::If | Tag::For | Tag::While | Tag::Import)) = body.tag() {
                    return Err(SkipReason::UnsupportedBody {
                        tag: tag.to_string(),
                        body: inner.to_string(),
                    });
                }
                let condition = self.expression(condition)?;
                let body = self.statement(body)?;
                Ok(format!("if {}:\n{}", condition, self.indented(&body)))
            }
            Tag::For => {
                let [variable, collection] = exactly::<2>(tag, children)?;
                let variable = identifier(tag, variable)?;
                Ok(format!("for {} in {}:", variable, self.expression(collection)?))
            }
            Tag::While => {
                let [condition] = exactly::<1>(tag, children)?;
                Ok(format!("while {}:", self.expression(condition)?))
            }
            Tag::Import => {
                let [module] = exactly::<1>(tag, children)?;
                let module = identifier(tag, module)?;
                self.context.import(module);
                Ok(format!("import {}", module))
            }
            Tag::Return => match at_most_one(tag, children)? {
                Some(value) => Ok(format!("return {}", self.expression(value)?)),
                None => Ok("return".to_string()),
            },
            Tag::Rule(_) => self.expression(node),
        }
    }

    fn indented(&self, body: &str) -> String {
        body.lines()
            .map(|line| format!("{}{}", self.config.indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    fn expression(&self, node: &AstNode) -> Result<String, SkipReason> {
        match node {
            AstNode::Identifier { value } => Ok(value.clone()),
            AstNode::Number { value } => Ok(value.to_string()),
            AstNode::String { value } => Ok(python_string(value)),
            AstNode::Boolean { value } => Ok(if *value { "True" } else { "False" }.to_string()),
            AstNode::Composite { tag, .. } if tag.is_statement() => {
                Err(SkipReason::StatementInExpression {
                    tag: tag.to_string(),
                })
            }
            AstNode::Composite { tag, children } => match children.as_slice() {
                [] => Err(SkipReason::Empty {
                    tag: tag.to_string(),
                }),
                [only] => self.expression(only),
                // Operators never reach the tree, so every binary form renders
                // as addition. `x times y` therefore comes out as `x + y`.
                [left, right] => Ok(format!(
                    "{} + {}",
                    self.expression(left)?,
                    self.expression(right)?
                )),
                many => Ok(many
                    .iter()
                    .map(|child| self.expression(child))
                    .collect::<Result<Vec<_>, _>>()?
                    .join(" ")),
            },
        }
    }
}

/// Double-quoted Python literal for `value`.
fn python_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

// ============================================================================
// ARITY HELPERS
// ============================================================================

fn exactly<'a, const N: usize>(
    tag: &Tag,
    children: &'a [AstNode],
) -> Result<&'a [AstNode; N], SkipReason> {
    children.try_into().map_err(|_| SkipReason::Arity {
        tag: tag.to_string(),
        expected: N.to_string(),
        found: children.len(),
    })
}

fn at_most_one<'a>(tag: &Tag, children: &'a [AstNode]) -> Result<Option<&'a AstNode>, SkipReason> {
    match children {
        [] => Ok(None),
        [only] => Ok(Some(only)),
        _ => Err(SkipReason::Arity {
            tag: tag.to_string(),
            expected: "0 or 1".to_string(),
            found: children.len(),
        }),
    }
}

fn identifier<'a>(tag: &Tag, node: &'a AstNode) -> Result<&'a str, SkipReason> {
    node.as_identifier()
        .ok_or_else(|| SkipReason::ExpectedIdentifier {
            tag: tag.to_string(),
            found: node.kind().to_string(),
        })
}
