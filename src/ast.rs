//! Parlance Abstract Syntax Tree
//!
//! One `AstNode` per grammar production. Statement kinds the generator knows
//! about get their own `Tag`; every other production keeps its grammar rule
//! name in `Tag::Rule` so nothing the parser produced is lost.

use std::fmt;

use serde::Serialize;

/// Discriminant of a composite node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Let,
    Define,
    Set,
    Print,
    If,
    For,
    While,
    Import,
    Return,
    /// Any production without first-class treatment, named after its rule.
    Rule(String),
}

impl Tag {
    /// The tag's name as it appears in dumps and diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Tag::Let => "let",
            Tag::Define => "define",
            Tag::Set => "set",
            Tag::Print => "print",
            Tag::If => "if",
            Tag::For => "for",
            Tag::While => "while",
            Tag::Import => "import",
            Tag::Return => "return",
            Tag::Rule(rule) => rule,
        }
    }

    /// True for the nine statement tags.
    pub fn is_statement(&self) -> bool {
        !matches!(self, Tag::Rule(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AstNode {
    Composite { tag: Tag, children: Vec<AstNode> },
    Identifier { value: String },
    Number { value: f64 },
    String { value: String },
    Boolean { value: bool },
}

impl AstNode {
    pub fn composite(tag: Tag, children: Vec<AstNode>) -> Self {
        AstNode::Composite { tag, children }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        AstNode::Identifier { value: name.into() }
    }

    pub fn number(value: f64) -> Self {
        AstNode::Number { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        AstNode::String {
            value: value.into(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        AstNode::Boolean { value }
    }

    /// Name of the node kind: the tag for composites, the literal kind for leaves.
    pub fn kind(&self) -> &str {
        match self {
            AstNode::Composite { tag, .. } => tag.name(),
            AstNode::Identifier { .. } => "identifier",
            AstNode::Number { .. } => "number",
            AstNode::String { .. } => "string",
            AstNode::Boolean { .. } => "boolean",
        }
    }

    pub fn tag(&self) -> Option<&Tag> {
        match self {
            AstNode::Composite { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Children of a composite node; leaves have none.
    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::Composite { children, .. } => children,
            _ => &[],
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            AstNode::Identifier { value } => Some(value),
            _ => None,
        }
    }

    /// Renders the node as an s-expression, e.g. `(let x (value 5))`.
    pub fn pretty(&self) -> String {
        match self {
            AstNode::Composite { tag, children } => {
                let mut out = format!("({}", tag);
                for child in children {
                    out.push(' ');
                    out.push_str(&child.pretty());
                }
                out.push(')');
                out
            }
            AstNode::Identifier { value } => value.clone(),
            AstNode::Number { value } => value.to_string(),
            AstNode::String { value } => format!("{:?}", value),
            AstNode::Boolean { value } => value.to_string(),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
