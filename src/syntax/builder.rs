//! AST builder: folds a pest parse tree into `AstNode`s.
//!
//! Bottom-up and order preserving. Statement rules map onto their `Tag`;
//! every other composite rule becomes `Tag::Rule(<rule name>)` with its
//! children as-is. No arity or type checks happen here.

use pest::error::{Error as PestError, ErrorVariant};
use pest::iterators::Pair;

use crate::ast::{AstNode, Tag};

use super::error::ParseError;
use super::parser::Rule;

/// Builds the node for `pair` and everything beneath it.
pub fn build_ast(pair: Pair<'_, Rule>, input: &str) -> Result<AstNode, ParseError> {
    match pair.as_rule() {
        Rule::identifier => Ok(AstNode::identifier(pair.as_str())),
        Rule::number => build_number(pair, input),
        Rule::string => Ok(AstNode::string(strip_quotes(pair.as_str()))),
        Rule::boolean => Ok(AstNode::boolean(pair.as_str() == "true")),
        rule => {
            let tag = statement_tag(rule).unwrap_or_else(|| Tag::Rule(rule_name(rule)));
            let children = pair
                .into_inner()
                .filter(|p| p.as_rule() != Rule::EOI)
                .map(|p| build_ast(p, input))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AstNode::composite(tag, children))
        }
    }
}

fn statement_tag(rule: Rule) -> Option<Tag> {
    let tag = match rule {
        Rule::let_statement => Tag::Let,
        Rule::define_statement => Tag::Define,
        Rule::set_statement => Tag::Set,
        Rule::print_statement => Tag::Print,
        Rule::if_statement => Tag::If,
        Rule::for_statement => Tag::For,
        Rule::while_statement => Tag::While,
        Rule::import_statement => Tag::Import,
        Rule::return_statement => Tag::Return,
        _ => return None,
    };
    Some(tag)
}

fn rule_name(rule: Rule) -> String {
    format!("{:?}", rule)
}

fn build_number(pair: Pair<'_, Rule>, input: &str) -> Result<AstNode, ParseError> {
    let text = pair.as_str();
    text.parse::<f64>().map(AstNode::number).map_err(|e| {
        let error = PestError::new_from_span(
            ErrorVariant::CustomError {
                message: format!("invalid number '{}': {}", text, e),
            },
            pair.as_span(),
        );
        ParseError::from_pest(error, input)
    })
}

/// Drops one surrounding quote character on each side. No unescaping.
fn strip_quotes(text: &str) -> &str {
    let inner = text.strip_prefix('"').unwrap_or(text);
    inner.strip_suffix('"').unwrap_or(inner)
}
