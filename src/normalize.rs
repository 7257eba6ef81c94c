//! Phrase normalization.
//!
//! Rewrites informal phrasing into the canonical vocabulary the grammar
//! understands: `create x as 5` becomes `define x as 5`, `a plus b` becomes
//! `a + b`. The whole input is lowercased first, string literals included.
//! `NormalizerConfig::preserve_literals` leaves double-quoted literals alone.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// The substitution table, applied once, top to bottom.
///
/// Ordering matters. Multi-word phrases that start with a shorter entry's
/// words must come first: every `is ...` comparison precedes the bare `is`,
/// and `multiplied by` / `divided by` precede anything that could split them.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("create", "define"),
    ("make", "define"),
    ("assign", "set"),
    ("put", "set"),
    ("show", "print"),
    ("display", "print"),
    ("say", "print"),
    ("announce", "print"),
    ("multiplied by", "*"),
    ("divided by", "/"),
    ("plus", "+"),
    ("minus", "-"),
    ("times", "*"),
    ("exceeds", ">"),
    ("is at least", ">="),
    ("is at most", "<="),
    ("is greater than", ">"),
    ("is less than", "<"),
    ("does not equal", "!="),
    ("equals", "=="),
    ("is", "=="),
];

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

static TABLE: Lazy<Vec<Substitution>> = Lazy::new(|| {
    SUBSTITUTIONS
        .iter()
        .map(|(phrase, replacement)| Substitution {
            pattern: word_pattern(phrase),
            replacement,
        })
        .collect()
});

fn word_pattern(phrase: &str) -> Regex {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    let source = format!(r"(?i)\b{}\b", words.join(r"[ \t]+"));
    // Patterns are built from the fixed table above.
    Regex::new(&source).unwrap_or_else(|e| panic!("invalid substitution pattern {source:?}: {e}"))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Copy double-quoted literals through without lowercasing or rewriting.
    pub preserve_literals: bool,
}

/// Normalizes informal phrasing into canonical text.
///
/// Pure and idempotent: normalizing canonical text returns it unchanged.
/// Lines are normalized independently; line breaks are kept as they are.
pub fn normalize(text: &str) -> String {
    normalize_with(text, &NormalizerConfig::default())
}

pub fn normalize_with(text: &str, config: &NormalizerConfig) -> String {
    let line = |line: &str| {
        if config.preserve_literals {
            rewrite_outside_literals(line)
        } else {
            rewrite(line)
        }
    };
    text.split('\n').map(line).collect::<Vec<_>>().join("\n")
}

fn rewrite_outside_literals(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for segment in segments(line) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Prose(prose) => out.push_str(&rewrite(prose)),
        }
    }
    out
}

fn rewrite(prose: &str) -> String {
    TABLE
        .iter()
        .fold(prose.to_lowercase(), |acc, sub| {
            sub.pattern
                .replace_all(&acc, NoExpand(sub.replacement))
                .into_owned()
        })
}

enum Segment<'a> {
    Prose(&'a str),
    Literal(&'a str),
}

/// Splits text into prose and double-quoted literals (quotes included).
/// An unterminated quote runs to the end of the line.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('"') {
        if open > 0 {
            parts.push(Segment::Prose(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let end = after.find('"').map_or(rest.len(), |close| open + close + 2);
        parts.push(Segment::Literal(&rest[open..end]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        parts.push(Segment::Prose(rest));
    }
    parts
}
