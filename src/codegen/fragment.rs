//! What a single node lowers to.

use thiserror::Error;

/// The output of lowering one node.
///
/// A node that cannot be lowered is `Skipped` rather than an error: callers
/// that only want text get an empty fragment from `text()`, callers that care
/// can inspect the reason.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Code(String),
    Skipped(SkipReason),
}

impl Fragment {
    /// The generated text, or `""` for a skipped node.
    pub fn text(&self) -> &str {
        match self {
            Fragment::Code(code) => code,
            Fragment::Skipped(_) => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Fragment::Code(code) => code,
            Fragment::Skipped(_) => String::new(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Fragment::Skipped(_))
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Fragment::Code(_) => None,
            Fragment::Skipped(reason) => Some(reason),
        }
    }
}

impl From<Result<String, SkipReason>> for Fragment {
    fn from(result: Result<String, SkipReason>) -> Self {
        match result {
            Ok(code) => Fragment::Code(code),
            Err(reason) => Fragment::Skipped(reason),
        }
    }
}

/// Why a node produced no code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("`{tag}` expects {expected} children, found {found}")]
    Arity {
        tag: String,
        expected: String,
        found: usize,
    },
    #[error("`{tag}` expects an identifier, found {found}")]
    ExpectedIdentifier { tag: String, found: String },
    #[error("`{tag}` has nothing to render")]
    Empty { tag: String },
    #[error("statement `{tag}` cannot appear inside an expression")]
    StatementInExpression { tag: String },
    #[error("`{tag}` cannot guard a `{body}` statement")]
    UnsupportedBody { tag: String, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_fragment_has_empty_text() {
        let fragment = Fragment::Skipped(SkipReason::Empty { tag: "value".into() });
        assert_eq!(fragment.text(), "");
        assert!(fragment.is_skipped());
        assert_eq!(fragment.skip_reason().unwrap().to_string(), "`value` has nothing to render");
    }

    #[test]
    fn arity_reason_message() {
        let reason = SkipReason::Arity {
            tag: "let".into(),
            expected: "2".into(),
            found: 1,
        };
        assert_eq!(reason.to_string(), "`let` expects 2 children, found 1");
    }

    #[test]
    fn unsupported_body_reason_message() {
        let reason = SkipReason::UnsupportedBody {
            tag: "if".into(),
            body: "import".into(),
        };
        assert_eq!(reason.to_string(), "`if` cannot guard a `import` statement");
    }
}
