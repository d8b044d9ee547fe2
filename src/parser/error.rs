//! # Error Definitions
//!
//! Parse failures are ordinary values ([`super::Reply`]'s error tags) while a
//! grammar runs. The types here cover the two other situations:
//!
//! - [`GrammarError`]: a grammar was written wrong and cannot be built
//!   (an empty literal, a pattern that does not compile, a rule defined twice).
//! - [`ParseError`]: the summary handed to a host once a top-level parse is
//!   over and did not succeed.

use thiserror::Error;

/// A grammar-authoring mistake caught while the grammar is being built.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("a literal parser must match at least one character")]
    EmptyLiteral,
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
    #[error("rule `{0}` is already defined")]
    AlreadyDefined(String),
}

/// Why a top-level parse did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not match the grammar.
    #[error("syntax error at {line}:{column}{}", describe_expected(.expected))]
    Syntax {
        position: usize,
        line: usize,
        column: usize,
        expected: Vec<String>,
    },
    /// Recursive rules nested deeper than the configured limit.
    #[error("input nests deeper than the limit of {limit} (at offset {position})")]
    DepthExceeded { limit: usize, position: usize },
}

impl ParseError {
    /// Byte offset the error was reported at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Syntax { position, .. } | ParseError::DepthExceeded { position, .. } => {
                *position
            }
        }
    }
}

fn describe_expected(expected: &[String]) -> String {
    match expected {
        [] => String::new(),
        [only] => format!(", expected {only}"),
        [init @ .., last] => format!(", expected {} or {last}", init.join(", ")),
    }
}
