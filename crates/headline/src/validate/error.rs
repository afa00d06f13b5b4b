//! Validation and allow-list parsing errors.

use crate::constants::OptionLiteral;

/// A candidate was not a member of the expected set.
///
/// This is an expected outcome, not a fault: every caller in the crate
/// has a fallback for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {}, expected one of: {}", describe(.received), .expected.join(", "))]
pub struct ValidationError {
    /// The rejected candidate, `None` when nothing was supplied.
    pub received: Option<String>,
    /// Literals that would have been accepted.
    pub expected: Vec<&'static str>,
}

impl ValidationError {
    pub fn new<T: OptionLiteral>(received: Option<&str>, expected: &[T]) -> Self {
        Self {
            received: received.map(str::to_owned),
            expected: expected.iter().map(|v| v.as_str()).collect(),
        }
    }
}

fn describe(received: &Option<String>) -> String {
    match received {
        Some(value) => format!("'{}'", value),
        None => "<none>".to_string(),
    }
}

/// Error from parsing a delimited allow-list string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was absent or the empty string.
    #[error("allow-list is empty")]
    Empty,
    /// A token did not name a member of the set.
    #[error("invalid allow-list entry at position {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
