//! Membership checks against the heading vocabularies.
//!
//! Every check returns a [`Result`] instead of panicking. The resolver only
//! encodes fallback *order*; which literals are acceptable is decided here.
//!
//! # Allow-list strings
//!
//! Plugin configuration supplies the allowed styles as a single string such
//! as `"h1, h2,h3"`. Tokens are separated by a comma with at most one
//! whitespace character on either side. The public parse functions fail
//! open: an empty string, a missing value, or any unknown token yields the
//! complete list instead of an error.
//!
//! ```rust
//! use headline::{parse_allowed_style_values, StyleOption, STYLE_VALUES};
//!
//! assert_eq!(
//!     parse_allowed_style_values(Some("h1, h2,h3")),
//!     vec![StyleOption::H1, StyleOption::H2, StyleOption::H3],
//! );
//! assert_eq!(parse_allowed_style_values(Some("bogus")), STYLE_VALUES.to_vec());
//! ```

mod error;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants::{
    ElementOption, OptionLiteral, StyleInputOption, StyleOption, ELEMENT_VALUES,
    STYLE_INPUT_VALUES, STYLE_VALUES,
};

pub use error::{ParseError, ValidationError};

static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s?,\s?").expect("list separator pattern is valid"));

/// Checks that `candidate` is exactly one of `allowed`.
pub fn validate_enum<T: OptionLiteral>(
    candidate: Option<&str>,
    allowed: &[T],
) -> Result<T, ValidationError> {
    candidate
        .and_then(|c| allowed.iter().copied().find(|v| v.as_str() == c))
        .ok_or_else(|| ValidationError::new(candidate, allowed))
}

/// Succeeds iff `candidate` names one of the six heading elements.
pub fn validate_element_value(candidate: Option<&str>) -> Result<ElementOption, ValidationError> {
    validate_enum(candidate, ELEMENT_VALUES)
}

/// Succeeds iff `candidate` is in `allowed`, which normally is `default`
/// followed by the configured styles.
pub fn validate_style_input_value(
    candidate: Option<&str>,
    allowed: &[StyleInputOption],
) -> Result<StyleInputOption, ValidationError> {
    validate_enum(candidate, allowed)
}

/// Succeeds iff `candidate` is in `allowed`. `default` is never implied.
pub fn validate_style_value(
    candidate: Option<&str>,
    allowed: &[StyleOption],
) -> Result<StyleOption, ValidationError> {
    validate_enum(candidate, allowed)
}

/// Splits and validates a delimited allow-list, reporting why it failed.
pub fn try_parse_list<T: OptionLiteral>(raw: Option<&str>) -> Result<Vec<T>, ParseError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ParseError::Empty),
    };

    LIST_SEPARATOR
        .split(raw)
        .enumerate()
        .map(|(index, token)| {
            T::from_literal(token).ok_or_else(|| ParseError::InvalidEntry {
                index,
                source: ValidationError::new(Some(token), T::ALL),
            })
        })
        .collect()
}

pub fn try_parse_allowed_style_input_values(
    raw: Option<&str>,
) -> Result<Vec<StyleInputOption>, ParseError> {
    try_parse_list(raw)
}

pub fn try_parse_allowed_style_values(raw: Option<&str>) -> Result<Vec<StyleOption>, ParseError> {
    try_parse_list(raw)
}

/// Parses an allow-list of style inputs, falling back to all seven values.
pub fn parse_allowed_style_input_values(raw: Option<&str>) -> Vec<StyleInputOption> {
    try_parse_allowed_style_input_values(raw).unwrap_or_else(|err| {
        debug!(%err, "using every style input value");
        STYLE_INPUT_VALUES.to_vec()
    })
}

/// Parses an allow-list of styles, falling back to all six values.
pub fn parse_allowed_style_values(raw: Option<&str>) -> Vec<StyleOption> {
    try_parse_allowed_style_values(raw).unwrap_or_else(|err| {
        debug!(%err, "using every style value");
        STYLE_VALUES.to_vec()
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn element_validation_matches_membership(candidate in "\\PC{0,4}") {
            let is_member = ["h1", "h2", "h3", "h4", "h5", "h6"].contains(&candidate.as_str());
            prop_assert_eq!(validate_element_value(Some(candidate.as_str())).is_ok(), is_member);
        }

        #[test]
        fn parsed_style_lists_are_never_empty(raw in "[h1-7, ]{0,12}") {
            let parsed = parse_allowed_style_values(Some(raw.as_str()));
            prop_assert!(!parsed.is_empty());
        }

        #[test]
        fn joined_lists_parse_back(indices in prop::collection::vec(0usize..6, 1..6)) {
            let styles: Vec<StyleOption> = indices.iter().map(|&i| STYLE_VALUES[i]).collect();
            let raw = styles.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ");
            prop_assert_eq!(try_parse_allowed_style_values(Some(raw.as_str())), Ok(styles));
        }
    }
}
