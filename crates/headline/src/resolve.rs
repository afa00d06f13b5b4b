//! Fallback chains that turn raw inputs into one valid value.
//!
//! Resolution never consults the literal lists directly; it asks the
//! validator and walks an ordered list of candidates, first success wins.
//!
//! # Element
//!
//! 1. The content value, if it is a heading element
//! 2. The configured default, if it is a heading element
//! 3. [`DEFAULT_ELEMENT_VALUE`]
//!
//! # Style
//!
//! Two strategies exist, selected with [`StyleResolutionStrategy`]:
//!
//! - [`StyleResolutionStrategy::Simple`]: the content value if it is
//!   `default` or an allowed style, otherwise `default`.
//! - [`StyleResolutionStrategy::Extended`]: also consults the configured
//!   default style and the resolved element, then the last allowed style.
//!   With no allowed styles at all there is nothing to fall back to and
//!   [`ResolveError::NoFallback`] is returned.
//!
//! An empty allow-list means "unconstrained" when checking the content
//! value: every style input is accepted.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{
    ElementOption, OptionLiteral, StyleInputOption, StyleOption, DEFAULT_ELEMENT_VALUE,
    STYLE_INPUT_VALUES,
};
use crate::validate::{validate_element_value, validate_style_input_value, validate_style_value};

/// Inputs for [`determine_element_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementValueArgs<'a> {
    /// The value stored in the content.
    pub content_value: Option<&'a str>,
    /// The default configured in the plugin options.
    pub default_value: Option<&'a str>,
}

/// Inputs for [`determine_style_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleValueArgs<'a> {
    /// The value stored in the content.
    pub content_value: Option<&'a str>,
    /// The styles configured as allowed, already parsed.
    pub allowed_values: &'a [StyleOption],
}

/// Inputs for [`determine_style_value_extended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedStyleValueArgs<'a> {
    /// The value stored in the content.
    pub content_value: Option<&'a str>,
    /// The default style configured in the plugin options.
    pub default_value: Option<&'a str>,
    /// The styles configured as allowed, already parsed.
    pub allowed_values: &'a [StyleOption],
    /// The currently resolved element.
    pub seo_value: ElementOption,
}

impl<'a> ExtendedStyleValueArgs<'a> {
    fn simple(&self) -> StyleValueArgs<'a> {
        StyleValueArgs {
            content_value: self.content_value,
            allowed_values: self.allowed_values,
        }
    }
}

/// Raised when the extended style chain runs out of candidates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("could not generate a sensible fallback value for the style input")]
    NoFallback,
}

/// Which fallback chain to use for the style value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleResolutionStrategy {
    /// Content value or `default`.
    #[default]
    Simple,
    /// Content value, configured default, element, last allowed style.
    Extended,
}

impl StyleResolutionStrategy {
    /// Resolves a style with this strategy.
    ///
    /// [`StyleResolutionStrategy::Simple`] ignores `default_value` and
    /// `seo_value` and never fails.
    pub fn resolve(
        self,
        args: ExtendedStyleValueArgs<'_>,
    ) -> Result<StyleInputOption, ResolveError> {
        match self {
            StyleResolutionStrategy::Simple => Ok(determine_style_value(args.simple())),
            StyleResolutionStrategy::Extended => determine_style_value_extended(args),
        }
    }
}

/// Resolves the heading element. Always returns a value.
pub fn determine_element_value(args: ElementValueArgs<'_>) -> ElementOption {
    match validate_element_value(args.content_value) {
        Ok(element) => return element,
        Err(err) => trace!(%err, "content element rejected"),
    }

    match validate_element_value(args.default_value) {
        Ok(element) => return element,
        Err(err) => trace!(%err, "default element rejected"),
    }

    DEFAULT_ELEMENT_VALUE
}

/// Resolves the style input with the simple chain. Always returns a value.
pub fn determine_style_value(args: StyleValueArgs<'_>) -> StyleInputOption {
    let allowed = allowed_input_values(args.allowed_values);
    match validate_style_input_value(args.content_value, &allowed) {
        Ok(style) => style,
        Err(err) => {
            trace!(%err, "content style rejected, using default");
            StyleInputOption::Default
        }
    }
}

/// Resolves the style input with the extended chain.
pub fn determine_style_value_extended(
    args: ExtendedStyleValueArgs<'_>,
) -> Result<StyleInputOption, ResolveError> {
    let allowed = allowed_input_values(args.allowed_values);
    match validate_style_input_value(args.content_value, &allowed) {
        Ok(style) => return Ok(style),
        Err(err) => trace!(%err, "content style rejected"),
    }

    // A valid configured default means "follow the element".
    match validate_style_value(args.default_value, args.allowed_values) {
        Ok(_) => return Ok(StyleInputOption::Default),
        Err(err) => trace!(%err, "default style rejected"),
    }

    match validate_style_value(Some(args.seo_value.as_str()), args.allowed_values) {
        Ok(style) => return Ok(style.into()),
        Err(err) => trace!(%err, "element style rejected"),
    }

    args.allowed_values
        .last()
        .copied()
        .map(StyleInputOption::from)
        .ok_or(ResolveError::NoFallback)
}

/// The concrete style a resolved input stands for.
pub fn effective_style(option: StyleInputOption, element: ElementOption) -> StyleOption {
    option.as_style().unwrap_or_else(|| element.as_style())
}

fn allowed_input_values(allowed: &[StyleOption]) -> Vec<StyleInputOption> {
    if allowed.is_empty() {
        return STYLE_INPUT_VALUES.to_vec();
    }
    std::iter::once(StyleInputOption::Default)
        .chain(allowed.iter().copied().map(StyleInputOption::from))
        .collect()
}
