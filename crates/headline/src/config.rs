//! Plugin options for a headline field.
//!
//! Options arrive as a JSON object of loosely-typed values, the way a CMS
//! hands plugin settings over:
//!
//! ```json
//! {
//!   "defaultElement": "h2",
//!   "defaultStyle": "h3",
//!   "allowedStyles": "h1, h2, h3",
//!   "styleStrategy": "extended"
//! }
//! ```
//!
//! Every member is optional. Values are kept as given and only checked when
//! resolved, so a bad default degrades to the next fallback instead of
//! rejecting the whole configuration. A member that is not a string at all
//! counts as missing. Only `styleStrategy` must be a known name.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{ElementOption, StyleInputOption, StyleOption};
use crate::field::StoredField;
use crate::hooks::{ElementValueSources, StyleValueSources};
use crate::reactive::Source;
use crate::resolve::{determine_element_value, ElementValueArgs, StyleResolutionStrategy};
use crate::validate::{parse_allowed_style_input_values, parse_allowed_style_values};

/// Error loading [`HeadlineOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid headline options: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadlineOptions {
    /// Element used when the content has none.
    #[serde(deserialize_with = "string_or_none")]
    pub default_element: Option<String>,
    /// Style consulted by the extended strategy.
    #[serde(deserialize_with = "string_or_none")]
    pub default_style: Option<String>,
    /// Comma separated allow-list, e.g. `"h1, h2"`.
    #[serde(deserialize_with = "string_or_none")]
    pub allowed_styles: Option<String>,
    pub style_strategy: StyleResolutionStrategy,
}

/// Reads any JSON value, keeping it only if it is a string.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

impl HeadlineOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The allowed styles, or all of them if the list is missing or invalid.
    pub fn allowed_style_values(&self) -> Vec<StyleOption> {
        parse_allowed_style_values(self.allowed_styles.as_deref())
    }

    /// `default` plus the allowed styles, for building the style picker.
    ///
    /// Reads the same `allowedStyles` string, so `default` may be listed
    /// there explicitly.
    pub fn allowed_style_input_values(&self) -> Vec<StyleInputOption> {
        let mut values = parse_allowed_style_input_values(self.allowed_styles.as_deref());
        if !values.contains(&StyleInputOption::Default) {
            values.insert(0, StyleInputOption::Default);
        }
        values
    }

    /// Hook inputs for the element of `field`.
    pub fn element_sources(&self, field: &StoredField) -> ElementValueSources {
        ElementValueSources {
            content_value: Source::fixed(field.element.clone()),
            default_value: Source::fixed(self.default_element.clone()),
        }
    }

    /// Hook inputs for the style of `field`.
    ///
    /// `seo_value` is usually the element cell returned by
    /// [`use_element_value`](crate::use_element_value).
    pub fn style_sources(
        &self,
        field: &StoredField,
        allowed_values: Source<Vec<StyleOption>>,
        seo_value: Source<ElementOption>,
    ) -> StyleValueSources {
        StyleValueSources::new(Source::fixed(field.style_option.clone()), allowed_values)
            .default_value(Source::fixed(self.default_style.clone()))
            .seo_value(seo_value)
            .strategy(self.style_strategy)
    }

    /// A fixed allow-list source built from these options.
    pub fn allowed_styles_source(&self) -> Source<Vec<StyleOption>> {
        Source::fixed(self.allowed_style_values())
    }

    /// The element a field without content falls back to.
    pub fn fallback_element(&self) -> ElementOption {
        determine_element_value(ElementValueArgs {
            content_value: None,
            default_value: self.default_element.as_deref(),
        })
    }
}
