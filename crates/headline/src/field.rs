//! The persisted shape of a headline field.
//!
//! [`FieldData`] is what the editor writes: either nothing (stored as the
//! empty string `""`) or a [`HeadlineField`]. Stored content is not trusted
//! on the way back in, so [`StoredField`] reads it leniently as plain strings
//! and leaves validation to the resolver.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{ElementOption, StyleInputOption, StyleOption};
use crate::resolve::effective_style;

/// The chosen style and the concrete style it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStyle {
    /// Concrete style to render with.
    pub value: StyleOption,
    /// What the editor selected, possibly `default`.
    pub option: StyleInputOption,
}

/// A filled-in headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineField {
    pub text: String,
    pub element: ElementOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FieldStyle>,
}

impl HeadlineField {
    /// Builds a field, making a `default` style concrete from `element`.
    pub fn new(text: impl Into<String>, element: ElementOption, option: StyleInputOption) -> Self {
        Self {
            text: text.into(),
            element,
            style: Some(FieldStyle {
                value: effective_style(option, element),
                option,
            }),
        }
    }
}

/// Field content: empty or a headline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub enum FieldData {
    #[default]
    Empty,
    Heading(HeadlineField),
}

impl FieldData {
    pub fn as_heading(&self) -> Option<&HeadlineField> {
        match self {
            FieldData::Heading(field) => Some(field),
            FieldData::Empty => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FieldRepr {
    Heading(HeadlineField),
    Blank(String),
}

impl TryFrom<FieldRepr> for FieldData {
    type Error = String;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        match repr {
            FieldRepr::Heading(field) => Ok(FieldData::Heading(field)),
            FieldRepr::Blank(s) if s.is_empty() => Ok(FieldData::Empty),
            FieldRepr::Blank(s) => Err(format!(
                "expected an empty string or a headline object, got '{}'",
                s
            )),
        }
    }
}

impl From<FieldData> for FieldRepr {
    fn from(data: FieldData) -> Self {
        match data {
            FieldData::Empty => FieldRepr::Blank(String::new()),
            FieldData::Heading(field) => FieldRepr::Heading(field),
        }
    }
}

/// Stored content read without validation.
///
/// Any member that is missing or not a string reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredField {
    pub text: Option<String>,
    pub element: Option<String>,
    pub style_option: Option<String>,
}

impl StoredField {
    pub fn from_json(value: &Value) -> Self {
        let text = |v: &Value, key: &str| v.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            text: text(value, "text"),
            element: text(value, "element"),
            style_option: value.get("style").and_then(|style| text(style, "option")),
        }
    }
}

impl From<&FieldData> for StoredField {
    fn from(data: &FieldData) -> Self {
        match data.as_heading() {
            Some(field) => Self {
                text: Some(field.text.clone()),
                element: Some(field.element.to_string()),
                style_option: field.style.map(|s| s.option.to_string()),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_serializes_as_empty_string() {
        let json = serde_json::to_value(FieldData::Empty).unwrap();
        assert_eq!(json, json!(""));
        let back: FieldData = serde_json::from_value(json!("")).unwrap();
        assert_eq!(back, FieldData::Empty);
    }

    #[test]
    fn test_non_empty_string_is_rejected() {
        let result: Result<FieldData, _> = serde_json::from_value(json!("hello"));
        assert!(result.is_err());
    }

    #[test]
    fn test_heading_shape() {
        let data = FieldData::Heading(HeadlineField::new(
            "Title",
            ElementOption::H1,
            StyleInputOption::Default,
        ));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            json!({
                "text": "Title",
                "element": "h1",
                "style": { "value": "h1", "option": "default" }
            })
        );
        let back: FieldData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_heading_without_style() {
        let data: FieldData =
            serde_json::from_value(json!({ "text": "x", "element": "h3" })).unwrap();
        let field = data.as_heading().unwrap();
        assert_eq!(field.element, ElementOption::H3);
        assert!(field.style.is_none());
    }

    #[test]
    fn test_explicit_style_keeps_its_value() {
        let field = HeadlineField::new("x", ElementOption::H1, StyleInputOption::H4);
        assert_eq!(
            field.style,
            Some(FieldStyle {
                value: StyleOption::H4,
                option: StyleInputOption::H4
            })
        );
    }

    #[test]
    fn test_stored_field_is_lenient() {
        let stored = StoredField::from_json(&json!({
            "text": "Hi",
            "element": "h9",
            "style": { "option": 3 }
        }));
        assert_eq!(stored.text.as_deref(), Some("Hi"));
        assert_eq!(stored.element.as_deref(), Some("h9"));
        assert_eq!(stored.style_option, None);

        assert_eq!(StoredField::from_json(&json!("")), StoredField::default());
        assert_eq!(StoredField::from_json(&json!(null)), StoredField::default());
    }

    #[test]
    fn test_stored_field_from_field_data() {
        let data = FieldData::Heading(HeadlineField::new(
            "T",
            ElementOption::H2,
            StyleInputOption::H5,
        ));
        let stored = StoredField::from(&data);
        assert_eq!(stored.element.as_deref(), Some("h2"));
        assert_eq!(stored.style_option.as_deref(), Some("h5"));
        assert_eq!(StoredField::from(&FieldData::Empty), StoredField::default());
    }
}
