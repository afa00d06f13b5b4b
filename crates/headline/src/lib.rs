//! # Headline - heading level and style resolution
//!
//! A headline field stores a text, the semantic heading element it renders
//! as (`h1`..`h6`), and a visual style that may differ from the element or
//! follow it (`default`). Stored content and plugin options are not trusted:
//! this crate turns them into one valid value per field and keeps the style
//! valid when the set of allowed styles changes.
//!
//! ## Layers
//!
//! - **Validation** ([`validate_element_value`], [`validate_style_value`],
//!   [`parse_allowed_style_values`], ...): membership checks that return a
//!   [`Result`], and allow-list parsing that falls back to the full list.
//! - **Resolution** ([`determine_element_value`], [`determine_style_value`],
//!   [`determine_style_value_extended`]): ordered fallback chains over the
//!   validators. Pure functions.
//! - **Hooks** ([`use_element_value`], [`use_style_value`], [`use_headline`]):
//!   resolve once into an [`Observable`] cell, and for the style, re-resolve
//!   whenever an observable allow-list changes.
//!
//! ## Quick start
//!
//! ```rust
//! use headline::{
//!     determine_element_value, determine_style_value, ElementOption, ElementValueArgs,
//!     StyleInputOption, StyleOption, StyleValueArgs,
//! };
//!
//! let element = determine_element_value(ElementValueArgs {
//!     content_value: Some("h7"),
//!     default_value: Some("h3"),
//! });
//! assert_eq!(element, ElementOption::H3);
//!
//! let style = determine_style_value(StyleValueArgs {
//!     content_value: Some("h4"),
//!     allowed_values: &[StyleOption::H1, StyleOption::H2],
//! });
//! assert_eq!(style, StyleInputOption::Default);
//! ```
//!
//! ## Wiring a field
//!
//! ```rust
//! use headline::{use_headline, HeadlineOptions, StoredField, StyleInputOption};
//! use serde_json::json;
//!
//! let options = HeadlineOptions::from_json(r#"{ "allowedStyles": "h1, h2" }"#).unwrap();
//! let field = StoredField::from_json(&json!({
//!     "text": "Welcome",
//!     "element": "h1",
//!     "style": { "value": "h3", "option": "h3" }
//! }));
//!
//! let headline = use_headline(&field, &options, options.allowed_styles_source()).unwrap();
//! assert_eq!(headline.style.get(), StyleInputOption::Default);
//! ```
//!
//! ## Logging
//!
//! Fallbacks are reported through [`tracing`] at `trace`/`debug`, a failed
//! re-resolution inside a watch at `error`. The crate installs no subscriber.

pub mod config;
pub mod constants;
pub mod field;
pub mod hooks;
pub mod reactive;
pub mod resolve;
mod util;
pub mod validate;

pub use config::{ConfigError, HeadlineOptions};
pub use constants::{
    ElementOption, OptionLiteral, SelectOption, StyleInputOption, StyleOption,
    DEFAULT_ELEMENT_VALUE, ELEMENT_OPTIONS, ELEMENT_VALUES, STYLE_INPUT_VALUES, STYLE_OPTIONS,
    STYLE_VALUES,
};
pub use field::{FieldData, FieldStyle, HeadlineField, StoredField};
pub use hooks::{
    use_element_value, use_headline, use_style_value, ElementValueSources, Headline,
    StyleValue, StyleValueSources,
};
pub use reactive::{Observable, Source, Subscription};
pub use resolve::{
    determine_element_value, determine_style_value, determine_style_value_extended,
    effective_style, ElementValueArgs, ExtendedStyleValueArgs, ResolveError,
    StyleResolutionStrategy, StyleValueArgs,
};
pub use util::capitalize;
pub use validate::{
    parse_allowed_style_input_values, parse_allowed_style_values, validate_element_value,
    validate_enum, validate_style_input_value, validate_style_value, ParseError,
    ValidationError,
};
