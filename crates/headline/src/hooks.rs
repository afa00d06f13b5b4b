//! Live cells holding the resolved element and style.
//!
//! Both hooks resolve once from the current values of their sources and
//! hand back an [`Observable`]. They differ in what happens afterwards:
//!
//! - [`use_element_value`] never re-resolves. Later changes to its sources
//!   are not observed.
//! - [`use_style_value`] watches the allow-list when it is an
//!   [`Source::Observable`]. On each change it re-resolves using the cell's
//!   *current* value as the content value, so the originally stored style is
//!   not consulted again. Shrinking the allow-list can therefore reset the
//!   cell to `default` for good.
//!
//! # Example
//!
//! ```rust
//! use headline::{
//!     use_style_value, Observable, Source, StyleInputOption, StyleOption, StyleValueSources,
//! };
//!
//! let allowed = Observable::new(vec![StyleOption::H1, StyleOption::H2, StyleOption::H3]);
//! let style = use_style_value(StyleValueSources::new(
//!     Source::fixed(Some("h3".to_string())),
//!     Source::from(allowed.clone()),
//! ))
//! .unwrap();
//! assert_eq!(style.get(), StyleInputOption::H3);
//!
//! allowed.set(vec![StyleOption::H1, StyleOption::H2]);
//! assert_eq!(style.get(), StyleInputOption::Default);
//! ```

use tracing::{debug, error};

use crate::config::HeadlineOptions;
use crate::constants::{
    ElementOption, OptionLiteral, StyleInputOption, StyleOption, DEFAULT_ELEMENT_VALUE,
};
use crate::field::{FieldData, HeadlineField, StoredField};
use crate::reactive::{Observable, Source, Subscription};
use crate::resolve::{
    determine_element_value, effective_style, ElementValueArgs, ExtendedStyleValueArgs,
    ResolveError, StyleResolutionStrategy,
};

/// Inputs for [`use_element_value`].
#[derive(Debug, Clone, Default)]
pub struct ElementValueSources {
    /// The value from the stored content.
    pub content_value: Source<Option<String>>,
    /// The default configured in the plugin options.
    pub default_value: Source<Option<String>>,
}

/// Inputs for [`use_style_value`].
#[derive(Debug, Clone)]
pub struct StyleValueSources {
    /// The value from the stored content.
    pub content_value: Source<Option<String>>,
    /// The allowed styles, parsed. Watched if observable.
    pub allowed_values: Source<Vec<StyleOption>>,
    /// The default style configured in the plugin options.
    pub default_value: Source<Option<String>>,
    /// The currently resolved element.
    pub seo_value: Source<ElementOption>,
    pub strategy: StyleResolutionStrategy,
}

impl StyleValueSources {
    /// Sources for the simple strategy with no default and an `h2` element.
    pub fn new(
        content_value: Source<Option<String>>,
        allowed_values: Source<Vec<StyleOption>>,
    ) -> Self {
        Self {
            content_value,
            allowed_values,
            default_value: Source::Static(None),
            seo_value: Source::Static(DEFAULT_ELEMENT_VALUE),
            strategy: StyleResolutionStrategy::default(),
        }
    }

    pub fn default_value(mut self, default_value: Source<Option<String>>) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn seo_value(mut self, seo_value: Source<ElementOption>) -> Self {
        self.seo_value = seo_value;
        self
    }

    pub fn strategy(mut self, strategy: StyleResolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// The resolved style cell and, if the allow-list is observable, the
/// subscription keeping it in sync.
///
/// Dropping this stops the watch. Clones of [`StyleValue::cell`] stay valid
/// but no longer follow allow-list changes.
#[derive(Debug)]
pub struct StyleValue {
    cell: Observable<StyleInputOption>,
    watch: Option<Subscription>,
}

impl StyleValue {
    pub fn cell(&self) -> &Observable<StyleInputOption> {
        &self.cell
    }

    pub fn get(&self) -> StyleInputOption {
        self.cell.get()
    }

    /// Stores a new selection, e.g. from the style picker.
    pub fn set(&self, value: StyleInputOption) {
        self.cell.set(value);
    }

    /// Whether allow-list changes are being followed.
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }
}

/// Resolves the element once and returns it as a cell.
pub fn use_element_value(sources: &ElementValueSources) -> Observable<ElementOption> {
    let content = sources.content_value.read();
    let default = sources.default_value.read();
    Observable::new(determine_element_value(ElementValueArgs {
        content_value: content.as_deref(),
        default_value: default.as_deref(),
    }))
}

/// Resolves the style and keeps it valid as the allow-list changes.
///
/// Fails only when the extended strategy finds no fallback at creation
/// time. If that happens later, inside the watch, the cell keeps its
/// previous value.
pub fn use_style_value(sources: StyleValueSources) -> Result<StyleValue, ResolveError> {
    let content = sources.content_value.read();
    let initial = resolve_style(&sources, content.as_deref(), &sources.allowed_values.read())?;
    let cell = Observable::new(initial);

    let watch = sources.allowed_values.as_observable().map(|allowed| {
        let cell = cell.clone();
        let sources = sources.clone();
        allowed.subscribe(move |allowed: &Vec<StyleOption>| {
            let current = cell.get();
            match resolve_style(&sources, Some(current.as_str()), allowed) {
                Ok(next) => {
                    if next != current {
                        debug!(from = %current, to = %next, "style no longer allowed");
                    }
                    cell.set(next);
                }
                Err(err) => error!(%err, style = %current, "keeping previous style"),
            }
        })
    });

    Ok(StyleValue { cell, watch })
}

fn resolve_style(
    sources: &StyleValueSources,
    content_value: Option<&str>,
    allowed_values: &[StyleOption],
) -> Result<StyleInputOption, ResolveError> {
    let default = sources.default_value.read();
    sources.strategy.resolve(ExtendedStyleValueArgs {
        content_value,
        default_value: default.as_deref(),
        allowed_values,
        seo_value: sources.seo_value.read(),
    })
}

/// Element and style cells for one headline field.
#[derive(Debug)]
pub struct Headline {
    pub text: String,
    pub element: Observable<ElementOption>,
    pub style: StyleValue,
}

impl Headline {
    /// The field as it would be saved now.
    pub fn field_data(&self) -> FieldData {
        FieldData::Heading(HeadlineField::new(
            self.text.clone(),
            self.element.get(),
            self.style.get(),
        ))
    }

    /// The concrete style to render with.
    pub fn effective_style(&self) -> StyleOption {
        effective_style(self.style.get(), self.element.get())
    }
}

/// Wires both hooks for a stored field.
///
/// The style hook reads the element cell, so the extended strategy sees
/// element changes made through [`Headline::element`].
pub fn use_headline(
    field: &StoredField,
    options: &HeadlineOptions,
    allowed_values: Source<Vec<StyleOption>>,
) -> Result<Headline, ResolveError> {
    let element = use_element_value(&options.element_sources(field));
    let style = use_style_value(options.style_sources(
        field,
        allowed_values,
        Source::from(element.clone()),
    ))?;

    Ok(Headline {
        text: field.text.clone().unwrap_or_default(),
        element,
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn text(s: &str) -> Source<Option<String>> {
        Source::fixed(Some(s.to_string()))
    }

    fn styles(list: &[StyleOption]) -> Observable<Vec<StyleOption>> {
        Observable::new(list.to_vec())
    }

    #[test]
    fn test_element_value_resolves_once() {
        let content = Rc::new(Cell::new("h4"));
        let content_clone = Rc::clone(&content);
        let sources = ElementValueSources {
            content_value: Source::getter(move || Some(content_clone.get().to_string())),
            default_value: text("h1"),
        };

        let element = use_element_value(&sources);
        assert_eq!(element.get(), ElementOption::H4);

        content.set("h6");
        assert_eq!(element.get(), ElementOption::H4);
    }

    #[test]
    fn test_element_value_ignores_observable_updates() {
        let content = Observable::new(Some("h3".to_string()));
        let sources = ElementValueSources {
            content_value: Source::from(content.clone()),
            default_value: Source::default(),
        };
        let element = use_element_value(&sources);

        content.set(Some("h1".to_string()));
        assert_eq!(element.get(), ElementOption::H3);
        assert_eq!(content.subscriber_count(), 0);
    }

    #[test]
    fn test_element_value_uses_configured_default() {
        let sources = ElementValueSources {
            content_value: Source::default(),
            default_value: text("h5"),
        };
        assert_eq!(use_element_value(&sources).get(), ElementOption::H5);
    }

    #[test]
    fn test_style_value_static_allow_list_is_not_watched() {
        let style = use_style_value(StyleValueSources::new(
            text("h2"),
            Source::fixed(vec![StyleOption::H2]),
        ))
        .unwrap();
        assert_eq!(style.get(), StyleInputOption::H2);
        assert!(!style.is_watching());
    }

    #[test]
    fn test_style_value_getter_allow_list_is_not_watched() {
        let style = use_style_value(StyleValueSources::new(
            text("h2"),
            Source::getter(|| vec![StyleOption::H1]),
        ))
        .unwrap();
        assert_eq!(style.get(), StyleInputOption::Default);
        assert!(!style.is_watching());
    }

    #[test]
    fn test_style_value_falls_back_when_allow_list_shrinks() {
        let allowed = styles(&[StyleOption::H1, StyleOption::H2, StyleOption::H3]);
        let style =
            use_style_value(StyleValueSources::new(text("h3"), Source::from(allowed.clone())))
                .unwrap();
        assert_eq!(style.get(), StyleInputOption::H3);
        assert!(style.is_watching());

        allowed.set(vec![StyleOption::H1, StyleOption::H2]);
        assert_eq!(style.get(), StyleInputOption::Default);
    }

    #[test]
    fn test_style_value_does_not_recover_original_content() {
        let allowed = styles(&[StyleOption::H3]);
        let style =
            use_style_value(StyleValueSources::new(text("h3"), Source::from(allowed.clone())))
                .unwrap();

        allowed.set(vec![StyleOption::H1]);
        allowed.set(vec![StyleOption::H1, StyleOption::H3]);
        assert_eq!(style.get(), StyleInputOption::Default);
    }

    #[test]
    fn test_style_value_keeps_value_still_allowed() {
        let allowed = styles(&[StyleOption::H1, StyleOption::H2]);
        let style =
            use_style_value(StyleValueSources::new(text("h1"), Source::from(allowed.clone())))
                .unwrap();

        allowed.set(vec![StyleOption::H1, StyleOption::H5]);
        assert_eq!(style.get(), StyleInputOption::H1);
        assert_eq!(style.cell().version(), 0);
    }

    #[test]
    fn test_style_value_revalidates_user_selection() {
        let allowed = styles(&[StyleOption::H1, StyleOption::H2]);
        let style = use_style_value(StyleValueSources::new(
            Source::default(),
            Source::from(allowed.clone()),
        ))
        .unwrap();
        assert_eq!(style.get(), StyleInputOption::Default);

        style.set(StyleInputOption::H2);
        allowed.set(vec![StyleOption::H1]);
        assert_eq!(style.get(), StyleInputOption::Default);
    }

    #[test]
    fn test_dropping_style_value_stops_watch() {
        let allowed = styles(&[StyleOption::H3]);
        let style =
            use_style_value(StyleValueSources::new(text("h3"), Source::from(allowed.clone())))
                .unwrap();
        let cell = style.cell().clone();
        drop(style);

        allowed.set(vec![StyleOption::H1]);
        assert_eq!(cell.get(), StyleInputOption::H3);
    }

    #[test]
    fn test_extended_strategy_uses_element_on_change() {
        let allowed = styles(&[StyleOption::H4, StyleOption::H5]);
        let element = Observable::new(ElementOption::H5);
        let style = use_style_value(
            StyleValueSources::new(text("h4"), Source::from(allowed.clone()))
                .seo_value(Source::from(element.clone()))
                .strategy(StyleResolutionStrategy::Extended),
        )
        .unwrap();
        assert_eq!(style.get(), StyleInputOption::H4);

        allowed.set(vec![StyleOption::H5, StyleOption::H6]);
        assert_eq!(style.get(), StyleInputOption::H5);
    }

    #[test]
    fn test_extended_strategy_initial_failure_is_returned() {
        let result = use_style_value(
            StyleValueSources::new(text("bogus"), Source::fixed(Vec::new()))
                .strategy(StyleResolutionStrategy::Extended),
        );
        assert_eq!(result.unwrap_err(), ResolveError::NoFallback);
    }

    #[test]
    fn test_extended_strategy_empty_allow_list_in_watch() {
        let allowed = styles(&[StyleOption::H2]);
        let style = use_style_value(
            StyleValueSources::new(text("h2"), Source::from(allowed.clone()))
                .strategy(StyleResolutionStrategy::Extended),
        )
        .unwrap();

        allowed.set(Vec::new());
        // An empty allow-list accepts any current value, so no fallback is needed.
        assert_eq!(style.get(), StyleInputOption::H2);
    }

    #[test]
    fn test_use_headline_round_trip() {
        let field = StoredField {
            text: Some("Hello".to_string()),
            element: Some("h1".to_string()),
            style_option: Some("default".to_string()),
        };
        let options = HeadlineOptions::default();
        let headline = use_headline(&field, &options, options.allowed_styles_source()).unwrap();

        assert_eq!(headline.element.get(), ElementOption::H1);
        assert_eq!(headline.style.get(), StyleInputOption::Default);
        assert_eq!(headline.effective_style(), StyleOption::H1);
        assert_eq!(
            headline.field_data(),
            FieldData::Heading(HeadlineField::new(
                "Hello",
                ElementOption::H1,
                StyleInputOption::Default
            ))
        );
    }
}
