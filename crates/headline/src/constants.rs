//! Heading vocabularies and the picker option tables built from them.
//!
//! Three closed sets drive everything else in the crate:
//!
//! - [`ElementOption`]: the semantic heading element (`h1`..`h6`)
//! - [`StyleOption`]: the visual style (`h1`..`h6`), independent of the element
//! - [`StyleInputOption`]: a [`StyleOption`] or `default`, meaning "look like the element"
//!
//! The value lists and option tables are immutable process-wide data. The
//! option tables are built on first access.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::util::capitalize;
use crate::validate::ValidationError;

/// A closed set of string literals.
///
/// Implemented by the three option enums so the validator can check
/// membership generically instead of hard-coding each literal list.
pub trait OptionLiteral: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The literal this value is written as.
    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup of a literal.
    fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == literal)
    }
}

macro_rules! heading_enum {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            H1,
            H2,
            H3,
            H4,
            H5,
            H6,
        }

        impl OptionLiteral for $name {
            const ALL: &'static [Self] = &[
                $name::H1,
                $name::H2,
                $name::H3,
                $name::H4,
                $name::H5,
                $name::H6,
            ];

            fn as_str(self) -> &'static str {
                match self {
                    $name::H1 => "h1",
                    $name::H2 => "h2",
                    $name::H3 => "h3",
                    $name::H4 => "h4",
                    $name::H5 => "h5",
                    $name::H6 => "h6",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_literal(s).ok_or_else(|| ValidationError::new(Some(s), Self::ALL))
            }
        }
    };
}

heading_enum!(
    /// The semantic HTML heading element a headline is rendered as.
    ElementOption
);

heading_enum!(
    /// The visual heading style, applied independently of the element.
    StyleOption
);

impl ElementOption {
    /// The visual style that matches this element one-to-one.
    pub fn as_style(self) -> StyleOption {
        match self {
            ElementOption::H1 => StyleOption::H1,
            ElementOption::H2 => StyleOption::H2,
            ElementOption::H3 => StyleOption::H3,
            ElementOption::H4 => StyleOption::H4,
            ElementOption::H5 => StyleOption::H5,
            ElementOption::H6 => StyleOption::H6,
        }
    }
}

/// A style as chosen in the editor: a concrete style or `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleInputOption {
    /// Inherit the style of the resolved element.
    #[default]
    Default,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl StyleInputOption {
    /// The concrete style, or `None` for [`StyleInputOption::Default`].
    pub fn as_style(self) -> Option<StyleOption> {
        match self {
            StyleInputOption::Default => None,
            StyleInputOption::H1 => Some(StyleOption::H1),
            StyleInputOption::H2 => Some(StyleOption::H2),
            StyleInputOption::H3 => Some(StyleOption::H3),
            StyleInputOption::H4 => Some(StyleOption::H4),
            StyleInputOption::H5 => Some(StyleOption::H5),
            StyleInputOption::H6 => Some(StyleOption::H6),
        }
    }
}

impl OptionLiteral for StyleInputOption {
    const ALL: &'static [Self] = &[
        StyleInputOption::Default,
        StyleInputOption::H1,
        StyleInputOption::H2,
        StyleInputOption::H3,
        StyleInputOption::H4,
        StyleInputOption::H5,
        StyleInputOption::H6,
    ];

    fn as_str(self) -> &'static str {
        match self.as_style() {
            Some(style) => style.as_str(),
            None => "default",
        }
    }
}

impl From<StyleOption> for StyleInputOption {
    fn from(style: StyleOption) -> Self {
        match style {
            StyleOption::H1 => StyleInputOption::H1,
            StyleOption::H2 => StyleInputOption::H2,
            StyleOption::H3 => StyleInputOption::H3,
            StyleOption::H4 => StyleInputOption::H4,
            StyleOption::H5 => StyleInputOption::H5,
            StyleOption::H6 => StyleInputOption::H6,
        }
    }
}

impl fmt::Display for StyleInputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleInputOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s).ok_or_else(|| ValidationError::new(Some(s), Self::ALL))
    }
}

/// All heading elements, in order.
pub const ELEMENT_VALUES: &[ElementOption] = ElementOption::ALL;

/// Element used when neither the content nor the configuration names a valid one.
pub const DEFAULT_ELEMENT_VALUE: ElementOption = ElementOption::H2;

/// All visual styles, in order.
pub const STYLE_VALUES: &[StyleOption] = StyleOption::ALL;

/// `default` followed by every visual style.
pub const STYLE_INPUT_VALUES: &[StyleInputOption] = StyleInputOption::ALL;

/// One entry of a picker: what the editor shows and what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    pub label: String,
    pub value: T,
}

impl<T: OptionLiteral> SelectOption<T> {
    /// Builds an option labelled with the capitalized literal (`h1` -> `H1`).
    pub fn labelled(value: T) -> Self {
        Self {
            label: capitalize(value.as_str()),
            value,
        }
    }
}

/// Picker entries for the element selector.
pub static ELEMENT_OPTIONS: Lazy<Vec<SelectOption<ElementOption>>> =
    Lazy::new(|| ELEMENT_VALUES.iter().copied().map(SelectOption::labelled).collect());

/// Picker entries for the style selector, `Default` first.
pub static STYLE_OPTIONS: Lazy<Vec<SelectOption<StyleInputOption>>> = Lazy::new(|| {
    STYLE_INPUT_VALUES
        .iter()
        .copied()
        .map(SelectOption::labelled)
        .collect()
});
