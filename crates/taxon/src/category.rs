use std::fmt;

use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

use crate::locale::resolve_label;

/// The identifier of a [`Category`].
///
/// Categories coming out of the database carry integer ids, but ids received
/// back from a form or a query string are strings, so both are accepted.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Int(i64),
    Str(String),
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for CategoryId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// The name of a [`Category`] in a single language.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language_code: String,
    pub name: String,
}

impl Translation {
    pub fn new(language_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            name: name.into(),
        }
    }
}

/// A tag that can be applied to a festival or a group.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// The machine-readable key used to place the category in a group.
    pub slug: String,

    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Category {
    /// Returns a new [`Category`] without any translations.
    pub fn new(id: impl Into<CategoryId>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            translations: Vec::new(),
        }
    }

    /// Adds a translation for the given language.
    pub fn with_translation(mut self, language_code: &str, name: &str) -> Self {
        self.translations.push(Translation::new(language_code, name));
        self
    }

    /// Returns the display name of this category in the given locale.
    ///
    /// Falls back to `default_locale`, then to the first translation, and
    /// finally to the slug.
    pub fn label(&self, locale: &str, default_locale: &str) -> &str {
        resolve_label(&self.translations, &self.slug, locale, default_locale)
    }
}

/// An ordered snapshot of categories, as handed over by the data layer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref, DerefMut, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(Vec<Category>);

impl Categories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    pub fn into_inner(self) -> Vec<Category> {
        self.0
    }
}

impl From<Vec<Category>> for Categories {
    fn from(value: Vec<Category>) -> Self {
        Self(value)
    }
}

impl FromIterator<Category> for Categories {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
