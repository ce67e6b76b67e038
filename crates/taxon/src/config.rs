use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use slug::slugify;
use thiserror::Error;

use crate::locale::DEFAULT_LOCALE;
use crate::mapping::{GroupKey, GroupMapping};
use crate::subject::SubjectType;

static BUILTIN_CONFIG: Lazy<TaxonomyConfig> = Lazy::new(TaxonomyConfig::default);

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("failed to read taxonomy config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid taxonomy config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("default locale must not be empty")]
    EmptyDefaultLocale,

    #[error("'{slug}' in {subject} group '{group}' is not a valid slug")]
    InvalidSlug {
        subject: SubjectType,
        group: GroupKey,
        slug: String,
    },

    #[error("'{slug}' is listed in both '{first}' and '{second}' {subject} groups")]
    DuplicateSlug {
        subject: SubjectType,
        slug: String,
        first: GroupKey,
        second: GroupKey,
    },
}

/// The classification tables and default locale used when grouping
/// categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyConfig {
    pub default_locale: String,
    pub festivals: GroupMapping,
    pub groups: GroupMapping,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            festivals: GroupMapping::builtin(SubjectType::Festivals),
            groups: GroupMapping::builtin(SubjectType::Groups),
        }
    }
}

type GroupTable = IndexMap<GroupKey, Vec<String>>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTaxonomyConfig {
    default_locale: Option<String>,
    festivals: Option<GroupTable>,
    groups: Option<GroupTable>,
}

impl TaxonomyConfig {
    /// Returns the shared built-in configuration.
    pub fn builtin() -> &'static TaxonomyConfig {
        &BUILTIN_CONFIG
    }

    /// Reads the configuration from the TOML file at the given path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        tracing::debug!(path = %path.display(), "loading taxonomy config");

        Self::from_toml(&contents)
    }

    /// Parses the configuration from TOML.
    ///
    /// Omitted tables fall back to the built-in ones.
    pub fn from_toml(text: &str) -> Result<Self, LoadConfigError> {
        let raw: RawTaxonomyConfig = toml::from_str(text)?;

        let default_locale = match raw.default_locale {
            Some(locale) if locale.trim().is_empty() => {
                return Err(LoadConfigError::EmptyDefaultLocale)
            }
            Some(locale) => locale,
            None => DEFAULT_LOCALE.to_string(),
        };

        Ok(Self {
            default_locale,
            festivals: Self::build_mapping(SubjectType::Festivals, raw.festivals)?,
            groups: Self::build_mapping(SubjectType::Groups, raw.groups)?,
        })
    }

    /// Returns the mapping used for the given subject type.
    pub fn mapping(&self, subject: SubjectType) -> &GroupMapping {
        match subject {
            SubjectType::Festivals => &self.festivals,
            SubjectType::Groups => &self.groups,
        }
    }

    fn build_mapping(
        subject: SubjectType,
        table: Option<GroupTable>,
    ) -> Result<GroupMapping, LoadConfigError> {
        let Some(table) = table else {
            return Ok(GroupMapping::builtin(subject));
        };

        let mut mapping = GroupMapping::default();

        for (group, slugs) in table {
            for slug in slugs {
                if slugify(&slug) != slug {
                    return Err(LoadConfigError::InvalidSlug {
                        subject,
                        group,
                        slug,
                    });
                }

                if let Some(first) = mapping.insert(slug.clone(), group.clone()) {
                    return Err(LoadConfigError::DuplicateSlug {
                        subject,
                        slug,
                        first,
                        second: group,
                    });
                }
            }
        }

        Ok(mapping)
    }
}
