//! Resolution of display names across languages.
//!
//! A category is not guaranteed to be translated into every language, nor
//! into the default one. Names are resolved through a fixed chain:
//!
//! 1. the requested locale
//! 2. the default locale
//! 3. the first translation available
//!
//! Translations with a blank name are skipped at every step.

use crate::category::Translation;

/// The locale used when a translation for the requested one is missing.
pub const DEFAULT_LOCALE: &str = "en";

/// Returns the translation to display for `locale`, or `None` when there is
/// no usable translation at all.
pub fn resolve_translation<'a>(
    translations: &'a [Translation],
    locale: &str,
    default_locale: &str,
) -> Option<&'a Translation> {
    let usable = translations
        .iter()
        .filter(|translation| !translation.name.trim().is_empty());

    let for_language =
        |code: &str| usable.clone().find(|translation| translation.language_code == code);

    for_language(locale)
        .or_else(|| for_language(default_locale))
        .or_else(|| usable.clone().next())
}

/// Returns the name to display for `locale`, falling back to `slug` when no
/// translation is usable.
pub fn resolve_label<'a>(
    translations: &'a [Translation],
    slug: &'a str,
    locale: &str,
    default_locale: &str,
) -> &'a str {
    match resolve_translation(translations, locale, default_locale) {
        Some(translation) => {
            if translation.language_code != locale {
                tracing::trace!(
                    slug,
                    locale,
                    fallback = %translation.language_code,
                    "no translation for requested locale"
                );
            }

            &translation.name
        }
        None => {
            tracing::trace!(slug, locale, "no usable translation, using slug");
            slug
        }
    }
}
