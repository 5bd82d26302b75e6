//! Current-language translation front for a [`Catalog`].

use std::collections::BTreeMap;

use parking_lot::RwLock;
use skene_core::error::{Result, SkeneError};

use super::catalog::Catalog;

/// Language used for missing keys when it is available.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Translates message ids in the current language.
///
/// Lookup order: current language, fallback language, then the message id
/// itself. The current language is a mutable cell behind its own lock,
/// independent of any other application state.
#[derive(Debug)]
pub struct Localizer {
    catalog: Catalog,
    fallback: String,
    current: RwLock<String>,
}

impl Localizer {
    /// Fails if the catalog is empty or does not contain `language`.
    pub fn new(catalog: Catalog, language: &str) -> Result<Self> {
        let available = catalog.available_languages();
        let Some(first) = available.first() else {
            return Err(SkeneError::Locale {
                locale: language.to_string(),
                reason: "no locales loaded".into(),
            });
        };
        if !catalog.has_language(language) {
            return Err(SkeneError::UnknownLanguage(language.to_string()));
        }

        let fallback = if catalog.has_language(FALLBACK_LANGUAGE) {
            FALLBACK_LANGUAGE.to_string()
        } else {
            first.clone()
        };

        Ok(Self {
            catalog,
            fallback,
            current: RwLock::new(language.to_string()),
        })
    }

    pub fn set_language(&self, language: &str) -> Result<()> {
        if !self.catalog.has_language(language) {
            return Err(SkeneError::UnknownLanguage(language.to_string()));
        }
        let mut cur = self.current.write();
        tracing::debug!(from = %*cur, to = language, "language switched");
        *cur = language.to_string();
        Ok(())
    }

    pub fn current_language(&self) -> String {
        self.current.read().clone()
    }

    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    pub fn available_languages(&self) -> Vec<String> {
        self.catalog.available_languages()
    }

    pub fn language_display_keys(&self) -> BTreeMap<String, String> {
        self.catalog.display_key_map()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translate `key`; returns the key itself when no locale has it.
    pub fn t(&self, key: &str) -> String {
        let cur = self.current.read();
        self.catalog
            .lookup(&cur, key)
            .or_else(|| self.catalog.lookup(&self.fallback, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Translate `key`, then substitute `{name}` placeholders from `args`.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }
}

/// Single-pass `{name}` substitution. Unknown placeholders are left as-is and
/// substituted values are never rescanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(&['{', '}'][..]) {
            Some(close) if after[close..].starts_with('}') => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) => out.push_str(v),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
