//! Locale catalog: message tables keyed by language code.
//!
//! Locale files are flat JSON objects (`"message_id": "translation"`). The
//! language code is the file stem. A file may name its own display key via
//! the `display_key` entry; menus translate that key to label the language.
//!
//! The catalog is immutable after construction. Loading is fail-fast: a
//! locale that does not parse aborts the whole load.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use skene_core::error::{Result, SkeneError};

/// Entry naming the message id that labels a locale in menus.
pub const DISPLAY_KEY: &str = "display_key";

const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("es", include_str!("../../locales/es.json")),
    ("pt", include_str!("../../locales/pt.json")),
];

/// Messages for a single language.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    messages: HashMap<String, String>,
    display_key: Option<String>,
}

impl LocaleStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a locale file body. `locale` is only used for error context.
    pub fn from_json(locale: &str, body: &str) -> Result<Self> {
        let obj: Map<String, Value> = serde_json::from_str(body).map_err(|e| SkeneError::Locale {
            locale: locale.to_string(),
            reason: format!("invalid json: {e}"),
        })?;

        let mut out = Self::new();
        for (key, value) in obj {
            let text = match value {
                Value::String(s) => s,
                other => {
                    return Err(SkeneError::Locale {
                        locale: locale.to_string(),
                        reason: format!("message {key} must be a string, got {other}"),
                    })
                }
            };
            if key == DISPLAY_KEY {
                out.display_key = Some(text.clone());
            }
            out.messages.insert(key, text);
        }
        Ok(out)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == DISPLAY_KEY {
            self.display_key = Some(value.clone());
        }
        self.messages.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn display_key(&self) -> Option<&str> {
        self.display_key.as_deref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// All loaded locales, ordered by language code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleStrings>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locales compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::new();
        for (code, body) in EMBEDDED {
            catalog.add_locale(*code, LocaleStrings::from_json(code, body)?);
        }
        Ok(catalog)
    }

    /// Embedded locales, then every `<lang>.json` in `dir` (overriding on conflict).
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let mut catalog = Self::embedded()?;
        if let Some(dir) = dir {
            catalog.load_dir(dir)?;
        }
        tracing::info!(languages = ?catalog.available_languages(), "locale catalog loaded");
        Ok(catalog)
    }

    pub fn load_dir(&mut self, dir: &Path) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| SkeneError::Locale {
            locale: dir.display().to_string(),
            reason: format!("read locales dir failed: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SkeneError::Locale {
                locale: dir.display().to_string(),
                reason: format!("read locales dir failed: {e}"),
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            validate_code(code)?;

            let body = fs::read_to_string(&path).map_err(|e| SkeneError::Locale {
                locale: code.to_string(),
                reason: format!("read {} failed: {e}", path.display()),
            })?;
            let strings = LocaleStrings::from_json(code, &body)?;
            if self.locales.contains_key(code) {
                tracing::debug!(locale = code, path = %path.display(), "overriding embedded locale");
            }
            self.add_locale(code, strings);
        }
        Ok(())
    }

    pub fn add_locale(&mut self, code: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(code.into(), strings);
    }

    /// Language codes, sorted.
    pub fn available_languages(&self) -> Vec<String> {
        self.locales.keys().cloned().collect()
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.locales.get(code)?.get(key)
    }

    /// Language code -> display key. Falls back to the code itself.
    pub fn display_key_map(&self) -> BTreeMap<String, String> {
        self.locales
            .iter()
            .map(|(code, strings)| {
                let key = strings.display_key().unwrap_or(code.as_str()).to_string();
                (code.clone(), key)
            })
            .collect()
    }
}

fn validate_code(code: &str) -> Result<()> {
    let ok = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(SkeneError::Locale {
            locale: code.to_string(),
            reason: "language code must be ascii alphanumeric, '-' or '_'".into(),
        })
    }
}
