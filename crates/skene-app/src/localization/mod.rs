//! Localization: embedded locale catalog plus the current-language localizer.

pub mod catalog;
pub mod localizer;

pub use catalog::{Catalog, LocaleStrings, DISPLAY_KEY};
pub use localizer::{interpolate, Localizer, FALLBACK_LANGUAGE};
