//! Application config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use skene_core::error::{Result, SkeneError};

pub use schema::{AppConfig, AppSection, LocalizationSection, WindowSize};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| SkeneError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| SkeneError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if path.exists() {
        tracing::info!(path = %path.display(), "loading config");
        load_from_file(path)
    } else {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        Ok(AppConfig::default())
    }
}
