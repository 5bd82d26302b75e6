use serde::Deserialize;
use skene_core::error::{Result, SkeneError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub localization: LocalizationSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            app: AppSection::default(),
            localization: LocalizationSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SkeneError::UnsupportedVersion);
        }
        self.app.validate()?;
        self.localization.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_app_id")]
    pub id: String,

    #[serde(default)]
    pub window: WindowSize,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            id: default_app_id(),
            window: WindowSize::default(),
        }
    }
}

impl AppSection {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(SkeneError::Config("app.id must not be empty".into()));
        }
        self.window.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSize {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowSize {
    pub fn validate(&self) -> Result<()> {
        if !(100..=4096).contains(&self.width) {
            return Err(SkeneError::Config(
                "app.window.width must be between 100 and 4096".into(),
            ));
        }
        if !(100..=4096).contains(&self.height) {
            return Err(SkeneError::Config(
                "app.window.height must be between 100 and 4096".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizationSection {
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Extra `<lang>.json` files; these override embedded locales.
    #[serde(default)]
    pub locales_dir: Option<String>,
}

impl Default for LocalizationSection {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            locales_dir: None,
        }
    }
}

impl LocalizationSection {
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(SkeneError::Config(
                "localization.default_language must not be empty".into(),
            ));
        }
        if matches!(&self.locales_dir, Some(d) if d.trim().is_empty()) {
            return Err(SkeneError::Config(
                "localization.locales_dir must not be empty when set".into(),
            ));
        }
        Ok(())
    }
}

fn default_app_id() -> String {
    "com.afa7789.skene".into()
}
fn default_width() -> u32 {
    400
}
fn default_height() -> u32 {
    300
}
fn default_language() -> String {
    "en".into()
}
