//! Shared error type across Skene crates.

use thiserror::Error;

/// Stable error categories (used in log fields and by front ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Config file unreadable, malformed, or out of range.
    Config,
    /// Config schema version not supported.
    UnsupportedVersion,
    /// Locale resource could not be loaded.
    Locale,
    /// Requested language is not in the catalog.
    UnknownLanguage,
    /// Front-end input could not be understood.
    BadCommand,
    /// An observer callback reported a failure.
    Observer,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and console output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Locale => "LOCALE",
            ErrorKind::UnknownLanguage => "UNKNOWN_LANGUAGE",
            ErrorKind::BadCommand => "BAD_COMMAND",
            ErrorKind::Observer => "OBSERVER",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SkeneError>;

/// Unified error type used by core and app.
#[derive(Debug, Error)]
pub enum SkeneError {
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("locale {locale}: {reason}")]
    Locale { locale: String, reason: String },
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("bad command: {0}")]
    BadCommand(String),
    #[error("observer failed: {0}")]
    Observer(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SkeneError {
    /// Map an error to its stable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SkeneError::Config(_) => ErrorKind::Config,
            SkeneError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            SkeneError::Locale { .. } => ErrorKind::Locale,
            SkeneError::UnknownLanguage(_) => ErrorKind::UnknownLanguage,
            SkeneError::BadCommand(_) => ErrorKind::BadCommand,
            SkeneError::Observer(_) => ErrorKind::Observer,
            SkeneError::Internal(_) => ErrorKind::Internal,
        }
    }
}
