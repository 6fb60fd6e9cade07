//! Error types surfaced by the screen states.

use shared::{ParseLanguageError, ParseThemeError};

/// Avatar upload failures
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AvatarError {
    #[error("Avatar must be an image, got '{0}'")]
    UnsupportedType(String),
}

/// Preference changes with values outside the known enumerations
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PreferenceError {
    #[error(transparent)]
    UnknownLanguage(#[from] ParseLanguageError),
    #[error(transparent)]
    UnknownTheme(#[from] ParseThemeError),
}

/// Sign-out failures
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SignOutError {
    #[error("Sign-out failed: {0}")]
    Provider(String),
    #[error("Sign-out already in progress")]
    AlreadyInProgress,
}
