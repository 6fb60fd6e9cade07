//! # Preferences
//!
//! Theme and language are owned by a single store shared by every screen.
//! The profile screen, the settings screen and the theme picker all read and
//! write through it, so a change made on one screen is what the others see.
//!
//! Persisting the preferences across sessions is the provider's job and is
//! not done here.

use log::info;
use shared::{Language, Theme};
use std::sync::{Mutex, PoisonError};

/// Owner of the current visual theme
pub trait ThemeProvider: Send + Sync {
    /// Theme currently applied
    fn current_theme(&self) -> Theme;

    /// Apply a new theme. Fire and forget.
    fn set_theme(&self, theme: Theme);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Preferences {
    language: Language,
    theme: Theme,
}

/// In-memory preference store, the canonical source for theme and language
#[derive(Debug)]
pub struct PreferenceStore {
    current: Mutex<Preferences>,
}

impl PreferenceStore {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self {
            current: Mutex::new(Preferences { language, theme }),
        }
    }

    pub fn language(&self) -> Language {
        self.snapshot().language
    }

    pub fn set_language(&self, language: Language) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if current.language != language {
            info!("Language changed: {} -> {}", current.language, language);
        }
        current.language = language;
    }

    fn snapshot(&self) -> Preferences {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Language::default(), Theme::default())
    }
}

impl ThemeProvider for PreferenceStore {
    fn current_theme(&self) -> Theme {
        self.snapshot().theme
    }

    fn set_theme(&self, theme: Theme) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if current.theme != theme {
            info!("Theme changed: {} -> {}", current.theme, theme);
        }
        current.theme = theme;
    }
}
