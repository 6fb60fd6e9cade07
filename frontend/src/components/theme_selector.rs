//! # Theme Selector
//!
//! The theme picker menu. Lists the fixed theme catalog, highlights the
//! provider's current theme and hands a selection straight to the provider.
//! Keeps no theme state of its own.

use log::info;
use shared::{Theme, ThemeOption, THEME_OPTIONS};
use std::sync::Arc;

use crate::error::PreferenceError;
use crate::services::ThemeProvider;

/// A catalog entry paired with whether it is the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEntry {
    pub option: &'static ThemeOption,
    pub is_active: bool,
}

pub struct ThemeSelector {
    provider: Arc<dyn ThemeProvider>,
}

impl ThemeSelector {
    pub fn new(provider: Arc<dyn ThemeProvider>) -> Self {
        Self { provider }
    }

    /// The six theme options, in menu order
    pub fn options(&self) -> &'static [ThemeOption] {
        &THEME_OPTIONS
    }

    /// Menu item clicked
    pub fn select_theme(&self, theme: Theme) {
        info!("🎨 Theme selected: {}", theme);
        self.provider.set_theme(theme);
    }

    /// Select by the option's value string
    pub fn select_value(&self, value: &str) -> Result<Theme, PreferenceError> {
        let theme: Theme = value.parse()?;
        self.select_theme(theme);
        Ok(theme)
    }

    pub fn is_active(&self, option: &ThemeOption) -> bool {
        self.provider.current_theme() == option.value
    }

    /// Options with their highlight flag, for rendering the menu
    pub fn entries(&self) -> Vec<ThemeEntry> {
        let current = self.provider.current_theme();
        THEME_OPTIONS
            .iter()
            .map(|option| ThemeEntry {
                option,
                is_active: option.value == current,
            })
            .collect()
    }
}
