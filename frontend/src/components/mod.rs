//! Framework-agnostic pieces of the screens.

pub mod theme_selector;

pub use theme_selector::{ThemeEntry, ThemeSelector};
