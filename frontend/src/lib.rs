//! # Budget Tracker Frontend
//!
//! State behind the profile screen, the settings screen and the theme picker.
//! Nothing here draws anything: a renderer binds its inputs to these
//! operations and displays what the state exposes.
//!
//! ## Module Organization
//!
//! - **state**: profile and settings screen state, and the session owning them
//! - **components**: the theme selector
//! - **services**: preference store, auth and confirmation collaborators,
//!   avatar encoding
//! - **config**: YAML session defaults
//! - **error**: error types

pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

pub use components::{ThemeEntry, ThemeSelector};
pub use config::FrontendConfig;
pub use error::{AvatarError, PreferenceError, SignOutError};
pub use services::{AuthProvider, AvatarUpload, ConfirmationPrompt, LocalAuthProvider, PreferenceStore, ThemeProvider};
pub use state::{ProfileState, SaveAcknowledgement, Session, SettingsState, SignOutOutcome, SignOutStatus};
