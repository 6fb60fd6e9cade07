//! Collaborators the screen states talk to.

pub mod auth;
pub mod avatar;
pub mod preferences;

pub use auth::{AuthProvider, ConfirmationPrompt, LocalAuthProvider};
pub use avatar::AvatarUpload;
pub use preferences::{PreferenceStore, ThemeProvider};
