//! # State
//!
//! Screen state for the profile and settings screens, and the session that
//! owns them.
//!
//! - **profile_state**: profile record, edit draft, avatar changes
//! - **settings_state**: payroll date, budget warning, categories, sign-out
//! - **session**: lifecycle owner that injects the shared preference store

pub mod profile_state;
pub mod session;
pub mod settings_state;

pub use profile_state::ProfileState;
pub use session::Session;
pub use settings_state::{SaveAcknowledgement, SettingsState, SignOutOutcome, SignOutStatus};
