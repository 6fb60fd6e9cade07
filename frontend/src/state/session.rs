//! # Session
//!
//! Owns the screen states for one signed-in session. Created when the session
//! starts, handed to each screen, and consumed by [`Session::end`].
//!
//! All screens share one [`PreferenceStore`], so theme and language changes
//! made anywhere are seen everywhere.

use log::info;
use std::sync::Arc;

use crate::components::ThemeSelector;
use crate::config::FrontendConfig;
use crate::services::{AuthProvider, PreferenceStore, ThemeProvider};
use crate::state::{ProfileState, SettingsState};

pub struct Session {
    preferences: Arc<PreferenceStore>,
    profile: ProfileState,
    settings: SettingsState,
    theme_selector: ThemeSelector,
}

impl Session {
    /// Start a session from the configured defaults
    pub fn start(config: FrontendConfig, auth: Arc<dyn AuthProvider>) -> Self {
        let FrontendConfig {
            profile,
            preferences,
            settings,
        } = config;

        let preference_store = Arc::new(PreferenceStore::new(preferences.language, preferences.theme));
        let profile = profile.into_profile();
        info!(
            "Session started for {} ({}), language={}, theme={}",
            profile.name, profile.id, preferences.language, preferences.theme
        );

        Self {
            profile: ProfileState::new(profile, preference_store.clone()),
            settings: SettingsState::new(settings, preference_store.clone(), auth),
            theme_selector: ThemeSelector::new(preference_store.clone()),
            preferences: preference_store,
        }
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileState {
        &mut self.profile
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    pub fn theme_selector(&self) -> &ThemeSelector {
        &self.theme_selector
    }

    /// Tear the session down
    pub fn end(self) {
        info!(
            "Session ended for {} (payroll_date={}, threshold={}%, theme={}, sign-out={:?})",
            self.profile.profile().id,
            self.settings.payroll_date(),
            self.settings.budget_warning_threshold(),
            self.preferences.current_theme(),
            self.settings.sign_out_status()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreferenceDefaults;
    use crate::services::LocalAuthProvider;
    use shared::{Language, ProfileField, Theme};

    fn setup_test() -> Session {
        let config = FrontendConfig {
            preferences: PreferenceDefaults {
                language: Language::Id,
                theme: Theme::Blue,
            },
            ..FrontendConfig::default()
        };
        Session::start(config, Arc::new(LocalAuthProvider::new("Megumi")))
    }

    #[test]
    fn test_start_uses_config() {
        let session = setup_test();
        assert_eq!(session.profile().profile().name, "Megumi");
        assert!(session.profile().profile().is_logged_in);
        assert_eq!(session.settings().payroll_date(), 28);
        assert_eq!(session.profile().theme(), Theme::Blue);
        assert!(session.theme_selector().is_active(Theme::Blue.option()));
    }

    #[test]
    fn test_theme_has_one_source_of_truth() {
        let mut session = setup_test();

        session.theme_selector().select_theme(Theme::Pink);
        assert_eq!(session.profile().theme(), Theme::Pink);

        session.profile_mut().set_theme(Theme::Dark);
        assert!(session.theme_selector().is_active(Theme::Dark.option()));
        assert_eq!(session.preferences().current_theme(), Theme::Dark);
    }

    #[test]
    fn test_language_has_one_source_of_truth() {
        let mut session = setup_test();

        session.settings_mut().set_language("en").unwrap();
        assert_eq!(session.profile().language(), Language::En);

        session.profile_mut().set_language(Language::Id);
        assert_eq!(session.settings().language(), Language::Id);
    }

    #[test]
    fn test_screens_are_independent() {
        let mut session = setup_test();
        session.profile_mut().begin_edit();
        session.profile_mut().update_draft_field(ProfileField::Name, "Alice");
        session.settings_mut().set_payroll_date("5");

        assert!(session.profile().is_editing());
        assert_eq!(session.settings().payroll_date(), 5);
        assert_eq!(session.profile().profile().name, "Megumi");

        session.end();
    }

    #[tokio::test]
    async fn test_sign_out_through_session() {
        let mut session = setup_test();
        assert_eq!(session.settings().current_user().as_deref(), Some("Megumi"));

        session.settings().sign_out(&|_: &str| true).await.unwrap();
        assert_eq!(session.settings().current_user(), None);
    }
}
