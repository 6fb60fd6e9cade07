//! # Frontend Configuration
//!
//! Session defaults read from a single YAML file, `config.yaml` in the
//! platform config directory unless a path is given.
//!
//! ## YAML Format
//!
//! ```yaml
//! profile:
//!   name: "Megumi"
//!   email: "megumi@example.com"
//!   avatar: "/professional-avatar.png"
//! preferences:
//!   language: id
//!   theme: light
//! settings:
//!   payroll_date: 28
//!   budget_warning_threshold: 80
//!   custom_subcategories:
//!     expense: ["Bensin", "Internet"]
//!     income: ["Gaji"]
//! ```
//!
//! Every section and field is optional; missing ones take the defaults.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use shared::{AppSettings, ContactDetails, Language, Theme, UserProfile};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.yaml";
const APP_DIRECTORY_NAME: &str = "budget-tracker";

/// Values used to create the profile at session start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSeed {
    /// Generated when absent
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub contact: ContactDetails,
}

impl Default for ProfileSeed {
    fn default() -> Self {
        Self {
            id: None,
            name: "Megumi".to_string(),
            email: "megumi@example.com".to_string(),
            avatar: "/professional-avatar.png".to_string(),
            contact: ContactDetails::default(),
        }
    }
}

impl ProfileSeed {
    /// Build the signed-in profile, stamping both timestamps with now
    pub fn into_profile(self) -> UserProfile {
        let now = Utc::now().to_rfc3339();
        UserProfile {
            id: self.id.unwrap_or_else(UserProfile::generate_id),
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            contact: self.contact,
            is_logged_in: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Initial theme and language for the preference store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceDefaults {
    pub language: Language,
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub profile: ProfileSeed,
    pub preferences: PreferenceDefaults,
    pub settings: AppSettings,
}

impl FrontendConfig {
    /// `<config dir>/budget-tracker/config.yaml`, or the working directory
    /// when the platform has no config directory
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join(APP_DIRECTORY_NAME).join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        }
    }

    /// Parse YAML text. Empty text yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: FrontendConfig = serde_yaml::from_str(yaml).context("Invalid configuration YAML")?;
        Ok(config.normalized())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).with_context(|| format!("Failed to read config {:?}", path))?;
        let config = Self::from_yaml_str(&yaml).with_context(|| format!("Failed to parse config {:?}", path))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load the file, or fall back to the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Write the config, replacing the file atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory {:?}", parent))?;
            }
        }

        let yaml = serde_yaml::to_string(self)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, path)?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    fn normalized(mut self) -> Self {
        let clamped = self.settings.clone().clamped();
        if clamped != self.settings {
            warn!(
                "Config settings out of range (payroll_date={}, budget_warning_threshold={}), clamped",
                self.settings.payroll_date, self.settings.budget_warning_threshold
            );
            self.settings = clamped;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CategoryKind;
    use tempfile::TempDir;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = FrontendConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, FrontendConfig::default());
        assert_eq!(config.profile.name, "Megumi");
        assert_eq!(config.settings.payroll_date, 28);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = r#"
profile:
  name: "Alice"
preferences:
  theme: pink
settings:
  payroll_date: 25
  custom_subcategories:
    income: ["Gaji"]
"#;
        let config = FrontendConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.profile.name, "Alice");
        assert_eq!(config.profile.email, "megumi@example.com");
        assert_eq!(config.preferences.theme, Theme::Pink);
        assert_eq!(config.preferences.language, Language::Id);
        assert_eq!(config.settings.payroll_date, 25);
        assert_eq!(config.settings.budget_warning_threshold, 80);
        assert_eq!(config.settings.custom_subcategories[&CategoryKind::Income], vec!["Gaji".to_string()]);
    }

    #[test]
    fn test_out_of_range_settings_are_clamped() {
        let yaml = "settings:\n  payroll_date: 45\n  budget_warning_threshold: 5\n";
        let config = FrontendConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.settings.payroll_date, 31);
        assert_eq!(config.settings.budget_warning_threshold, 50);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let yaml = "preferences:\n  theme: sepia\n";
        assert!(FrontendConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");
        let config = FrontendConfig::load_or_default(&path).unwrap();
        assert_eq!(config, FrontendConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.yaml");

        let mut config = FrontendConfig::default();
        config.profile.id = Some("user::fixed".to_string());
        config.preferences.language = Language::En;
        config.settings.budget_warning_threshold = 90;
        config.save(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(FrontendConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_seed_into_profile() {
        let profile = ProfileSeed::default().into_profile();
        assert!(profile.id.starts_with("user::"));
        assert!(profile.is_logged_in);
        assert_eq!(profile.created_at, profile.updated_at);

        let seed = ProfileSeed {
            id: Some("user::42".to_string()),
            ..ProfileSeed::default()
        };
        assert_eq!(seed.into_profile().id, "user::42");
    }

    #[test]
    fn test_default_path_ends_with_config_file() {
        assert!(FrontendConfig::default_path().ends_with(CONFIG_FILE_NAME));
    }
}
