//! # Settings State Module
//!
//! State behind the settings screen.
//!
//! ## Responsibilities:
//! - Payroll date and budget warning threshold, parsed from raw input and
//!   kept inside their ranges
//! - Category lists the category manager reads and pushes
//! - Language selection (stored in the shared preference store)
//! - Save acknowledgement
//! - Confirmed sign-out with a visible progress and failure state
//!
//! Saving only logs the payload and acknowledges; persisting settings is left
//! to whoever consumes the acknowledgement.

use log::{debug, error, info, warn};
use serde::Serialize;
use shared::{
    describe_budget_warning, parse_form_integer, AppSettings, CategoryKind, Language, PayrollPeriod,
    BUDGET_WARNING_FALLBACK, PAYROLL_DATE_FALLBACK,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{PreferenceError, SignOutError};
use crate::services::{AuthProvider, ConfirmationPrompt, PreferenceStore};

/// Progress of the sign-out action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignOutStatus {
    #[default]
    Idle,
    InProgress,
    SignedOut,
    /// Message to show the user
    Failed(String),
}

/// What a sign-out request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutOutcome {
    /// The user declined the confirmation prompt
    Cancelled,
    SignedOut,
}

/// Returned by [`SettingsState::save`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveAcknowledgement {
    /// Message to show the user
    pub message: String,
    /// Settings as they were when saved
    pub settings: AppSettings,
}

pub struct SettingsState {
    settings: AppSettings,
    preferences: Arc<PreferenceStore>,
    auth: Arc<dyn AuthProvider>,
    sign_out_status: Mutex<SignOutStatus>,
}

/// Marks a sign-out as in flight. Dropping it before `finish` puts the
/// status back to `Idle`.
struct PendingSignOut<'a> {
    status: &'a Mutex<SignOutStatus>,
    finished: bool,
}

impl<'a> PendingSignOut<'a> {
    fn finish(mut self, status: SignOutStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
        self.finished = true;
    }
}

impl Drop for PendingSignOut<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("🚪 Sign-out abandoned before the provider answered");
            *self.status.lock().unwrap_or_else(PoisonError::into_inner) = SignOutStatus::Idle;
        }
    }
}

impl SettingsState {
    /// Create the settings state. Out-of-range values are clamped.
    pub fn new(settings: AppSettings, preferences: Arc<PreferenceStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            settings: settings.clamped(),
            preferences,
            auth,
            sign_out_status: Mutex::new(SignOutStatus::Idle),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn payroll_date(&self) -> i32 {
        self.settings.payroll_date
    }

    pub fn budget_warning_threshold(&self) -> i32 {
        self.settings.budget_warning_threshold
    }

    /// Payroll date input changed. Returns the stored day.
    pub fn set_payroll_date(&mut self, input: &str) -> i32 {
        let day = Self::read_number(input, PAYROLL_DATE_FALLBACK, AppSettings::clamp_payroll_date, "payroll date");
        self.settings.payroll_date = day;
        day
    }

    /// Budget warning threshold input changed. Returns the stored percent.
    pub fn set_budget_warning_threshold(&mut self, input: &str) -> i32 {
        let percent = Self::read_number(
            input,
            BUDGET_WARNING_FALLBACK,
            AppSettings::clamp_budget_warning_threshold,
            "budget warning threshold",
        );
        self.settings.budget_warning_threshold = percent;
        percent
    }

    fn read_number(input: &str, fallback: i32, clamp: fn(i32) -> i32, label: &str) -> i32 {
        match parse_form_integer(input) {
            Some(parsed) => {
                let clamped = clamp(parsed);
                if clamped != parsed {
                    debug!("⚙️ {} {} clamped to {}", label, parsed, clamped);
                }
                clamped
            }
            None => {
                debug!("⚙️ {} input '{}' is not a number, using {}", label, input, fallback);
                fallback
            }
        }
    }

    pub fn language(&self) -> Language {
        self.preferences.language()
    }

    /// Language select bound to its raw option value
    pub fn set_language(&mut self, code: &str) -> Result<Language, PreferenceError> {
        let language: Language = code.parse()?;
        self.set_language_value(language);
        Ok(language)
    }

    pub fn set_language_value(&mut self, language: Language) {
        self.preferences.set_language(language);
    }

    /// Category labels of one kind, in order
    pub fn categories(&self, kind: CategoryKind) -> &[String] {
        self.settings
            .custom_subcategories
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the labels of one kind with the category manager's list
    pub fn set_categories(&mut self, kind: CategoryKind, labels: Vec<String>) {
        debug!("⚙️ {:?} categories replaced ({} labels)", kind, labels.len());
        self.settings.custom_subcategories.insert(kind, labels);
    }

    /// Append a label. Blank labels are ignored; duplicates are not checked.
    pub fn add_category(&mut self, kind: CategoryKind, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.settings
            .custom_subcategories
            .entry(kind)
            .or_default()
            .push(label.to_string());
        true
    }

    /// Remove every occurrence of a label, returning how many were removed
    pub fn remove_category(&mut self, kind: CategoryKind, label: &str) -> usize {
        let Some(labels) = self.settings.custom_subcategories.get_mut(&kind) else {
            return 0;
        };
        let before = labels.len();
        labels.retain(|existing| existing != label);
        before - labels.len()
    }

    /// Current budgeting period, derived from the payroll date on every call
    pub fn period(&self) -> PayrollPeriod {
        self.settings.period()
    }

    pub fn period_description(&self) -> String {
        self.period().describe(self.language())
    }

    pub fn budget_warning_description(&self) -> String {
        describe_budget_warning(self.settings.budget_warning_threshold, self.language())
    }

    /// Log the settings payload and acknowledge. State is left untouched.
    pub fn save(&self) -> SaveAcknowledgement {
        match serde_json::to_string(&self.settings) {
            Ok(payload) => info!("⚙️ Saving settings: {}", payload),
            Err(e) => warn!("⚙️ Saving settings, payload could not be serialized: {}", e),
        }

        let message = match self.language() {
            Language::Id => "Pengaturan berhasil disimpan!",
            Language::En => "Settings saved successfully!",
        };

        SaveAcknowledgement {
            message: message.to_string(),
            settings: self.settings.clone(),
        }
    }

    /// Display name of the signed-in user for the account section
    pub fn current_user(&self) -> Option<String> {
        self.auth.current_user()
    }

    fn status(&self) -> MutexGuard<'_, SignOutStatus> {
        self.sign_out_status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn sign_out_status(&self) -> SignOutStatus {
        self.status().clone()
    }

    /// True while the auth provider call is pending
    pub fn is_signing_out(&self) -> bool {
        *self.status() == SignOutStatus::InProgress
    }

    /// Dismiss a sign-out failure message
    pub fn clear_sign_out_error(&self) {
        let mut status = self.status();
        if matches!(*status, SignOutStatus::Failed(_)) {
            *status = SignOutStatus::Idle;
        }
    }

    /// Ask for confirmation, then sign out through the auth provider.
    ///
    /// Takes `&self` so the status stays readable while the provider call is
    /// pending. A provider failure is kept as [`SignOutStatus::Failed`] and
    /// returned. Dropping the future before it completes resets the status
    /// to `Idle`.
    pub async fn sign_out(&self, prompt: &dyn ConfirmationPrompt) -> Result<SignOutOutcome, SignOutError> {
        if self.is_signing_out() {
            warn!("🚪 Sign-out requested while one is already pending");
            return Err(SignOutError::AlreadyInProgress);
        }

        let question = match self.language() {
            Language::Id => "Apakah Anda yakin ingin keluar?",
            Language::En => "Are you sure you want to sign out?",
        };

        if !prompt.confirm(question) {
            info!("🚪 Sign-out cancelled by user");
            return Ok(SignOutOutcome::Cancelled);
        }

        let pending = {
            let mut status = self.status();
            if *status == SignOutStatus::InProgress {
                return Err(SignOutError::AlreadyInProgress);
            }
            *status = SignOutStatus::InProgress;
            PendingSignOut {
                status: &self.sign_out_status,
                finished: false,
            }
        };
        info!("🚪 Signing out user {:?}", self.auth.current_user());

        match self.auth.sign_out().await {
            Ok(()) => {
                pending.finish(SignOutStatus::SignedOut);
                info!("🚪 Signed out");
                Ok(SignOutOutcome::SignedOut)
            }
            Err(e) => {
                let message = format!("{:#}", e);
                error!("🚪 Sign-out failed: {}", message);
                pending.finish(SignOutStatus::Failed(message.clone()));
                Err(SignOutError::Provider(message))
            }
        }
    }
}
