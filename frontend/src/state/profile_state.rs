//! # Profile State Module
//!
//! State behind the profile screen: the committed profile record, the edit
//! form's draft and the view/edit toggle.
//!
//! ## Editing lifecycle:
//! - Entering edit mode snapshots the draft
//! - Saving copies every draft field into the profile and leaves edit mode
//! - Cancelling leaves edit mode and restores the snapshot, so reopening the
//!   form never shows abandoned edits
//!
//! The avatar is not part of the draft. A newly picked image is written to the
//! profile right away, in either mode.

use chrono::Utc;
use log::{debug, info};
use shared::{Language, ProfileDraft, ProfileField, Theme, UserProfile};
use std::sync::Arc;

use crate::error::{AvatarError, PreferenceError};
use crate::services::{AvatarUpload, PreferenceStore, ThemeProvider};

pub struct ProfileState {
    profile: UserProfile,
    draft: ProfileDraft,
    is_editing: bool,
    /// Draft as it was when edit mode was entered
    edit_snapshot: Option<ProfileDraft>,
    preferences: Arc<PreferenceStore>,
}

impl ProfileState {
    /// Create the profile state with the draft mirroring the profile
    pub fn new(profile: UserProfile, preferences: Arc<PreferenceStore>) -> Self {
        let draft = ProfileDraft::from_profile(&profile);
        Self {
            profile,
            draft,
            is_editing: false,
            edit_snapshot: None,
            preferences,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Edit button: enter edit mode, or cancel when already editing
    pub fn toggle_edit(&mut self) {
        if self.is_editing {
            self.cancel();
        } else {
            self.begin_edit();
        }
    }

    pub fn begin_edit(&mut self) {
        if self.is_editing {
            return;
        }
        self.edit_snapshot = Some(self.draft.clone());
        self.is_editing = true;
        info!("👤 Editing profile {}", self.profile.id);
    }

    /// Overwrite one draft field. No validation happens here.
    pub fn update_draft_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        debug!("👤 Draft field '{}' = '{}'", field.key(), value);
        self.draft.set_field(field, value);
    }

    /// Commit the draft into the profile and leave edit mode
    pub fn save(&mut self) {
        self.profile.name = self.draft.name.clone();
        self.profile.email = self.draft.email.clone();
        self.profile.contact.phone = self.draft.phone.clone();
        self.profile.contact.location = self.draft.location.clone();
        self.profile.contact.birth_date = self.draft.birth_date.clone();
        self.profile.updated_at = Utc::now().to_rfc3339();

        self.edit_snapshot = None;
        self.is_editing = false;
        info!("👤 Saved profile {}: name='{}', email='{}'", self.profile.id, self.profile.name, self.profile.email);
    }

    /// Leave edit mode, rolling the draft back to the edit-entry snapshot
    pub fn cancel(&mut self) {
        self.draft = self
            .edit_snapshot
            .take()
            .unwrap_or_else(|| ProfileDraft::from_profile(&self.profile));
        self.is_editing = false;
        info!("👤 Cancelled profile edit for {}", self.profile.id);
    }

    /// Replace the avatar with a newly picked image.
    ///
    /// No file selected is a no-op and returns `Ok(false)`.
    pub fn change_avatar(&mut self, upload: Option<AvatarUpload>) -> Result<bool, AvatarError> {
        let Some(upload) = upload else {
            debug!("👤 Avatar picker closed without a file");
            return Ok(false);
        };

        let data_url = upload.to_data_url()?;
        self.profile.avatar = data_url;
        self.profile.updated_at = Utc::now().to_rfc3339();
        info!(
            "👤 Avatar updated from '{}' ({}, {} bytes)",
            upload.file_name,
            upload.mime_type,
            upload.bytes.len()
        );
        Ok(true)
    }

    pub fn language(&self) -> Language {
        self.preferences.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.set_language(language);
    }

    /// Language select bound to its raw option value
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, PreferenceError> {
        let language: Language = code.parse()?;
        self.set_language(language);
        Ok(language)
    }

    pub fn theme(&self) -> Theme {
        self.preferences.current_theme()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.set_theme(theme);
    }
}
