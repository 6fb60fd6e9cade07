//! Authentication collaborator and the yes/no prompt that gates sign-out.

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::{Mutex, PoisonError};

/// Authentication backend used by the settings screen
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Display name of the signed-in user, if any
    fn current_user(&self) -> Option<String>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;
}

/// Asks the user to confirm a destructive action
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmationPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Auth provider for a single local user, with no backend behind it
#[derive(Debug)]
pub struct LocalAuthProvider {
    user: Mutex<Option<String>>,
}

impl LocalAuthProvider {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: Mutex::new(Some(user.into())),
        }
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn current_user(&self) -> Option<String> {
        self.user.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    async fn sign_out(&self) -> Result<()> {
        let previous = self.user.lock().unwrap_or_else(PoisonError::into_inner).take();
        match previous {
            Some(user) => info!("Signed out local user '{}'", user),
            None => info!("Sign-out requested with no signed-in user"),
        }
        Ok(())
    }
}
