//! In-memory implementations of the warn ports.
//!
//! Thread-safe via internal locks. Suitable for unit and integration
//! tests without a document store, a gateway, or a real widget.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::guild::domain::UserId;
use crate::warn::domain::{Warn, WarnId};
use crate::warn::ports::confirm::{Confirmation, ConfirmationError, ConfirmationPrompt};
use crate::warn::ports::notifier::{NotifyError, UserNotifier};
use crate::warn::ports::repository::{WarnRepository, WarnRepositoryError, WarnRepositoryResult};

/// In-memory implementation of [`WarnRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryWarnRepository {
    store: Arc<RwLock<Vec<Warn>>>,
}

impl InMemoryWarnRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored warns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no warns are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(e: impl std::fmt::Display) -> WarnRepositoryError {
    WarnRepositoryError::store(std::io::Error::other(e.to_string()))
}

#[async_trait]
impl WarnRepository for InMemoryWarnRepository {
    async fn insert(&self, warn: &Warn) -> WarnRepositoryResult<()> {
        let mut guard = self.store.write().map_err(poisoned)?;
        guard.push(warn.clone());
        Ok(())
    }

    async fn delete(&self, user: UserId, warn_id: &WarnId) -> WarnRepositoryResult<bool> {
        let mut guard = self.store.write().map_err(poisoned)?;
        let before = guard.len();
        guard.retain(|warn| !(warn.user == user && warn.warn_id == *warn_id));
        Ok(guard.len() < before)
    }

    async fn delete_all_for(&self, user: UserId) -> WarnRepositoryResult<u64> {
        let mut guard = self.store.write().map_err(poisoned)?;
        let before = guard.len();
        guard.retain(|warn| warn.user != user);
        Ok((before - guard.len()) as u64)
    }

    async fn find_for(&self, user: UserId) -> WarnRepositoryResult<Vec<Warn>> {
        let guard = self.store.read().map_err(poisoned)?;
        Ok(guard.iter().filter(|warn| warn.user == user).cloned().collect())
    }

    async fn id_exists(&self, warn_id: &WarnId) -> WarnRepositoryResult<bool> {
        let guard = self.store.read().map_err(poisoned)?;
        Ok(guard.iter().any(|warn| warn.warn_id == *warn_id))
    }
}

/// A [`UserNotifier`] that records deliveries, optionally failing each
/// call with a fixed error.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<(UserId, String)>>>,
    failure: Option<NotifyError>,
}

impl RecordingNotifier {
    /// Creates a notifier that delivers successfully.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier that fails every delivery with `failure`.
    #[must_use]
    pub fn failing_with(failure: NotifyError) -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            failure: Some(failure),
        }
    }

    /// Returns the messages delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<(UserId, String)> {
        self.sent.read().map(|guard| guard.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UserNotifier for RecordingNotifier {
    async fn notify(&self, user: UserId, message: &str) -> Result<(), NotifyError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if let Ok(mut guard) = self.sent.write() {
            guard.push((user, message.to_owned()));
        }
        Ok(())
    }
}

/// The canned behaviour of a [`ScriptedConfirmation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmationScript {
    Approve,
    Decline,
    /// Never resolves, standing in for an abandoned widget.
    Unresponsive,
}

/// A [`ConfirmationPrompt`] that resolves according to a fixed script and
/// records the prompts it was shown.
#[derive(Debug, Clone)]
pub struct ScriptedConfirmation {
    script: ConfirmationScript,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl ScriptedConfirmation {
    /// A prompt whose yes button is always pressed.
    #[must_use]
    pub fn approving() -> Self {
        Self::with_script(ConfirmationScript::Approve)
    }

    /// A prompt whose no button is always pressed.
    #[must_use]
    pub fn declining() -> Self {
        Self::with_script(ConfirmationScript::Decline)
    }

    /// A prompt that is never pressed; requests suspend until the caller's
    /// deadline fires.
    #[must_use]
    pub fn unresponsive() -> Self {
        Self::with_script(ConfirmationScript::Unresponsive)
    }

    fn with_script(script: ConfirmationScript) -> Self {
        Self {
            script,
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the prompts requested so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedConfirmation {
    async fn request(&self, prompt: &str) -> Result<Confirmation, ConfirmationError> {
        if let Ok(mut guard) = self.prompts.write() {
            guard.push(prompt.to_owned());
        }
        match self.script {
            ConfirmationScript::Approve => Ok(Confirmation::Approved),
            ConfirmationScript::Decline => Ok(Confirmation::Declined),
            ConfirmationScript::Unresponsive => {
                std::future::pending::<()>().await;
                Err(ConfirmationError::Closed(
                    "scripted prompt never resolves".to_owned(),
                ))
            }
        }
    }
}
