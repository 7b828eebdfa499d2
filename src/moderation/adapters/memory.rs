//! In-memory implementation of the guild actions port.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::TimeDelta;

use crate::guild::domain::{GuildId, UserId};
use crate::moderation::ports::guild_actions::{GuildActionError, GuildActions};

/// A single recorded call to [`GuildActions::timeout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTimeout {
    /// The guild the change was applied in.
    pub guild: GuildId,
    /// The member the change was applied to.
    pub user: UserId,
    /// The applied duration, or `None` when the timeout was lifted.
    pub duration: Option<TimeDelta>,
    /// The audit log reason.
    pub reason: String,
}

/// A [`GuildActions`] implementation that records the changes it was
/// asked to apply, optionally failing each call with a fixed error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGuildActions {
    applied: Arc<RwLock<Vec<AppliedTimeout>>>,
    failure: Option<GuildActionError>,
}

impl InMemoryGuildActions {
    /// Creates an adapter that applies every change successfully.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that fails every call with `failure`.
    #[must_use]
    pub fn failing_with(failure: GuildActionError) -> Self {
        Self {
            applied: Arc::new(RwLock::new(Vec::new())),
            failure: Some(failure),
        }
    }

    /// Returns the changes applied so far.
    #[must_use]
    pub fn applied(&self) -> Vec<AppliedTimeout> {
        self.applied
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GuildActions for InMemoryGuildActions {
    async fn timeout(
        &self,
        guild: GuildId,
        user: UserId,
        duration: Option<TimeDelta>,
        reason: &str,
    ) -> Result<(), GuildActionError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if let Ok(mut guard) = self.applied.write() {
            guard.push(AppliedTimeout {
                guild,
                user,
                duration,
                reason: reason.to_owned(),
            });
        }
        Ok(())
    }
}
