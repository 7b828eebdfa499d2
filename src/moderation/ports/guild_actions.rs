//! Port for member state changes applied through the platform.

use async_trait::async_trait;
use chrono::TimeDelta;
use thiserror::Error;

use crate::guild::domain::{GuildId, UserId};

/// Errors surfaced when applying a member state change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuildActionError {
    /// The platform refused the change.
    #[error("the platform refused the member change")]
    Forbidden,

    /// Any other platform failure.
    #[error("member change failed: {0}")]
    Platform(String),
}

/// Port for timing members out and lifting timeouts.
#[async_trait]
pub trait GuildActions: Send + Sync {
    /// Applies a timeout of `duration` to `user`, or lifts the current
    /// timeout when `duration` is `None`. `reason` lands in the guild's
    /// audit log.
    ///
    /// # Errors
    ///
    /// Returns [`GuildActionError::Forbidden`] when the platform refuses
    /// the change and [`GuildActionError::Platform`] for other failures.
    async fn timeout(
        &self,
        guild: GuildId,
        user: UserId,
        duration: Option<TimeDelta>,
        reason: &str,
    ) -> Result<(), GuildActionError>;
}
