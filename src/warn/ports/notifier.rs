//! Port for direct-message notification.

use async_trait::async_trait;
use thiserror::Error;

use crate::guild::domain::UserId;

/// Errors surfaced when notifying a user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// The platform refused delivery (closed DMs, blocked bot). The warn
    /// service suppresses this case; the notification is best-effort.
    #[error("the platform refused to deliver the message")]
    Forbidden,

    /// Any other delivery failure.
    #[error("notification failed: {0}")]
    Platform(String),
}

/// Port for sending a direct message to a user.
#[async_trait]
pub trait UserNotifier: Send + Sync {
    /// Sends `message` to `user`'s direct messages.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Forbidden`] when the platform refuses
    /// delivery and [`NotifyError::Platform`] for other failures.
    async fn notify(&self, user: UserId, message: &str) -> Result<(), NotifyError>;
}
