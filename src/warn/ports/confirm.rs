//! Port for the interactive yes/no confirmation widget.
//!
//! The widget itself (two buttons that record a boolean and disable
//! themselves) lives with the gateway adapter. The port exposes it as a
//! plain request/response future; the warn service imposes the deadline,
//! so an abandoned prompt can no longer suspend a handler forever.

use async_trait::async_trait;
use thiserror::Error;

/// The outcome of a resolved confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The invoker pressed yes.
    Approved,
    /// The invoker pressed no.
    Declined,
}

/// Errors surfaced by the confirmation widget.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfirmationError {
    /// The widget was torn down before a button press resolved it.
    #[error("confirmation widget closed before resolving: {0}")]
    Closed(String),
}

/// Port for requesting a yes/no confirmation from the invoking user.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Presents `prompt` and resolves with the button pressed.
    ///
    /// Implementations may suspend indefinitely; callers bound the wait.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError`] if the widget fails before a press.
    async fn request(&self, prompt: &str) -> Result<Confirmation, ConfirmationError>;
}
