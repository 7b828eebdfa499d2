//! Port interfaces for warn persistence, notification, and confirmation.

pub mod confirm;
pub mod notifier;
pub mod repository;

pub use confirm::{Confirmation, ConfirmationError, ConfirmationPrompt};
pub use notifier::{NotifyError, UserNotifier};
pub use repository::{WarnRepository, WarnRepositoryError, WarnRepositoryResult};
