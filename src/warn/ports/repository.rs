//! Repository port for warn persistence.
//!
//! Mirrors the document store's operations over the warn collection:
//! exact-match filters on `user` and `warn_id`, single-document inserts
//! and deletes, plus the bulk delete behind `warns clear`.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::guild::domain::UserId;
use crate::warn::domain::{Warn, WarnId};

/// Result type for warn repository operations.
pub type WarnRepositoryResult<T> = Result<T, WarnRepositoryError>;

/// Errors surfaced by the warn store.
#[derive(Debug, Clone, Error)]
pub enum WarnRepositoryError {
    /// The store driver reported a failure.
    #[error("warn store error: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),

    /// A record could not be serialised for storage.
    #[error("warn serialisation error: {0}")]
    Serialization(String),
}

impl WarnRepositoryError {
    /// Wraps a driver error.
    #[must_use]
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Arc::new(err))
    }
}

/// Port for warn persistence.
///
/// Implementations must be safe for concurrent use; every method is one
/// independent document operation.
#[async_trait]
pub trait WarnRepository: Send + Sync {
    /// Stores a new warn.
    ///
    /// # Errors
    ///
    /// Returns [`WarnRepositoryError`] if the store call fails.
    async fn insert(&self, warn: &Warn) -> WarnRepositoryResult<()>;

    /// Deletes the warn matching `(user, warn_id)`; returns `true` if a
    /// record was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`WarnRepositoryError`] if the store call fails.
    async fn delete(&self, user: UserId, warn_id: &WarnId) -> WarnRepositoryResult<bool>;

    /// Deletes every warn for `user`; returns how many were deleted.
    ///
    /// # Errors
    ///
    /// Returns [`WarnRepositoryError`] if the store call fails.
    async fn delete_all_for(&self, user: UserId) -> WarnRepositoryResult<u64>;

    /// Lists every warn recorded against `user`.
    ///
    /// # Errors
    ///
    /// Returns [`WarnRepositoryError`] if the store call fails.
    async fn find_for(&self, user: UserId) -> WarnRepositoryResult<Vec<Warn>>;

    /// Checks whether any stored warn already uses `warn_id`.
    ///
    /// # Errors
    ///
    /// Returns [`WarnRepositoryError`] if the store call fails.
    async fn id_exists(&self, warn_id: &WarnId) -> WarnRepositoryResult<bool>;
}
