//! Repository port for tag persistence.
//!
//! Defines the abstract interface over the document store's single-document
//! operations (`find_one`, `insert_one`, `update_one`, `delete_one`).
//! Every operation is one independent document call; no multi-document
//! atomicity is required or provided.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::tag::domain::{Tag, TagContent};

/// Result type for tag repository operations.
pub type TagRepositoryResult<T> = Result<T, TagRepositoryError>;

/// Errors surfaced by the tag store.
#[derive(Debug, Clone, Error)]
pub enum TagRepositoryError {
    /// The store driver reported a failure.
    #[error("tag store error: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),

    /// A record could not be serialised for storage.
    #[error("tag serialisation error: {0}")]
    Serialization(String),
}

impl TagRepositoryError {
    /// Wraps a driver error.
    #[must_use]
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Arc::new(err))
    }
}

/// Port for tag persistence.
///
/// All lookups are by the lowercased name key; callers normalise via
/// [`crate::tag::domain::TagName::normalized`]. Implementations must be
/// safe for concurrent use.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Stores a new tag. The caller has already checked uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError`] if the store call fails.
    async fn insert(&self, tag: &Tag) -> TagRepositoryResult<()>;

    /// Retrieves a tag by its normalized name, or `None` on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError`] if the store call fails.
    async fn find_by_name(&self, normalized: &str) -> TagRepositoryResult<Option<Tag>>;

    /// Replaces the content of the tag with the given normalized name.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError`] if the store call fails.
    async fn update_content(
        &self,
        normalized: &str,
        content: &TagContent,
    ) -> TagRepositoryResult<()>;

    /// Deletes the tag with the given normalized name.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError`] if the store call fails.
    async fn delete(&self, normalized: &str) -> TagRepositoryResult<()>;

    /// Lists every stored tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError`] if the store call fails.
    async fn list(&self) -> TagRepositoryResult<Vec<Tag>>;
}
