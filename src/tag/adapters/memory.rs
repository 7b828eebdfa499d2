//! In-memory implementation of the tag repository.
//!
//! Thread-safe via an internal [`RwLock`]. Suitable for unit and
//! integration tests without a document store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::tag::domain::{Tag, TagContent};
use crate::tag::ports::repository::{TagRepository, TagRepositoryError, TagRepositoryResult};

/// In-memory implementation of [`TagRepository`], keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagRepository {
    store: Arc<RwLock<HashMap<String, Tag>>>,
}

impl InMemoryTagRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no tags are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(e: impl std::fmt::Display) -> TagRepositoryError {
    TagRepositoryError::store(std::io::Error::other(e.to_string()))
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn insert(&self, tag: &Tag) -> TagRepositoryResult<()> {
        let mut guard = self.store.write().map_err(poisoned)?;
        guard.insert(tag.name.normalized(), tag.clone());
        Ok(())
    }

    async fn find_by_name(&self, normalized: &str) -> TagRepositoryResult<Option<Tag>> {
        let guard = self.store.read().map_err(poisoned)?;
        Ok(guard.get(normalized).cloned())
    }

    async fn update_content(
        &self,
        normalized: &str,
        content: &TagContent,
    ) -> TagRepositoryResult<()> {
        let mut guard = self.store.write().map_err(poisoned)?;
        if let Some(tag) = guard.get_mut(normalized) {
            tag.content = content.clone();
        }
        Ok(())
    }

    async fn delete(&self, normalized: &str) -> TagRepositoryResult<()> {
        let mut guard = self.store.write().map_err(poisoned)?;
        guard.remove(normalized);
        Ok(())
    }

    async fn list(&self) -> TagRepositoryResult<Vec<Tag>> {
        let guard = self.store.read().map_err(poisoned)?;
        let mut tags: Vec<Tag> = guard.values().cloned().collect();
        tags.sort_by(|left, right| left.name.normalized().cmp(&right.name.normalized()));
        Ok(tags)
    }
}
