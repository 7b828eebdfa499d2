//! Tag command handlers.
//!
//! Each handler performs at most one lookup and one write, raises taxonomy
//! errors for misses and permission failures, and returns exactly one
//! confirmation reply. Errors are never rendered here; the dispatcher's
//! renderer owns all error copy.

use std::sync::Arc;

use crate::command::domain::{CommandError, Reply};
use crate::guild::domain::{Member, UserId};
use crate::tag::domain::{Tag, TagContent, TagName};
use crate::tag::ports::repository::TagRepository;

/// Handlers for the `tags` command group.
#[derive(Clone)]
pub struct TagService<R>
where
    R: TagRepository,
{
    repository: Arc<R>,
}

impl<R> TagService<R>
where
    R: TagRepository,
{
    /// Creates a new tag service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a tag, enforcing case-insensitive name uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TagExists`] if the normalized name is
    /// already taken, and performs no write in that case.
    pub async fn create(
        &self,
        author: UserId,
        name: TagName,
        content: TagContent,
    ) -> Result<Reply, CommandError> {
        if self
            .repository
            .find_by_name(&name.normalized())
            .await?
            .is_some()
        {
            return Err(CommandError::TagExists);
        }

        let confirmation = format!("Successfully created tag `{name}`");
        self.repository
            .insert(&Tag::new(name, content, author))
            .await?;

        Ok(Reply::ephemeral(confirmation))
    }

    /// Replaces a tag's content.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TagNotFound`] on a lookup miss and
    /// [`CommandError::MissingPermissionsForTagEdit`] when the actor is
    /// neither the author nor holds `manage_messages`.
    pub async fn edit(
        &self,
        actor: &Member,
        name: &TagName,
        content: TagContent,
    ) -> Result<Reply, CommandError> {
        let normalized = name.normalized();
        let tag = self
            .repository
            .find_by_name(&normalized)
            .await?
            .ok_or(CommandError::TagNotFound)?;

        if tag.author != actor.id && !actor.permissions.manage_messages {
            return Err(CommandError::MissingPermissionsForTagEdit);
        }

        self.repository.update_content(&normalized, &content).await?;

        Ok(Reply::ephemeral(format!("Successfully edited tag `{name}`")))
    }

    /// Deletes a tag.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TagNotFound`] on a lookup miss and
    /// [`CommandError::MissingPermissionsForTagDeletion`] when the actor
    /// is neither the author nor holds `manage_messages`.
    pub async fn delete(&self, actor: &Member, name: &TagName) -> Result<Reply, CommandError> {
        let normalized = name.normalized();
        let tag = self
            .repository
            .find_by_name(&normalized)
            .await?
            .ok_or(CommandError::TagNotFound)?;

        if tag.author != actor.id && !actor.permissions.manage_messages {
            return Err(CommandError::MissingPermissionsForTagDeletion);
        }

        self.repository.delete(&normalized).await?;

        Ok(Reply::ephemeral(format!(
            "Successfully deleted tag `{name}`"
        )))
    }

    /// Lists the names of every stored tag.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Internal`] if the store call fails.
    pub async fn list(&self) -> Result<Reply, CommandError> {
        let tags = self.repository.list().await?;

        if tags.is_empty() {
            return Ok(Reply::ephemeral("There are no tags."));
        }

        let names: Vec<String> = tags
            .iter()
            .map(|tag| format!("`{}`", tag.name.as_str()))
            .collect();

        Ok(Reply::ephemeral(format!("Tags: {}", names.join(", "))))
    }
}
