//! The tag record and its validated fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::guild::domain::UserId;

/// Maximum length of a tag name.
pub const MAX_TAG_NAME_LENGTH: usize = 32;

/// Maximum length of tag content, matching the platform message limit.
pub const MAX_TAG_CONTENT_LENGTH: usize = 2000;

/// Validation errors for [`TagName`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagNameError {
    /// The name was empty.
    #[error("a tag name cannot be empty")]
    Empty,

    /// The name exceeded the limit.
    #[error("a tag name cannot exceed {MAX_TAG_NAME_LENGTH} characters (got {0})")]
    TooLong(usize),
}

/// Validation errors for [`TagContent`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagContentError {
    /// The content was empty.
    #[error("tag content cannot be empty")]
    Empty,

    /// The content exceeded the limit.
    #[error("tag content cannot exceed {MAX_TAG_CONTENT_LENGTH} characters (got {0})")]
    TooLong(usize),
}

/// A tag's display name: 1 to 32 characters.
///
/// The lowercased form is the unique lookup key; the original casing is
/// preserved for display.
///
/// # Examples
///
/// ```
/// use warden::tag::domain::TagName;
///
/// let name = TagName::new("Hello").expect("valid name");
/// assert_eq!(name.as_str(), "Hello");
/// assert_eq!(name.normalized(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    /// Validates and wraps a tag name.
    ///
    /// # Errors
    ///
    /// Returns [`TagNameError`] when the name is empty or longer than
    /// [`MAX_TAG_NAME_LENGTH`] characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TagNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TagNameError::Empty);
        }
        let length = name.chars().count();
        if length > MAX_TAG_NAME_LENGTH {
            return Err(TagNameError::TooLong(length));
        }
        Ok(Self(name))
    }

    /// Returns the name as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercased unique key for this name.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tag's content: 1 to 2000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagContent(String);

impl TagContent {
    /// Validates and wraps tag content.
    ///
    /// # Errors
    ///
    /// Returns [`TagContentError`] when the content is empty or longer
    /// than [`MAX_TAG_CONTENT_LENGTH`] characters.
    pub fn new(content: impl Into<String>) -> Result<Self, TagContentError> {
        let content = content.into();
        if content.is_empty() {
            return Err(TagContentError::Empty);
        }
        let length = content.chars().count();
        if length > MAX_TAG_CONTENT_LENGTH {
            return Err(TagContentError::TooLong(length));
        }
        Ok(Self(content))
    }

    /// Returns the content text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored tag document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Display name as entered by the author.
    pub name: TagName,
    /// The tag body.
    pub content: TagContent,
    /// The user who created the tag.
    pub author: UserId,
}

impl Tag {
    /// Creates a tag record.
    #[must_use]
    pub const fn new(name: TagName, content: TagContent, author: UserId) -> Self {
        Self {
            name,
            content,
            author,
        }
    }
}
