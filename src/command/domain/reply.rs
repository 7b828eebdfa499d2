//! The single user-facing response a handler or the renderer produces.

use serde::{Deserialize, Serialize};

/// Who can see a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Visible only to the invoking user.
    Ephemeral,
    /// Visible to the channel.
    Public,
}

/// A file attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The file name presented to the platform.
    pub filename: String,
    /// The raw file contents.
    pub contents: Vec<u8>,
}

/// A rendered response: one message, one visibility, at most one
/// attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// The message text.
    pub content: String,
    /// Whether the reply is ephemeral or public.
    pub visibility: Visibility,
    /// Optional file attachment (used by `warns list`).
    pub attachment: Option<Attachment>,
}

impl Reply {
    /// Creates a reply visible only to the invoking user.
    #[must_use]
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Ephemeral,
            attachment: None,
        }
    }

    /// Creates a reply visible to the channel.
    #[must_use]
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Public,
            attachment: None,
        }
    }

    /// Attaches a file to the reply.
    #[must_use]
    pub fn with_attachment(mut self, filename: impl Into<String>, contents: Vec<u8>) -> Self {
        self.attachment = Some(Attachment {
            filename: filename.into(),
            contents,
        });
        self
    }

    /// Returns `true` if the reply is visible only to the invoker.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self.visibility, Visibility::Ephemeral)
    }
}
