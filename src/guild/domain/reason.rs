//! Moderation reason text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length of a moderation reason, matching the platform's audit
/// log field limit.
pub const MAX_REASON_LENGTH: usize = 256;

/// Validation errors for [`Reason`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReasonError {
    /// The reason was empty.
    #[error("a reason cannot be empty")]
    Empty,

    /// The reason exceeded the platform limit.
    #[error("a reason cannot exceed {MAX_REASON_LENGTH} characters (got {0})")]
    TooLong(usize),
}

/// The reason attached to a warn, mute, or unmute: 1 to 256 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reason(String);

impl Reason {
    /// Validates and wraps reason text.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonError`] when the text is empty or longer than
    /// [`MAX_REASON_LENGTH`] characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ReasonError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ReasonError::Empty);
        }
        let length = text.chars().count();
        if length > MAX_REASON_LENGTH {
            return Err(ReasonError::TooLong(length));
        }
        Ok(Self(text))
    }

    /// Returns the reason text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
