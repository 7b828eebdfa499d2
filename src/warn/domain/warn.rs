//! The warn record and its identifier.

use chrono::{DateTime, Utc};
use mockable::Clock;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::guild::domain::{Reason, UserId};

/// Length of a warn code.
pub const WARN_ID_LENGTH: usize = 16;

/// A warn's identifying code: 16 uniformly sampled alphanumeric
/// characters.
///
/// Generation alone does not guarantee uniqueness; the warn service
/// retries against the store until an unused code is found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarnId(String);

impl WarnId {
    /// Samples a fresh candidate code from the given generator.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let code: String = rng
            .sample_iter(&Alphanumeric)
            .take(WARN_ID_LENGTH)
            .map(char::from)
            .collect();
        Self(code)
    }

    /// Wraps an existing code, e.g. one supplied by a removal command.
    #[must_use]
    pub fn from_code(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WarnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored warn document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warn {
    /// The warned user.
    pub user: UserId,
    /// The reason recorded with the warn.
    pub reason: Reason,
    /// The moderator who issued the warn.
    pub moderator: UserId,
    /// The warn's identifying code.
    pub warn_id: WarnId,
    /// When the warn was recorded.
    pub issued_at: DateTime<Utc>,
}

impl Warn {
    /// Creates a warn record stamped from the given clock.
    pub fn new(
        user: UserId,
        reason: Reason,
        moderator: UserId,
        warn_id: WarnId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            user,
            reason,
            moderator,
            warn_id,
            issued_at: clock.utc(),
        }
    }

    /// Renders the warn as one line of the `warns list` attachment:
    /// `"{warn_id} - {reason} - <@{moderator}>"`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.warn_id,
            self.reason,
            self.moderator.mention()
        )
    }
}
