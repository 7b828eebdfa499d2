//! Platform identifier newtypes.
//!
//! These types wrap the platform's numeric snowflake identifiers to prevent
//! accidental mixing of users, guilds, and roles in filters and guard
//! comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a platform user account.
///
/// # Examples
///
/// ```
/// use warden::guild::domain::UserId;
///
/// let id = UserId::new(80_351_110_224_678_912);
/// assert_eq!(id.to_string(), "80351110224678912");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user identifier from a raw snowflake.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Renders the platform mention markup for this user.
    #[must_use]
    pub fn mention(self) -> String {
        format!("<@{}>", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a guild (server).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(u64);

impl GuildId {
    /// Creates a guild identifier from a raw snowflake.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a guild role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(u64);

impl RoleId {
    /// Creates a role identifier from a raw snowflake.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Renders the platform mention markup for this role.
    #[must_use]
    pub fn mention(self) -> String {
        format!("<@&{}>", self.0)
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a role in the guild's ordered hierarchy.
///
/// Higher positions outrank lower ones. Hierarchy guards compare the top
/// role positions of two members; equality is treated as an insufficient
/// rank, matching the platform's own behaviour.
///
/// # Examples
///
/// ```
/// use warden::guild::domain::RolePosition;
///
/// assert!(RolePosition::new(5) > RolePosition::new(3));
/// assert!(RolePosition::new(3) <= RolePosition::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolePosition(i64);

impl RolePosition {
    /// Creates a role position from a raw ordering value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw ordering value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RolePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
