//! Member and guild context records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GuildId, RolePosition, UserId};
use super::permissions::Permissions;

/// A member's highest role, used for hierarchy comparisons and error copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopRole {
    /// Display name of the role.
    pub name: String,
    /// Position in the guild's role ordering.
    pub position: RolePosition,
}

impl TopRole {
    /// Creates a top-role summary.
    #[must_use]
    pub fn new(name: impl Into<String>, position: RolePosition) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

impl fmt::Display for TopRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A resolved guild member: a user together with the member-scoped data
/// (rank, permissions, timeout state) that guards need.
///
/// Interactions arriving outside a guild resolve only to a bare user; any
/// command that needs rank data must reject those with
/// `MissingGuildUserData` rather than guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's user identifier.
    pub id: UserId,
    /// Display name, used in rendered error copy.
    pub name: String,
    /// Whether the account is an automated (bot) account.
    pub is_bot: bool,
    /// The member's highest role.
    pub top_role: TopRole,
    /// Permissions the member holds in the invoking channel.
    pub permissions: Permissions,
    /// The platform's native timeout field; `None` means not timed out.
    pub timed_out_until: Option<DateTime<Utc>>,
}

impl Member {
    /// Renders the platform mention markup for this member.
    #[must_use]
    pub fn mention(&self) -> String {
        self.id.mention()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The guild an interaction executes in, as far as the command layer needs
/// to know it: identity, ownership, and the system actor's own member
/// record (for bot-side hierarchy checks and the is-me exclusion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildContext {
    /// The guild identifier.
    pub guild_id: GuildId,
    /// Display name of the guild, used in notification copy.
    pub name: String,
    /// The account that owns the guild.
    pub owner_id: UserId,
    /// The system actor's member record in this guild.
    pub bot: Member,
}

impl GuildContext {
    /// Creates a guild context.
    #[must_use]
    pub fn new(guild_id: GuildId, name: impl Into<String>, owner_id: UserId, bot: Member) -> Self {
        Self {
            guild_id,
            name: name.into(),
            owner_id,
            bot,
        }
    }
}
