//! The closed command error taxonomy.
//!
//! Every failure a handler or the framework layer can raise is a variant
//! here. The renderer matches this enum exhaustively, so a new kind cannot
//! be added without also deciding its user-facing message and visibility.

use chrono::TimeDelta;
use thiserror::Error;

use crate::guild::domain::{Member, RoleId};
use crate::moderation::ports::guild_actions::GuildActionError;
use crate::tag::ports::repository::TagRepositoryError;
use crate::warn::ports::confirm::ConfirmationError;
use crate::warn::ports::notifier::NotifyError;
use crate::warn::ports::repository::WarnRepositoryError;

/// Errors raised by command handlers, guards, and the framework layer.
///
/// The `Display` text is the internal/log form; user-facing copy lives
/// solely in the renderer.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Lookup by normalized tag name missed.
    #[error("tag not found")]
    TagNotFound,

    /// Create found an existing normalized tag name.
    #[error("tag already exists")]
    TagExists,

    /// Actor is neither the tag author nor holds elevated permission.
    #[error("missing permissions for tag deletion")]
    MissingPermissionsForTagDeletion,

    /// Actor is neither the tag author nor holds elevated permission.
    #[error("missing permissions for tag edit")]
    MissingPermissionsForTagEdit,

    /// Delete-by-id affected zero warn records.
    #[error("warn not found")]
    WarnNotFound,

    /// The actor resolved to a bare user where member data is required.
    #[error("member-scoped data required but actor is not a member")]
    MissingGuildUserData,

    /// The invoker's rank does not exceed the target's.
    #[error("invoker '{}' does not outrank target '{}'", invoker.name, target.name)]
    FailedHierarchy {
        /// The member issuing the command.
        invoker: Box<Member>,
        /// The member the command targets.
        target: Box<Member>,
    },

    /// The system actor's rank does not exceed the target's.
    #[error("bot does not outrank target '{}'", target.name)]
    BotFailedHierarchy {
        /// The member the command targets.
        target: Box<Member>,
    },

    /// The target is the system actor itself.
    #[error("cannot perform this action on the bot account itself")]
    CannotPerformActionOnMe,

    /// The target is an automated account.
    #[error("cannot perform this action on a bot")]
    CannotPerformActionOnBot,

    /// The target equals the actor.
    #[error("cannot perform this action on yourself")]
    CannotPerformActionOnSelf,

    /// The target owns the guild.
    #[error("cannot perform this action on the guild owner")]
    CannotPerformActionOnOwner,

    /// The computed mute duration was zero.
    #[error("invalid duration of {} seconds", duration.num_seconds())]
    InvalidDuration {
        /// The rejected duration.
        duration: TimeDelta,
    },

    /// The computed mute duration exceeded the platform ceiling.
    #[error("duration of {} seconds exceeds the platform maximum", duration.num_seconds())]
    DurationTooLong {
        /// The rejected duration.
        duration: TimeDelta,
    },

    /// Unmute was requested for a target with no active timeout.
    #[error("target '{}' is not muted", target.name)]
    UserNotMuted {
        /// The member the command targets.
        target: Box<Member>,
    },

    /// No registered command matches the interaction.
    #[error("command not found")]
    CommandNotFound,

    /// A guild-only command was invoked outside a guild.
    #[error("command cannot be used in private messages")]
    NoPrivateMessage,

    /// The actor lacks required channel permissions.
    #[error("missing permissions: {}", permissions.join(", "))]
    MissingPermissions {
        /// Names of the missing permissions.
        permissions: Vec<&'static str>,
    },

    /// The system actor lacks required channel permissions.
    #[error("bot missing permissions: {}", permissions.join(", "))]
    BotMissingPermissions {
        /// Names of the missing permissions.
        permissions: Vec<&'static str>,
    },

    /// The actor lacks a required role.
    #[error("missing role {role}")]
    MissingRole {
        /// The required role.
        role: RoleId,
    },

    /// The actor holds none of the accepted roles.
    #[error("missing all accepted roles")]
    MissingAnyRole {
        /// The accepted roles.
        roles: Vec<RoleId>,
    },

    /// The command is rate-limited for this actor.
    #[error("command on cooldown for another {} seconds", retry_after.num_seconds())]
    OnCooldown {
        /// Time until the command may be retried.
        retry_after: TimeDelta,
    },

    /// A command option failed to decode or validate.
    #[error("invalid value for option '{argument}' of '/{command}': {reason}")]
    InvalidArgument {
        /// The command being decoded.
        command: String,
        /// The offending option name.
        argument: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An unexpected collaborator failure; rendered generically, logged,
    /// and returned to the host loop rather than swallowed.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Collaborator failures outside the user-facing taxonomy.
#[derive(Debug, Error)]
pub enum InternalError {
    /// The tag store failed.
    #[error(transparent)]
    TagRepository(#[from] TagRepositoryError),

    /// The warn store failed.
    #[error(transparent)]
    WarnRepository(#[from] WarnRepositoryError),

    /// A platform call failed.
    #[error(transparent)]
    Guild(#[from] GuildActionError),

    /// A user notification failed for a reason other than closed DMs.
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// The confirmation widget failed before resolving.
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),

    /// Warn-id generation kept colliding with stored records.
    #[error("warn id generation exhausted after {attempts} attempts")]
    WarnIdExhausted {
        /// How many candidates were tried.
        attempts: u32,
    },
}

impl From<TagRepositoryError> for CommandError {
    fn from(err: TagRepositoryError) -> Self {
        Self::Internal(InternalError::TagRepository(err))
    }
}

impl From<WarnRepositoryError> for CommandError {
    fn from(err: WarnRepositoryError) -> Self {
        Self::Internal(InternalError::WarnRepository(err))
    }
}

impl From<GuildActionError> for CommandError {
    fn from(err: GuildActionError) -> Self {
        Self::Internal(InternalError::Guild(err))
    }
}
