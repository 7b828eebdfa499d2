//! The single site mapping taxonomy errors to user-facing replies.
//!
//! Every variant gets exactly one message template and one visibility.
//! Almost everything is ephemeral; only missing actor permissions,
//! cooldowns, and unknown failures are shown publicly.

use crate::command::domain::{CommandError, Reply};

/// Renders a taxonomy error into the reply shown to the invoker.
#[must_use]
pub fn render(error: &CommandError) -> Reply {
    match error {
        CommandError::TagNotFound => Reply::ephemeral("This tag does not exist."),
        CommandError::TagExists => Reply::ephemeral("This tag already exists."),
        CommandError::MissingPermissionsForTagDeletion => {
            Reply::ephemeral("You are missing permissions to delete this tag.")
        }
        CommandError::MissingPermissionsForTagEdit => {
            Reply::ephemeral("You are missing permissions to edit this tag.")
        }
        CommandError::WarnNotFound => Reply::ephemeral("This warn does not exist."),
        CommandError::MissingGuildUserData => Reply::ephemeral(
            "The data for your user indicates this command has not been used in a server.",
        ),
        CommandError::FailedHierarchy { invoker, target } => Reply::ephemeral(format!(
            "{} is above you in roles, meaning you can't do that. \
             Your top role is {} (position {}); their top role is {} (position {}).",
            target.mention(),
            invoker.top_role.name,
            invoker.top_role.position,
            target.top_role.name,
            target.top_role.position,
        )),
        CommandError::BotFailedHierarchy { target } => Reply::ephemeral(format!(
            "{} is above me in roles, meaning I can't do that. \
             Please move me above them in roles and try again.",
            target.mention(),
        )),
        CommandError::CannotPerformActionOnMe => {
            Reply::ephemeral("You cannot perform this action on me.")
        }
        CommandError::CannotPerformActionOnBot => {
            Reply::ephemeral("You cannot perform this action on a bot.")
        }
        CommandError::CannotPerformActionOnSelf => {
            Reply::ephemeral("You cannot perform this action on yourself.")
        }
        CommandError::CannotPerformActionOnOwner => {
            Reply::ephemeral("You cannot perform this action on the server owner.")
        }
        CommandError::InvalidDuration { duration } => Reply::ephemeral(format!(
            "A duration of {} seconds is not valid.",
            duration.num_seconds(),
        )),
        CommandError::DurationTooLong { duration } => Reply::ephemeral(format!(
            "A duration of {} seconds is longer than the 28 day maximum.",
            duration.num_seconds(),
        )),
        CommandError::UserNotMuted { target } => {
            Reply::ephemeral(format!("{} is not muted.", target.mention()))
        }
        CommandError::CommandNotFound => Reply::ephemeral("This command does not exist."),
        CommandError::NoPrivateMessage => {
            Reply::ephemeral("This command cannot be used in private messages.")
        }
        CommandError::MissingPermissions { permissions } => Reply::public(format!(
            "You are missing the following permissions: {}.",
            permissions.join(", "),
        )),
        CommandError::BotMissingPermissions { permissions } => Reply::ephemeral(format!(
            "I am missing the following permissions: {}.",
            permissions.join(", "),
        )),
        CommandError::MissingRole { role } => {
            Reply::ephemeral(format!("You are missing the {} role.", role.mention()))
        }
        CommandError::MissingAnyRole { roles } => {
            let mentions: Vec<String> = roles.iter().map(|role| role.mention()).collect();
            Reply::ephemeral(format!(
                "You are missing the following roles: {}.",
                mentions.join(", "),
            ))
        }
        CommandError::OnCooldown { retry_after } => Reply::public(format!(
            "This command is on cooldown. Try again in {} seconds.",
            retry_after.num_seconds(),
        )),
        CommandError::InvalidArgument {
            argument, reason, ..
        } => Reply::ephemeral(format!("Invalid value for option `{argument}`: {reason}.")),
        CommandError::Internal(_) => {
            Reply::public("An unknown error occurred while running this command.")
        }
    }
}
