//! Target eligibility checks shared by the member-targeting commands.

use crate::command::domain::CommandError;
use crate::guild::domain::{GuildContext, Member};

/// Verifies that `actor` may act on `target` within `guild`.
///
/// The checks run in a fixed order: actor hierarchy, bot hierarchy,
/// then the protected identities (the bot itself, any bot account, the
/// actor, and the guild owner). The first failing check wins.
///
/// # Errors
///
/// Returns the guard-specific [`CommandError`] variant for the first
/// check that fails.
pub fn check_member_target(
    guild: &GuildContext,
    actor: &Member,
    target: &Member,
) -> Result<(), CommandError> {
    if actor.top_role.position <= target.top_role.position {
        return Err(CommandError::FailedHierarchy {
            invoker: Box::new(actor.clone()),
            target: Box::new(target.clone()),
        });
    }
    if guild.bot.top_role.position <= target.top_role.position {
        return Err(CommandError::BotFailedHierarchy {
            target: Box::new(target.clone()),
        });
    }
    if target.id == guild.bot.id {
        return Err(CommandError::CannotPerformActionOnMe);
    }
    if target.is_bot {
        return Err(CommandError::CannotPerformActionOnBot);
    }
    if target.id == actor.id {
        return Err(CommandError::CannotPerformActionOnSelf);
    }
    if target.id == guild.owner_id {
        return Err(CommandError::CannotPerformActionOnOwner);
    }
    Ok(())
}
