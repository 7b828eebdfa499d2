//! Mute and unmute command handlers.
//!
//! Both handlers run the target eligibility checks before anything else,
//! so an ineligible target never reaches the platform. Mute additionally
//! validates its duration before the timeout call.

use std::sync::Arc;

use crate::command::domain::{CommandError, DurationComponents, Reply};
use crate::guild::domain::{GuildContext, Member, Reason};
use crate::moderation::domain::{MuteDuration, check_member_target, format_duration};
use crate::moderation::ports::guild_actions::GuildActions;

/// Handlers for the `mute` and `unmute` commands.
#[derive(Clone)]
pub struct ModerationService<G>
where
    G: GuildActions,
{
    guild_actions: Arc<G>,
}

impl<G> ModerationService<G>
where
    G: GuildActions,
{
    /// Creates a new moderation service.
    #[must_use]
    pub const fn new(guild_actions: Arc<G>) -> Self {
        Self { guild_actions }
    }

    /// Times `target` out for the requested duration.
    ///
    /// # Errors
    ///
    /// Returns the guard variant for an ineligible target,
    /// [`CommandError::InvalidDuration`] or
    /// [`CommandError::DurationTooLong`] for an out-of-bounds duration,
    /// and [`CommandError::Internal`] when the platform call fails.
    pub async fn mute(
        &self,
        guild: &GuildContext,
        actor: &Member,
        target: &Member,
        reason: &Reason,
        components: DurationComponents,
    ) -> Result<Reply, CommandError> {
        check_member_target(guild, actor, target)?;
        let duration = MuteDuration::from_components(components)?;

        self.guild_actions
            .timeout(
                guild.guild_id,
                target.id,
                Some(duration.delta()),
                &audit_reason(actor, reason),
            )
            .await?;

        Ok(Reply::ephemeral(format!(
            "Muted {} for {}.\nReason: `{}`",
            target.mention(),
            format_duration(duration.delta()),
            reason
        )))
    }

    /// Lifts `target`'s active timeout.
    ///
    /// # Errors
    ///
    /// Returns the guard variant for an ineligible target,
    /// [`CommandError::UserNotMuted`] when no timeout is active, and
    /// [`CommandError::Internal`] when the platform call fails.
    pub async fn unmute(
        &self,
        guild: &GuildContext,
        actor: &Member,
        target: &Member,
        reason: &Reason,
    ) -> Result<Reply, CommandError> {
        check_member_target(guild, actor, target)?;
        if target.timed_out_until.is_none() {
            return Err(CommandError::UserNotMuted {
                target: Box::new(target.clone()),
            });
        }

        self.guild_actions
            .timeout(guild.guild_id, target.id, None, &audit_reason(actor, reason))
            .await?;

        Ok(Reply::ephemeral(format!(
            "Unmuted {}.\nReason: `{}`",
            target.mention(),
            reason
        )))
    }
}

/// Renders the audit log reason attributed to the acting moderator.
fn audit_reason(actor: &Member, reason: &Reason) -> String {
    format!("{} ({}): {}", actor.name, actor.id, reason)
}
