//! The command dispatcher: decode, gate, route, recover.
//!
//! `dispatch` never returns an error. Taxonomy errors are rendered and
//! handed back as the reply; internal failures are additionally logged and
//! surfaced through [`DispatchOutcome::unhandled`] so the host loop can
//! apply its own reporting.

use mockable::Clock;

use crate::command::domain::{
    CommandError, CommandRequest, Interaction, Reply,
};
use crate::command::services::renderer::render;
use crate::guild::domain::{GuildContext, Member, Permissions};
use crate::moderation::ports::guild_actions::GuildActions;
use crate::moderation::services::ModerationService;
use crate::tag::ports::TagRepository;
use crate::tag::services::TagService;
use crate::warn::ports::{ConfirmationPrompt, UserNotifier, WarnRepository};
use crate::warn::services::WarnService;

/// The result of dispatching one interaction.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// The reply to show the invoker.
    pub reply: Reply,
    /// Set when the failure was internal; the host loop decides what to
    /// do with it beyond the generic reply already rendered.
    pub unhandled: Option<CommandError>,
}

/// Routes decoded interactions to the command handlers and renders every
/// failure exactly once.
#[derive(Clone)]
pub struct CommandDispatcher<TR, WR, N, C, K, G>
where
    TR: TagRepository,
    WR: WarnRepository,
    N: UserNotifier,
    C: ConfirmationPrompt,
    K: Clock + Send + Sync,
    G: GuildActions,
{
    tags: TagService<TR>,
    warns: WarnService<WR, N, C, K>,
    moderation: ModerationService<G>,
}

impl<TR, WR, N, C, K, G> CommandDispatcher<TR, WR, N, C, K, G>
where
    TR: TagRepository,
    WR: WarnRepository,
    N: UserNotifier,
    C: ConfirmationPrompt,
    K: Clock + Send + Sync,
    G: GuildActions,
{
    /// Creates a dispatcher over the three handler services.
    #[must_use]
    pub const fn new(
        tags: TagService<TR>,
        warns: WarnService<WR, N, C, K>,
        moderation: ModerationService<G>,
    ) -> Self {
        Self {
            tags,
            warns,
            moderation,
        }
    }

    /// Dispatches one interaction, recovering from every failure.
    pub async fn dispatch(&self, interaction: &Interaction) -> DispatchOutcome {
        match self.execute(interaction).await {
            Ok(reply) => DispatchOutcome {
                reply,
                unhandled: None,
            },
            Err(error) => {
                let reply = render(&error);
                if matches!(error, CommandError::Internal(_)) {
                    tracing::error!(
                        interaction = %interaction.id,
                        command = %interaction.command,
                        %error,
                        "command failed with an internal error",
                    );
                    DispatchOutcome {
                        reply,
                        unhandled: Some(error),
                    }
                } else {
                    tracing::debug!(
                        interaction = %interaction.id,
                        command = %interaction.command,
                        %error,
                        "command rejected",
                    );
                    DispatchOutcome {
                        reply,
                        unhandled: None,
                    }
                }
            }
        }
    }

    /// Decodes, gates, and routes one interaction.
    ///
    /// # Errors
    ///
    /// Propagates every taxonomy error raised by decoding, the permission
    /// gates, or the routed handler.
    async fn execute(&self, interaction: &Interaction) -> Result<Reply, CommandError> {
        // An unknown name stays CommandNotFound, but a guildless
        // invocation of a known command is rejected as a private-message
        // use before any option failure can surface.
        let request = CommandRequest::parse(interaction).map_err(|err| {
            if interaction.guild.is_none() && !matches!(err, CommandError::CommandNotFound) {
                CommandError::NoPrivateMessage
            } else {
                err
            }
        })?;
        let guild = interaction
            .guild
            .as_ref()
            .ok_or(CommandError::NoPrivateMessage)?;

        check_actor_permissions(interaction, &request)?;
        check_bot_permissions(guild, &request)?;

        match request {
            CommandRequest::TagsCreate { name, content } => {
                self.tags.create(interaction.actor.id(), name, content).await
            }
            CommandRequest::TagsDelete { name } => {
                let member = require_member(interaction)?;
                self.tags.delete(member, &name).await
            }
            CommandRequest::TagsEdit { name, content } => {
                let member = require_member(interaction)?;
                self.tags.edit(member, &name, content).await
            }
            CommandRequest::TagsList => self.tags.list().await,
            CommandRequest::WarnsAdd { user, reason } => {
                self.warns
                    .add(guild, interaction.actor.id(), &user, reason)
                    .await
            }
            CommandRequest::WarnsRemove { user, warn_id } => {
                self.warns.remove(&user, &warn_id).await
            }
            CommandRequest::WarnsList { user } => self.warns.list(&user).await,
            CommandRequest::WarnsClear { user } => self.warns.clear(&user).await,
            CommandRequest::Mute {
                user,
                reason,
                duration,
            } => {
                let member = require_member(interaction)?;
                self.moderation
                    .mute(guild, member, &user, &reason, duration)
                    .await
            }
            CommandRequest::Unmute { user, reason } => {
                let member = require_member(interaction)?;
                self.moderation.unmute(guild, member, &user, &reason).await
            }
        }
    }
}

/// Resolves the actor's member record, rejecting bare users.
fn require_member(interaction: &Interaction) -> Result<&Member, CommandError> {
    interaction
        .actor
        .member()
        .ok_or(CommandError::MissingGuildUserData)
}

fn check_actor_permissions(
    interaction: &Interaction,
    request: &CommandRequest,
) -> Result<(), CommandError> {
    let required = request.required_permissions();
    if required == Permissions::none() {
        return Ok(());
    }
    let member = require_member(interaction)?;
    let missing = member.permissions.missing(required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CommandError::MissingPermissions {
            permissions: missing,
        })
    }
}

fn check_bot_permissions(
    guild: &GuildContext,
    request: &CommandRequest,
) -> Result<(), CommandError> {
    let missing = guild
        .bot
        .permissions
        .missing(request.required_bot_permissions());
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CommandError::BotMissingPermissions {
            permissions: missing,
        })
    }
}
