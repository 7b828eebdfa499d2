//! Warn command handlers.
//!
//! Adding a warn is the one place in the crate with a retry loop: code
//! generation is re-sampled until it misses the store, bounded by
//! [`MAX_WARN_ID_ATTEMPTS`]. The post-insert direct message is the one
//! place a platform refusal is deliberately suppressed.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;

use crate::command::domain::{CommandError, InternalError, Reply};
use crate::guild::domain::{GuildContext, Member, Reason, UserId};
use crate::warn::domain::{Warn, WarnId};
use crate::warn::ports::confirm::{Confirmation, ConfirmationPrompt};
use crate::warn::ports::notifier::{NotifyError, UserNotifier};
use crate::warn::ports::repository::WarnRepository;

/// How many candidate codes are sampled before giving up.
pub const MAX_WARN_ID_ATTEMPTS: u32 = 8;

/// How long a `warns clear` confirmation may stay unanswered before it is
/// treated as declined.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Handlers for the `warns` command group.
#[derive(Clone)]
pub struct WarnService<R, N, C, K>
where
    R: WarnRepository,
    N: UserNotifier,
    C: ConfirmationPrompt,
    K: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    confirmation: Arc<C>,
    clock: Arc<K>,
    confirmation_timeout: Duration,
}

impl<R, N, C, K> WarnService<R, N, C, K>
where
    R: WarnRepository,
    N: UserNotifier,
    C: ConfirmationPrompt,
    K: Clock + Send + Sync,
{
    /// Creates a new warn service with the default confirmation deadline.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        confirmation: Arc<C>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            repository,
            notifier,
            confirmation,
            clock,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
        }
    }

    /// Overrides the confirmation deadline.
    #[must_use]
    pub const fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Records a warn against `target` and best-effort notifies them.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Internal`] when the store fails, when code
    /// generation exhausts its attempts, or when notification fails for a
    /// reason other than the platform refusing delivery.
    pub async fn add(
        &self,
        guild: &GuildContext,
        moderator: UserId,
        target: &Member,
        reason: Reason,
    ) -> Result<Reply, CommandError> {
        let warn_id = self.fresh_warn_id().await?;
        let warn = Warn::new(
            target.id,
            reason.clone(),
            moderator,
            warn_id,
            self.clock.as_ref(),
        );
        self.repository.insert(&warn).await?;

        let notice = format!(
            "You have been warned in {}. Reason: `{reason}`",
            guild.name
        );
        match self.notifier.notify(target.id, &notice).await {
            Ok(()) | Err(NotifyError::Forbidden) => {}
            Err(err) => return Err(InternalError::Notify(err).into()),
        }

        Ok(Reply::ephemeral(format!(
            "Warned {} for `{reason}`",
            target.mention()
        )))
    }

    /// Removes one warn by `(user, warn_id)` match.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::WarnNotFound`] when no record matched;
    /// re-deleting a missing warn never silently succeeds.
    pub async fn remove(&self, target: &Member, warn_id: &str) -> Result<Reply, CommandError> {
        let deleted = self
            .repository
            .delete(target.id, &WarnId::from_code(warn_id))
            .await?;

        if !deleted {
            return Err(CommandError::WarnNotFound);
        }

        Ok(Reply::ephemeral(format!(
            "Removed warn with ID `{warn_id}` from {}",
            target.mention()
        )))
    }

    /// Lists `target`'s warns as a text attachment.
    ///
    /// An empty result set short-circuits with a plain message instead of
    /// an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Internal`] if the store call fails.
    pub async fn list(&self, target: &Member) -> Result<Reply, CommandError> {
        let warns = self.repository.find_for(target.id).await?;

        if warns.is_empty() {
            return Ok(Reply::ephemeral(format!(
                "{} has no warns",
                target.mention()
            )));
        }

        let lines: Vec<String> = warns.iter().map(Warn::summary_line).collect();
        let contents = lines.join("\n").into_bytes();

        Ok(
            Reply::ephemeral(format!("Warns for {}", target.mention())).with_attachment(
                format!("{}_warns.txt", target.id),
                contents,
            ),
        )
    }

    /// Clears every warn for `target` after interactive confirmation.
    ///
    /// Declining aborts the delete, and so does letting the prompt hit
    /// its deadline.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Internal`] if the widget fails before
    /// resolving or the store call fails.
    pub async fn clear(&self, target: &Member) -> Result<Reply, CommandError> {
        let prompt = format!(
            "Are you sure you want to clear all warns for {}?",
            target.mention()
        );

        let confirmation =
            match tokio::time::timeout(self.confirmation_timeout, self.confirmation.request(&prompt))
                .await
            {
                Ok(resolved) => resolved.map_err(InternalError::Confirmation)?,
                Err(_elapsed) => Confirmation::Declined,
            };

        if confirmation == Confirmation::Declined {
            return Ok(Reply::ephemeral("Cancelled."));
        }

        self.repository.delete_all_for(target.id).await?;

        Ok(Reply::ephemeral(format!(
            "Cleared all warns for {}",
            target.mention()
        )))
    }

    async fn fresh_warn_id(&self) -> Result<WarnId, CommandError> {
        for _ in 0..MAX_WARN_ID_ATTEMPTS {
            let candidate = WarnId::generate(&mut rand::thread_rng());
            if !self.repository.id_exists(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(InternalError::WarnIdExhausted {
            attempts: MAX_WARN_ID_ATTEMPTS,
        }
        .into())
    }
}
