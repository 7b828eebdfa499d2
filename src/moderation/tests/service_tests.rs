//! Unit tests for the mute and unmute handlers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use mockall::mock;
use rstest::{fixture, rstest};

use crate::command::domain::{CommandError, DurationComponents, InternalError};
use crate::guild::domain::{
    GuildContext, GuildId, Member, Permissions, Reason, RolePosition, TopRole, UserId,
};
use crate::moderation::adapters::InMemoryGuildActions;
use crate::moderation::ports::guild_actions::{GuildActionError, GuildActions};
use crate::moderation::services::ModerationService;

mock! {
    Guild {}

    #[async_trait]
    impl GuildActions for Guild {
        async fn timeout(
            &self,
            guild: GuildId,
            user: UserId,
            duration: Option<TimeDelta>,
            reason: &str,
        ) -> Result<(), GuildActionError>;
    }
}

fn member(id: u64, position: i64) -> Member {
    Member {
        id: UserId::new(id),
        name: format!("user-{id}"),
        is_bot: false,
        top_role: TopRole::new("role", RolePosition::new(position)),
        permissions: Permissions::none(),
        timed_out_until: None,
    }
}

#[fixture]
fn guild() -> GuildContext {
    GuildContext::new(GuildId::new(100), "Test Guild", UserId::new(1), member(999, 50))
}

fn reason(text: &str) -> Reason {
    Reason::new(text).expect("valid reason")
}

fn hour() -> DurationComponents {
    DurationComponents {
        hours: 1,
        ..DurationComponents::default()
    }
}

#[rstest]
#[tokio::test]
async fn mute_applies_timeout_with_attributed_audit_reason(guild: GuildContext) {
    let actions = Arc::new(InMemoryGuildActions::new());
    let service = ModerationService::new(Arc::clone(&actions));
    let actor = member(2, 40);
    let target = member(5, 10);

    let reply = service
        .mute(&guild, &actor, &target, &reason("spam"), hour())
        .await
        .expect("mute should succeed");

    assert_eq!(reply.content, "Muted <@5> for 1 hours.\nReason: `spam`");
    assert!(reply.is_ephemeral());
    let applied = actions.applied();
    assert_eq!(applied.len(), 1);
    let call = applied.first().expect("one timeout should be recorded");
    assert_eq!(call.guild, GuildId::new(100));
    assert_eq!(call.user, UserId::new(5));
    assert_eq!(call.duration, Some(TimeDelta::hours(1)));
    assert_eq!(call.reason, "user-2 (2): spam");
}

#[rstest]
#[tokio::test]
async fn mute_rejects_zero_duration_before_the_platform_call(guild: GuildContext) {
    // No expectation is set, so any platform call panics the test.
    let service = ModerationService::new(Arc::new(MockGuild::new()));
    let actor = member(2, 40);
    let target = member(5, 10);

    let result = service
        .mute(
            &guild,
            &actor,
            &target,
            &reason("spam"),
            DurationComponents::default(),
        )
        .await;

    assert!(matches!(result, Err(CommandError::InvalidDuration { .. })));
}

#[rstest]
#[tokio::test]
async fn mute_rejects_ineligible_target_before_duration_validation(guild: GuildContext) {
    let service = ModerationService::new(Arc::new(MockGuild::new()));
    let actor = member(2, 10);
    let target = member(5, 40);

    // The duration is also invalid; the guard failure must win.
    let result = service
        .mute(
            &guild,
            &actor,
            &target,
            &reason("spam"),
            DurationComponents::default(),
        )
        .await;

    assert!(matches!(result, Err(CommandError::FailedHierarchy { .. })));
}

#[rstest]
#[tokio::test]
async fn mute_surfaces_platform_refusal_as_internal(guild: GuildContext) {
    let actions = Arc::new(InMemoryGuildActions::failing_with(
        GuildActionError::Forbidden,
    ));
    let service = ModerationService::new(actions);
    let actor = member(2, 40);
    let target = member(5, 10);

    let result = service
        .mute(&guild, &actor, &target, &reason("spam"), hour())
        .await;

    assert!(matches!(
        result,
        Err(CommandError::Internal(InternalError::Guild(
            GuildActionError::Forbidden
        )))
    ));
}

#[rstest]
#[tokio::test]
async fn unmute_rejects_target_without_active_timeout(guild: GuildContext) {
    let service = ModerationService::new(Arc::new(MockGuild::new()));
    let actor = member(2, 40);
    let target = member(5, 10);

    let result = service.unmute(&guild, &actor, &target, &reason("done")).await;

    assert!(matches!(result, Err(CommandError::UserNotMuted { .. })));
}

#[rstest]
#[tokio::test]
async fn unmute_lifts_the_timeout(guild: GuildContext) {
    let mut actions = MockGuild::new();
    actions
        .expect_timeout()
        .withf(|guild, user, duration, reason| {
            *guild == GuildId::new(100)
                && *user == UserId::new(5)
                && duration.is_none()
                && reason == "user-2 (2): calmed down"
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));
    let service = ModerationService::new(Arc::new(actions));
    let actor = member(2, 40);
    let mut target = member(5, 10);
    target.timed_out_until = Some(Utc::now() + TimeDelta::hours(1));

    let reply = service
        .unmute(&guild, &actor, &target, &reason("calmed down"))
        .await
        .expect("unmute should succeed");

    assert_eq!(reply.content, "Unmuted <@5>.\nReason: `calmed down`");
}
