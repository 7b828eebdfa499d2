//! Unit tests for the error renderer.

use chrono::TimeDelta;
use rstest::rstest;

use crate::command::domain::{CommandError, InternalError, Visibility};
use crate::command::services::render;
use crate::guild::domain::{Member, Permissions, RoleId, RolePosition, TopRole, UserId};

fn member(id: u64, name: &str, position: i64) -> Member {
    Member {
        id: UserId::new(id),
        name: name.to_owned(),
        is_bot: false,
        top_role: TopRole::new(format!("{name}-role"), RolePosition::new(position)),
        permissions: Permissions::none(),
        timed_out_until: None,
    }
}

#[rstest]
fn command_not_found_is_ephemeral() {
    let reply = render(&CommandError::CommandNotFound);
    assert_eq!(reply.content, "This command does not exist.");
    assert!(reply.is_ephemeral());
}

#[rstest]
fn no_private_message_is_ephemeral() {
    let reply = render(&CommandError::NoPrivateMessage);
    assert_eq!(
        reply.content,
        "This command cannot be used in private messages."
    );
    assert!(reply.is_ephemeral());
}

#[rstest]
fn missing_actor_permissions_are_shown_publicly() {
    let reply = render(&CommandError::MissingPermissions {
        permissions: vec!["manage_messages", "moderate_members"],
    });
    assert_eq!(
        reply.content,
        "You are missing the following permissions: manage_messages, moderate_members."
    );
    assert_eq!(reply.visibility, Visibility::Public);
}

#[rstest]
fn missing_bot_permissions_stay_ephemeral() {
    let reply = render(&CommandError::BotMissingPermissions {
        permissions: vec!["moderate_members"],
    });
    assert_eq!(
        reply.content,
        "I am missing the following permissions: moderate_members."
    );
    assert!(reply.is_ephemeral());
}

#[rstest]
fn cooldown_is_shown_publicly_with_retry_seconds() {
    let reply = render(&CommandError::OnCooldown {
        retry_after: TimeDelta::seconds(42),
    });
    assert_eq!(
        reply.content,
        "This command is on cooldown. Try again in 42 seconds."
    );
    assert_eq!(reply.visibility, Visibility::Public);
}

#[rstest]
fn missing_role_renders_the_role_mention() {
    let reply = render(&CommandError::MissingRole {
        role: RoleId::new(7),
    });
    assert_eq!(reply.content, "You are missing the <@&7> role.");
    assert!(reply.is_ephemeral());
}

#[rstest]
fn missing_any_role_lists_every_accepted_role() {
    let reply = render(&CommandError::MissingAnyRole {
        roles: vec![RoleId::new(7), RoleId::new(8)],
    });
    assert_eq!(
        reply.content,
        "You are missing the following roles: <@&7>, <@&8>."
    );
}

#[rstest]
fn failed_hierarchy_names_both_top_roles() {
    let reply = render(&CommandError::FailedHierarchy {
        invoker: Box::new(member(2, "mod", 10)),
        target: Box::new(member(5, "admin", 40)),
    });
    assert_eq!(
        reply.content,
        "<@5> is above you in roles, meaning you can't do that. \
         Your top role is mod-role (position 10); their top role is admin-role (position 40)."
    );
    assert!(reply.is_ephemeral());
}

#[rstest]
fn bot_failed_hierarchy_asks_to_be_moved_up() {
    let reply = render(&CommandError::BotFailedHierarchy {
        target: Box::new(member(5, "admin", 40)),
    });
    assert_eq!(
        reply.content,
        "<@5> is above me in roles, meaning I can't do that. \
         Please move me above them in roles and try again."
    );
}

#[rstest]
fn duration_errors_report_total_seconds() {
    let invalid = render(&CommandError::InvalidDuration {
        duration: TimeDelta::zero(),
    });
    assert_eq!(invalid.content, "A duration of 0 seconds is not valid.");

    let too_long = render(&CommandError::DurationTooLong {
        duration: TimeDelta::days(29),
    });
    assert_eq!(
        too_long.content,
        "A duration of 2505600 seconds is longer than the 28 day maximum."
    );
}

#[rstest]
fn internal_failures_render_generically_and_publicly() {
    let reply = render(&CommandError::Internal(InternalError::WarnIdExhausted {
        attempts: 8,
    }));
    assert_eq!(
        reply.content,
        "An unknown error occurred while running this command."
    );
    assert_eq!(reply.visibility, Visibility::Public);
}

#[rstest]
#[case(CommandError::TagNotFound, "This tag does not exist.")]
#[case(CommandError::TagExists, "This tag already exists.")]
#[case(
    CommandError::MissingPermissionsForTagDeletion,
    "You are missing permissions to delete this tag."
)]
#[case(
    CommandError::MissingPermissionsForTagEdit,
    "You are missing permissions to edit this tag."
)]
#[case(CommandError::WarnNotFound, "This warn does not exist.")]
#[case(
    CommandError::CannotPerformActionOnMe,
    "You cannot perform this action on me."
)]
#[case(
    CommandError::CannotPerformActionOnBot,
    "You cannot perform this action on a bot."
)]
#[case(
    CommandError::CannotPerformActionOnSelf,
    "You cannot perform this action on yourself."
)]
#[case(
    CommandError::CannotPerformActionOnOwner,
    "You cannot perform this action on the server owner."
)]
fn simple_variants_render_their_template(#[case] error: CommandError, #[case] expected: &str) {
    let reply = render(&error);
    assert_eq!(reply.content, expected);
    assert!(reply.is_ephemeral());
}
