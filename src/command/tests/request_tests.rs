//! Unit tests for request decoding and permission requirements.

use rstest::rstest;

use crate::command::domain::{
    Actor, CommandArgs, CommandError, CommandRequest, Interaction,
};
use crate::guild::domain::{
    GuildContext, GuildId, Member, Permissions, RolePosition, TopRole, UserId,
};

fn member(id: u64) -> Member {
    Member {
        id: UserId::new(id),
        name: format!("user-{id}"),
        is_bot: false,
        top_role: TopRole::new("member", RolePosition::new(1)),
        permissions: Permissions::none(),
        timed_out_until: None,
    }
}

fn guild() -> GuildContext {
    GuildContext::new(GuildId::new(100), "Test Guild", UserId::new(1), member(999))
}

fn interaction(command: &str, args: CommandArgs) -> Interaction {
    Interaction::new(Some(guild()), Actor::Member(member(2)), command, args)
}

#[rstest]
fn unknown_command_name_is_rejected() {
    let result = CommandRequest::parse(&interaction("frobnicate", CommandArgs::new()));
    assert!(matches!(result, Err(CommandError::CommandNotFound)));
}

#[rstest]
fn tags_create_decodes_name_and_content() {
    let request = CommandRequest::parse(&interaction(
        "tags create",
        CommandArgs::new()
            .with_str("name", "Rules")
            .with_str("content", "be nice"),
    ))
    .expect("decode should succeed");

    match request {
        CommandRequest::TagsCreate { name, content } => {
            assert_eq!(name.as_str(), "Rules");
            assert_eq!(content.as_str(), "be nice");
        }
        other => panic!("expected TagsCreate, got {other:?}"),
    }
}

#[rstest]
fn missing_required_option_is_an_invalid_argument() {
    let result = CommandRequest::parse(&interaction(
        "tags create",
        CommandArgs::new().with_str("name", "Rules"),
    ));

    assert!(matches!(
        result,
        Err(CommandError::InvalidArgument { argument, .. }) if argument == "content"
    ));
}

#[rstest]
fn option_kind_mismatch_is_an_invalid_argument() {
    let result = CommandRequest::parse(&interaction(
        "tags delete",
        CommandArgs::new().with_integer("name", 3),
    ));

    assert!(matches!(
        result,
        Err(CommandError::InvalidArgument { argument, .. }) if argument == "name"
    ));
}

#[rstest]
fn empty_tag_name_is_an_invalid_argument() {
    let result = CommandRequest::parse(&interaction(
        "tags delete",
        CommandArgs::new().with_str("name", ""),
    ));

    assert!(matches!(result, Err(CommandError::InvalidArgument { .. })));
}

#[rstest]
fn mute_defaults_omitted_duration_components_to_zero() {
    let request = CommandRequest::parse(&interaction(
        "mute",
        CommandArgs::new()
            .with_member("user", member(5))
            .with_str("reason", "spam")
            .with_integer("minutes", 10),
    ))
    .expect("decode should succeed");

    match request {
        CommandRequest::Mute { duration, .. } => {
            assert_eq!(duration.days, 0);
            assert_eq!(duration.hours, 0);
            assert_eq!(duration.minutes, 10);
            assert_eq!(duration.seconds, 0);
        }
        other => panic!("expected Mute, got {other:?}"),
    }
}

#[rstest]
#[case("days", 29)]
#[case("hours", 25)]
#[case("minutes", 61)]
#[case("seconds", -1)]
fn mute_rejects_out_of_range_duration_options(#[case] option: &str, #[case] value: i64) {
    let result = CommandRequest::parse(&interaction(
        "mute",
        CommandArgs::new()
            .with_member("user", member(5))
            .with_str("reason", "spam")
            .with_integer(option, value),
    ));

    assert!(matches!(
        result,
        Err(CommandError::InvalidArgument { argument, .. }) if argument == option
    ));
}

#[rstest]
fn warns_commands_require_manage_messages() {
    let request = CommandRequest::parse(&interaction(
        "warns list",
        CommandArgs::new().with_member("user", member(5)),
    ))
    .expect("decode should succeed");

    assert_eq!(
        request.required_permissions(),
        Permissions::manage_messages()
    );
    assert_eq!(request.required_bot_permissions(), Permissions::none());
}

#[rstest]
fn mute_requires_moderate_members_on_both_sides() {
    let request = CommandRequest::parse(&interaction(
        "mute",
        CommandArgs::new()
            .with_member("user", member(5))
            .with_str("reason", "spam")
            .with_integer("minutes", 10),
    ))
    .expect("decode should succeed");

    assert_eq!(
        request.required_permissions(),
        Permissions::moderate_members()
    );
    assert_eq!(
        request.required_bot_permissions(),
        Permissions::moderate_members()
    );
}

#[rstest]
fn tags_commands_require_no_permissions() {
    let request = CommandRequest::parse(&interaction("tags list", CommandArgs::new()))
        .expect("decode should succeed");

    assert_eq!(request.required_permissions(), Permissions::none());
    assert_eq!(request.required_bot_permissions(), Permissions::none());
}
