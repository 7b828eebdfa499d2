//! Unit tests for kernel domain types.

use rstest::rstest;

use crate::guild::domain::{Permissions, Reason, ReasonError, RoleId, RolePosition, UserId};

#[rstest]
fn user_id_mention_uses_platform_markup() {
    let id = UserId::new(80_351_110_224_678_912);
    assert_eq!(id.mention(), "<@80351110224678912>");
}

#[rstest]
fn role_id_mention_uses_platform_markup() {
    let id = RoleId::new(42);
    assert_eq!(id.mention(), "<@&42>");
}

#[rstest]
#[case(5, 3, true)]
#[case(3, 3, false)]
#[case(2, 3, false)]
fn role_positions_order_by_value(#[case] left: i64, #[case] right: i64, #[case] outranks: bool) {
    assert_eq!(RolePosition::new(left) > RolePosition::new(right), outranks);
}

#[rstest]
fn permissions_contains_requires_every_flag() {
    let held = Permissions::manage_messages();
    assert!(held.contains(Permissions::manage_messages()));
    assert!(held.contains(Permissions::none()));
    assert!(!held.contains(Permissions::moderate_members()));
}

#[rstest]
fn permissions_missing_names_absent_flags() {
    let required = Permissions {
        manage_messages: true,
        moderate_members: true,
    };
    let missing = Permissions::manage_messages().missing(required);
    assert_eq!(missing, vec!["moderate_members"]);
}

#[rstest]
fn reason_accepts_text_within_limit() {
    let reason = Reason::new("spam").expect("short reason should validate");
    assert_eq!(reason.as_str(), "spam");
}

#[rstest]
fn reason_rejects_empty_text() {
    assert_eq!(Reason::new(""), Err(ReasonError::Empty));
}

#[rstest]
fn reason_rejects_text_over_limit() {
    let text = "x".repeat(257);
    assert_eq!(Reason::new(text), Err(ReasonError::TooLong(257)));
}
