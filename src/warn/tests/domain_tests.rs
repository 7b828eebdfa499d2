//! Unit tests for warn domain types.

use mockable::DefaultClock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use serde_json::json;

use crate::guild::domain::{Reason, UserId};
use crate::warn::domain::{WARN_ID_LENGTH, Warn, WarnId};

#[rstest]
fn warn_id_is_sixteen_alphanumeric_characters() {
    let id = WarnId::generate(&mut StdRng::seed_from_u64(7));
    assert_eq!(id.as_str().len(), WARN_ID_LENGTH);
    assert!(id.as_str().chars().all(char::is_alphanumeric));
}

#[rstest]
fn warn_id_generation_is_deterministic_under_a_fixed_seed() {
    let first = WarnId::generate(&mut StdRng::seed_from_u64(7));
    let second = WarnId::generate(&mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
}

#[rstest]
fn warn_id_from_code_preserves_text() {
    let id = WarnId::from_code("abc123");
    assert_eq!(id.as_str(), "abc123");
}

#[rstest]
fn warn_serializes_with_flat_document_fields() {
    let warn = Warn::new(
        UserId::new(1),
        Reason::new("spam").expect("valid reason"),
        UserId::new(2),
        WarnId::from_code("deadbeefdeadbeef"),
        &DefaultClock,
    );

    let document = serde_json::to_value(&warn).expect("warn should serialize");
    assert_eq!(document.get("user"), Some(&json!(1)));
    assert_eq!(document.get("reason"), Some(&json!("spam")));
    assert_eq!(document.get("moderator"), Some(&json!(2)));
    assert_eq!(document.get("warn_id"), Some(&json!("deadbeefdeadbeef")));
    assert!(document.get("issued_at").is_some());
}

#[rstest]
fn summary_line_shows_code_reason_and_moderator_mention() {
    let warn = Warn::new(
        UserId::new(1),
        Reason::new("spam").expect("valid reason"),
        UserId::new(2),
        WarnId::from_code("deadbeefdeadbeef"),
        &DefaultClock,
    );
    assert_eq!(warn.summary_line(), "deadbeefdeadbeef - spam - <@2>");
}
