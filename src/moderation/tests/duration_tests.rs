//! Unit tests for mute duration validation and formatting.

use chrono::TimeDelta;
use rstest::rstest;

use crate::command::domain::{CommandError, DurationComponents};
use crate::moderation::domain::{MuteDuration, format_duration};

fn components(days: i64, hours: i64, minutes: i64, seconds: i64) -> DurationComponents {
    DurationComponents {
        days,
        hours,
        minutes,
        seconds,
    }
}

#[rstest]
fn zero_duration_is_invalid() {
    let result = MuteDuration::from_components(components(0, 0, 0, 0));
    assert!(matches!(result, Err(CommandError::InvalidDuration { .. })));
}

#[rstest]
fn duration_over_twenty_eight_days_is_too_long() {
    let result = MuteDuration::from_components(components(28, 0, 0, 1));
    assert!(matches!(result, Err(CommandError::DurationTooLong { .. })));
}

#[rstest]
fn exactly_twenty_eight_days_is_accepted() {
    let duration = MuteDuration::from_components(components(28, 0, 0, 0))
        .expect("the ceiling itself should be accepted");
    assert_eq!(duration.delta(), TimeDelta::days(28));
}

#[rstest]
#[case(components(1, 0, 0, 0), 86_400)]
#[case(components(0, 2, 30, 0), 9_000)]
#[case(components(0, 0, 0, 1), 1)]
fn components_sum_to_seconds(#[case] parts: DurationComponents, #[case] expected: i64) {
    let duration =
        MuteDuration::from_components(parts).expect("in-range duration should be accepted");
    assert_eq!(duration.delta().num_seconds(), expected);
}

#[rstest]
#[case(TimeDelta::seconds(90_061), "1 days 1 hours 1 minutes 1 seconds")]
#[case(TimeDelta::hours(2), "2 hours")]
#[case(TimeDelta::seconds(45), "45 seconds")]
#[case(TimeDelta::seconds(3_605), "1 hours 5 seconds")]
fn format_duration_joins_non_zero_components(#[case] delta: TimeDelta, #[case] expected: &str) {
    assert_eq!(format_duration(delta), expected);
}
