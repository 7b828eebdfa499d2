//! Mute duration arithmetic and formatting.

use chrono::TimeDelta;

use crate::command::domain::{CommandError, DurationComponents};

/// The platform-imposed ceiling on a timeout.
pub const MAX_TIMEOUT_DAYS: i64 = 28;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86_400;

/// A validated timeout duration: strictly positive and at most 28 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteDuration(TimeDelta);

impl MuteDuration {
    /// Builds a duration from its four components, enforcing the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidDuration`] when the total is zero
    /// and [`CommandError::DurationTooLong`] when it exceeds
    /// [`MAX_TIMEOUT_DAYS`] days.
    pub fn from_components(components: DurationComponents) -> Result<Self, CommandError> {
        let total_seconds = components.days * SECONDS_PER_DAY
            + components.hours * SECONDS_PER_HOUR
            + components.minutes * SECONDS_PER_MINUTE
            + components.seconds;
        let delta = TimeDelta::seconds(total_seconds);

        if delta.is_zero() {
            return Err(CommandError::InvalidDuration { duration: delta });
        }
        if delta > TimeDelta::days(MAX_TIMEOUT_DAYS) {
            return Err(CommandError::DurationTooLong { duration: delta });
        }

        Ok(Self(delta))
    }

    /// Returns the validated delta to forward to the platform.
    #[must_use]
    pub const fn delta(self) -> TimeDelta {
        self.0
    }
}

/// Formats a delta as its non-zero components joined by spaces, e.g.
/// `"1 days 2 hours 5 seconds"`.
#[must_use]
pub fn format_duration(delta: TimeDelta) -> String {
    let days = delta.num_days();
    let hours = delta.num_hours() - days * 24;
    let minutes = delta.num_minutes() - delta.num_hours() * 60;
    let seconds = delta.num_seconds() - delta.num_minutes() * 60;

    let parts = [
        (days, "days"),
        (hours, "hours"),
        (minutes, "minutes"),
        (seconds, "seconds"),
    ];

    let rendered: Vec<String> = parts
        .iter()
        .filter(|(amount, _)| *amount != 0)
        .map(|(amount, unit)| format!("{amount} {unit}"))
        .collect();

    rendered.join(" ")
}
