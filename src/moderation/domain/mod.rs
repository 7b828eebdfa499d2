//! Domain logic for moderation: the guard chain and mute durations.

mod duration;
mod guards;

pub use duration::{MAX_TIMEOUT_DAYS, MuteDuration, format_duration};
pub use guards::check_member_target;
