//! Services coordinating moderation handlers.

mod moderation;

pub use moderation::ModerationService;
