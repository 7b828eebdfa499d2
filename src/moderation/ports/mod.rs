//! Outbound ports for the moderation context.

pub mod guild_actions;

pub use guild_actions::{GuildActionError, GuildActions};
