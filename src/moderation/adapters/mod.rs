//! Adapters backing the moderation ports.

pub mod memory;

pub use memory::{AppliedTimeout, InMemoryGuildActions};
