//! Moderation actions against guild members.
//!
//! Holds the authorization guard chain applied to every member-targeting
//! action, the mute-duration arithmetic with its platform ceiling, and the
//! handlers that forward timeouts to the platform.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
