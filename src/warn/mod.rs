//! Warn records: moderation strikes recorded against users.
//!
//! Warn codes are random 16-character alphanumeric identifiers generated
//! with a uniqueness retry against the store. Adding a warn also sends a
//! best-effort direct message to the warned user; clearing all warns
//! requires interactive confirmation with an explicit deadline.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
