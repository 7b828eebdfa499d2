//! Tag records: named snippets members can store and recall.
//!
//! Tags are owned by the document store; every operation round-trips, and
//! uniqueness is enforced on the lowercased name before insert.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
