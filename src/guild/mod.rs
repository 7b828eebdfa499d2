//! Shared platform kernel.
//!
//! Types describing the chat platform's view of a server: snowflake
//! identifiers, member records with rank and permission data, and the
//! guild context every guild-only command executes in. These types carry
//! no behaviour beyond validation and formatting; the other contexts
//! build their guards and handlers on top of them.

pub mod domain;

#[cfg(test)]
mod tests;
