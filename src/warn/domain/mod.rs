//! Domain types for warns.

mod warn;

pub use warn::{WARN_ID_LENGTH, Warn, WarnId};
