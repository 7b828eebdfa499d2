//! Services coordinating warn handlers.

mod warns;

pub use warns::{DEFAULT_CONFIRMATION_TIMEOUT, MAX_WARN_ID_ATTEMPTS, WarnService};
