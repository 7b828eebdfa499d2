//! Command dispatch: the error taxonomy, request decoding, the dispatcher,
//! and the single error-rendering site.
//!
//! The dispatcher is the only recovery point in the crate: handlers raise
//! taxonomy errors and never catch them; the renderer maps every kind to
//! exactly one message template and visibility. Internal failures are
//! rendered generically, logged, and handed back to the host loop rather
//! than swallowed.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
