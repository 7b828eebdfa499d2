//! Unit tests for the moderation context.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod duration_tests;
mod service_tests;
