//! Unit tests for the tag context.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
