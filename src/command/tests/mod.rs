//! Unit tests for the command layer.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod renderer_tests;
mod request_tests;
