//! Unit tests for the platform kernel.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod domain_tests;
