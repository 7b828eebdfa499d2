//! Adapters implementing the warn ports.

pub mod memory;

pub use memory::{InMemoryWarnRepository, RecordingNotifier, ScriptedConfirmation};
