//! Dispatch and error rendering for the command layer.

mod dispatcher;
mod renderer;

pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use renderer::render;
