//! Domain types for the command layer.

mod error;
mod interaction;
mod reply;
mod request;

pub use error::{CommandError, InternalError};
pub use interaction::{Actor, ArgValue, CommandArgs, Interaction, InteractionId};
pub use reply::{Attachment, Reply, Visibility};
pub use request::{CommandRequest, DurationComponents};
