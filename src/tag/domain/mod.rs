//! Domain types for tags.

mod tag;

pub use tag::{Tag, TagContent, TagContentError, TagName, TagNameError};
