//! Services coordinating tag handlers.

mod tags;

pub use tags::TagService;
