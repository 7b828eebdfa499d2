//! Adapters implementing the tag ports.

pub mod memory;

pub use memory::InMemoryTagRepository;
