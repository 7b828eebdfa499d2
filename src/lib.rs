//! Warden: chat-platform moderation command core.
//!
//! This crate implements the command dispatch, authorization, and error
//! taxonomy layer of a moderation bot: typed slash-command requests,
//! per-command guard chains (role hierarchy, identity exclusions, duration
//! bounds), persistence of small structured records (tags, warns), and a
//! single dispatch site that renders every failure kind into user-facing
//! copy.
//!
//! # Architecture
//!
//! Warden follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//!   (document store, platform API, confirmation UI)
//! - **Adapters**: Concrete implementations of ports (in-memory for tests)
//!
//! The gateway connection and the real document-store driver are external
//! collaborators; a hosting process decodes inbound interactions into
//! [`command::domain::Interaction`] values and forwards the resulting
//! [`command::services::DispatchOutcome`] replies back to the platform.
//!
//! # Modules
//!
//! - [`guild`]: Shared platform kernel (identifiers, members, permissions)
//! - [`tag`]: Tag records and handlers
//! - [`warn`]: Warn records, notification, confirmation, and handlers
//! - [`moderation`]: Guard chain, mute durations, and platform actions
//! - [`command`]: Error taxonomy, request parsing, dispatcher, renderer

pub mod command;
pub mod guild;
pub mod moderation;
pub mod tag;
pub mod warn;
