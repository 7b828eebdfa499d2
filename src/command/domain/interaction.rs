//! Inbound interaction model.
//!
//! A gateway adapter decodes each platform interaction into these types
//! before handing it to the dispatcher: the actor (resolved member or bare
//! user), the guild context if any, the qualified command name, and the
//! already-resolved option values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::command::domain::error::CommandError;
use crate::guild::domain::{GuildContext, Member, UserId};

/// Unique identifier for one inbound interaction, carried through logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionId(Uuid);

impl InteractionId {
    /// Creates a new random interaction identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an interaction identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for InteractionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The account invoking a command.
///
/// Inside a guild the platform resolves a full member record; elsewhere
/// only a bare user identity is available, and commands that need rank or
/// permission data must reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// A fully resolved guild member.
    Member(Member),
    /// A bare user with no member-scoped data.
    User(UserId),
}

impl Actor {
    /// Returns the actor's user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        match self {
            Self::Member(member) => member.id,
            Self::User(id) => *id,
        }
    }

    /// Returns the member record, or `None` for a bare user.
    #[must_use]
    pub const fn member(&self) -> Option<&Member> {
        match self {
            Self::Member(member) => Some(member),
            Self::User(_) => None,
        }
    }
}

/// A resolved option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgValue {
    /// A text option.
    String(String),
    /// An integer option.
    Integer(i64),
    /// A user option the gateway resolved to a member record.
    Member(Member),
}

impl ArgValue {
    const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Member(_) => "member",
        }
    }
}

/// The option values attached to an interaction, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandArgs {
    values: BTreeMap<String, ArgValue>,
}

impl CommandArgs {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text option.
    #[must_use]
    pub fn with_str(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .insert(name.into(), ArgValue::String(value.into()));
        self
    }

    /// Adds an integer option.
    #[must_use]
    pub fn with_integer(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.insert(name.into(), ArgValue::Integer(value));
        self
    }

    /// Adds a resolved member option.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, member: Member) -> Self {
        self.values.insert(name.into(), ArgValue::Member(member));
        self
    }

    /// Fetches a required text option.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] when the option is
    /// missing or has a different kind.
    pub fn str(&self, command: &str, name: &str) -> Result<&str, CommandError> {
        match self.values.get(name) {
            Some(ArgValue::String(value)) => Ok(value),
            Some(other) => Err(kind_mismatch(command, name, "string", other)),
            None => Err(missing(command, name)),
        }
    }

    /// Fetches an optional integer option, defaulting when absent.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] when the option is
    /// present with a different kind.
    pub fn integer_or(&self, command: &str, name: &str, default: i64) -> Result<i64, CommandError> {
        match self.values.get(name) {
            Some(ArgValue::Integer(value)) => Ok(*value),
            Some(other) => Err(kind_mismatch(command, name, "integer", other)),
            None => Ok(default),
        }
    }

    /// Fetches a required resolved-member option.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] when the option is
    /// missing or has a different kind.
    pub fn member(&self, command: &str, name: &str) -> Result<&Member, CommandError> {
        match self.values.get(name) {
            Some(ArgValue::Member(member)) => Ok(member),
            Some(other) => Err(kind_mismatch(command, name, "member", other)),
            None => Err(missing(command, name)),
        }
    }
}

fn missing(command: &str, name: &str) -> CommandError {
    CommandError::InvalidArgument {
        command: command.to_owned(),
        argument: name.to_owned(),
        reason: "required option is missing".to_owned(),
    }
}

fn kind_mismatch(command: &str, name: &str, expected: &str, got: &ArgValue) -> CommandError {
    CommandError::InvalidArgument {
        command: command.to_owned(),
        argument: name.to_owned(),
        reason: format!("expected a {expected} option, got {}", got.kind()),
    }
}

/// One inbound command invocation from the platform gateway.
#[derive(Debug, Clone)]
pub struct Interaction {
    /// Identifier carried through logs.
    pub id: InteractionId,
    /// The guild context, or `None` for a private-message invocation.
    pub guild: Option<GuildContext>,
    /// The invoking account.
    pub actor: Actor,
    /// The qualified command name, e.g. `"tags create"` or `"mute"`.
    pub command: String,
    /// The resolved option values.
    pub args: CommandArgs,
}

impl Interaction {
    /// Creates an interaction with a fresh identifier.
    #[must_use]
    pub fn new(
        guild: Option<GuildContext>,
        actor: Actor,
        command: impl Into<String>,
        args: CommandArgs,
    ) -> Self {
        Self {
            id: InteractionId::new(),
            guild,
            actor,
            command: command.into(),
            args,
        }
    }
}
