//! Typed command requests and the framework-native decode step.
//!
//! [`CommandRequest::parse`] is the analogue of the command framework's
//! transformer layer: it maps the qualified command name to a request
//! variant, validates option ranges, and constructs domain values. An
//! unknown name raises `CommandNotFound`; a bad option raises
//! `InvalidArgument`. Handlers downstream only ever see validated types.

use crate::command::domain::error::CommandError;
use crate::command::domain::interaction::Interaction;
use crate::guild::domain::{Member, Permissions, Reason};
use crate::tag::domain::{TagContent, TagName};

/// The four non-negative mute duration components, bounds already checked
/// against the option ranges (`days <= 28`, `hours <= 24`,
/// `minutes <= 60`, `seconds <= 60`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationComponents {
    /// Whole days.
    pub days: i64,
    /// Whole hours.
    pub hours: i64,
    /// Whole minutes.
    pub minutes: i64,
    /// Whole seconds.
    pub seconds: i64,
}

/// A decoded, validated command invocation.
#[derive(Debug, Clone)]
pub enum CommandRequest {
    /// `/tags create name content`
    TagsCreate {
        /// The new tag's name.
        name: TagName,
        /// The new tag's content.
        content: TagContent,
    },
    /// `/tags delete name`
    TagsDelete {
        /// The tag to delete.
        name: TagName,
    },
    /// `/tags edit name content`
    TagsEdit {
        /// The tag to edit.
        name: TagName,
        /// The replacement content.
        content: TagContent,
    },
    /// `/tags list`
    TagsList,
    /// `/warns add user reason`
    WarnsAdd {
        /// The member to warn.
        user: Member,
        /// The reason recorded with the warn.
        reason: Reason,
    },
    /// `/warns remove user warn_id`
    WarnsRemove {
        /// The member the warn belongs to.
        user: Member,
        /// The code of the warn to remove.
        warn_id: String,
    },
    /// `/warns list user`
    WarnsList {
        /// The member whose warns to list.
        user: Member,
    },
    /// `/warns clear user`
    WarnsClear {
        /// The member whose warns to clear.
        user: Member,
    },
    /// `/mute user reason [days] [hours] [minutes] [seconds]`
    Mute {
        /// The member to mute.
        user: Member,
        /// The reason recorded with the mute.
        reason: Reason,
        /// The requested timeout duration.
        duration: DurationComponents,
    },
    /// `/unmute user reason`
    Unmute {
        /// The member to unmute.
        user: Member,
        /// The reason recorded with the unmute.
        reason: Reason,
    },
}

impl CommandRequest {
    /// Decodes an interaction into a typed request.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::CommandNotFound`] for an unrecognised
    /// command name and [`CommandError::InvalidArgument`] for a missing
    /// or out-of-range option.
    pub fn parse(interaction: &Interaction) -> Result<Self, CommandError> {
        let command = interaction.command.as_str();
        let args = &interaction.args;

        match command {
            "tags create" => Ok(Self::TagsCreate {
                name: tag_name(command, args.str(command, "name")?)?,
                content: tag_content(command, args.str(command, "content")?)?,
            }),
            "tags delete" => Ok(Self::TagsDelete {
                name: tag_name(command, args.str(command, "name")?)?,
            }),
            "tags edit" => Ok(Self::TagsEdit {
                name: tag_name(command, args.str(command, "name")?)?,
                content: tag_content(command, args.str(command, "content")?)?,
            }),
            "tags list" => Ok(Self::TagsList),
            "warns add" => Ok(Self::WarnsAdd {
                user: args.member(command, "user")?.clone(),
                reason: reason(command, args.str(command, "reason")?)?,
            }),
            "warns remove" => Ok(Self::WarnsRemove {
                user: args.member(command, "user")?.clone(),
                warn_id: args.str(command, "warn_id")?.to_owned(),
            }),
            "warns list" => Ok(Self::WarnsList {
                user: args.member(command, "user")?.clone(),
            }),
            "warns clear" => Ok(Self::WarnsClear {
                user: args.member(command, "user")?.clone(),
            }),
            "mute" => Ok(Self::Mute {
                user: args.member(command, "user")?.clone(),
                reason: reason(command, args.str(command, "reason")?)?,
                duration: DurationComponents {
                    days: bounded(command, "days", args.integer_or(command, "days", 0)?, 28)?,
                    hours: bounded(command, "hours", args.integer_or(command, "hours", 0)?, 24)?,
                    minutes: bounded(
                        command,
                        "minutes",
                        args.integer_or(command, "minutes", 0)?,
                        60,
                    )?,
                    seconds: bounded(
                        command,
                        "seconds",
                        args.integer_or(command, "seconds", 0)?,
                        60,
                    )?,
                },
            }),
            "unmute" => Ok(Self::Unmute {
                user: args.member(command, "user")?.clone(),
                reason: reason(command, args.str(command, "reason")?)?,
            }),
            _ => Err(CommandError::CommandNotFound),
        }
    }

    /// Channel permissions the actor must hold for this request.
    #[must_use]
    pub const fn required_permissions(&self) -> Permissions {
        match self {
            Self::WarnsAdd { .. }
            | Self::WarnsRemove { .. }
            | Self::WarnsList { .. }
            | Self::WarnsClear { .. } => Permissions::manage_messages(),
            Self::Mute { .. } | Self::Unmute { .. } => Permissions::moderate_members(),
            Self::TagsCreate { .. }
            | Self::TagsDelete { .. }
            | Self::TagsEdit { .. }
            | Self::TagsList => Permissions::none(),
        }
    }

    /// Channel permissions the system actor must hold for this request.
    #[must_use]
    pub const fn required_bot_permissions(&self) -> Permissions {
        match self {
            Self::Mute { .. } | Self::Unmute { .. } => Permissions::moderate_members(),
            _ => Permissions::none(),
        }
    }
}

fn tag_name(command: &str, value: &str) -> Result<TagName, CommandError> {
    TagName::new(value).map_err(|e| invalid(command, "name", &e))
}

fn tag_content(command: &str, value: &str) -> Result<TagContent, CommandError> {
    TagContent::new(value).map_err(|e| invalid(command, "content", &e))
}

fn reason(command: &str, value: &str) -> Result<Reason, CommandError> {
    Reason::new(value).map_err(|e| invalid(command, "reason", &e))
}

fn bounded(command: &str, name: &str, value: i64, max: i64) -> Result<i64, CommandError> {
    if (0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CommandError::InvalidArgument {
            command: command.to_owned(),
            argument: name.to_owned(),
            reason: format!("expected a value between 0 and {max}, got {value}"),
        })
    }
}

fn invalid(command: &str, argument: &str, err: &impl std::fmt::Display) -> CommandError {
    CommandError::InvalidArgument {
        command: command.to_owned(),
        argument: argument.to_owned(),
        reason: err.to_string(),
    }
}
