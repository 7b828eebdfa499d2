//! Channel permission flags consumed by the command layer.
//!
//! Only the permissions this command surface actually gates on are
//! modelled; a gateway adapter projects the platform's full bitfield down
//! to these flags when it resolves a member.

use serde::{Deserialize, Serialize};

/// The subset of channel permissions the dispatcher checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Required for warn management and elevated tag mutation.
    pub manage_messages: bool,
    /// Required for mute and unmute.
    pub moderate_members: bool,
}

impl Permissions {
    /// No permissions.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            manage_messages: false,
            moderate_members: false,
        }
    }

    /// The `manage_messages` permission alone.
    #[must_use]
    pub const fn manage_messages() -> Self {
        Self {
            manage_messages: true,
            moderate_members: false,
        }
    }

    /// The `moderate_members` permission alone.
    #[must_use]
    pub const fn moderate_members() -> Self {
        Self {
            manage_messages: false,
            moderate_members: true,
        }
    }

    /// Returns `true` if every flag in `required` is also set here.
    #[must_use]
    pub const fn contains(self, required: Self) -> bool {
        (self.manage_messages || !required.manage_messages)
            && (self.moderate_members || !required.moderate_members)
    }

    /// Names of the flags in `required` that are not set here, in the
    /// platform's snake_case spelling, for permission error copy.
    #[must_use]
    pub fn missing(self, required: Self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if required.manage_messages && !self.manage_messages {
            names.push("manage_messages");
        }
        if required.moderate_members && !self.moderate_members {
            names.push("moderate_members");
        }
        names
    }
}
