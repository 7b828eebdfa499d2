//! Domain types for the platform kernel.

mod ids;
mod member;
mod permissions;
mod reason;

pub use ids::{GuildId, RoleId, RolePosition, UserId};
pub use member::{GuildContext, Member, TopRole};
pub use permissions::Permissions;
pub use reason::{Reason, ReasonError};
