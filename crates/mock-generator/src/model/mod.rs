//! Serialisable Discord API payload types.
//!
//! These types mirror the JSON shapes a client receives from the API.
//! Optional fields serialise as `null` unless documented otherwise, so the
//! key set of every payload is fixed.

mod channel;
mod member;
mod message;
mod role;
mod user;

pub use channel::{
    ChannelType, ChannelV6, ChannelV8, OverwriteType, PermissionOverwrite, PermissionOverwriteV6,
};
pub use member::GuildMember;
pub use message::{Message, MessageType};
pub use role::{Role, RoleTags};
pub use user::User;
