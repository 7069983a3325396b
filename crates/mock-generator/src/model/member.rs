//! Guild member payloads.

use serde::{Deserialize, Serialize};

use super::User;

/// A guild member.
///
/// `is_pending` and `pending` always carry the same value; both names have
/// appeared in API responses and clients may read either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    /// Snowflakes of the roles held by the member.
    pub roles: Vec<String>,
    /// Guild nickname.
    pub nick: Option<String>,
    /// When the member started boosting the guild.
    pub premium_since: Option<String>,
    /// When the member joined the guild.
    pub joined_at: String,
    /// Membership screening state.
    pub is_pending: bool,
    /// Membership screening state, duplicated under its newer name.
    pub pending: bool,
    /// The member's user account.
    pub user: User,
    /// Whether the member is server-muted.
    pub mute: bool,
    /// Whether the member is server-deafened.
    pub deaf: bool,
}
