//! Channel and permission overwrite payloads for API v6 and v8.

use serde::{Deserialize, Serialize};

/// Discord channel type codes emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChannelType {
    /// Text channel within a guild.
    GuildText = 0,
    /// Direct message between two users.
    Dm = 1,
    /// Voice channel within a guild.
    GuildVoice = 2,
    /// Direct message between several users.
    GroupDm = 3,
    /// Category grouping other channels.
    GuildCategory = 4,
    /// Announcement (news) channel.
    GuildNews = 5,
    /// Store page channel.
    GuildStore = 6,
    /// Thread inside an announcement channel.
    NewsThread = 10,
    /// Public thread inside a text channel.
    PublicThread = 11,
    /// Private thread inside a text channel.
    PrivateThread = 12,
    /// Stage voice channel.
    GuildStageVoice = 13,
    /// Forum channel.
    GuildForum = 15,
}

impl ChannelType {
    /// Every channel type the generator may pick.
    pub const ALL: [Self; 12] = [
        Self::GuildText,
        Self::Dm,
        Self::GuildVoice,
        Self::GroupDm,
        Self::GuildCategory,
        Self::GuildNews,
        Self::GuildStore,
        Self::NewsThread,
        Self::PublicThread,
        Self::PrivateThread,
        Self::GuildStageVoice,
        Self::GuildForum,
    ];
}

impl From<ChannelType> for u8 {
    fn from(kind: ChannelType) -> Self {
        kind as Self
    }
}

impl TryFrom<u8> for ChannelType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| u8::from(*kind) == value)
            .ok_or_else(|| format!("unknown channel type: {value}"))
    }
}

/// Target of a permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteType {
    /// Overwrite applies to a role.
    Role,
    /// Overwrite applies to a single member.
    Member,
}

/// A v8 permission overwrite with string-encoded bitfields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    /// Role or user snowflake.
    pub id: String,
    /// Whether `id` names a role or a member.
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    /// Allowed permission bits as a decimal string.
    pub allow: String,
    /// Denied permission bits as a decimal string.
    pub deny: String,
}

/// A v6 permission overwrite carrying both permission encodings.
///
/// The v6 API sent legacy integer bitfields next to their string form, so
/// `allow`/`allowNew` and `deny`/`denyNew` are both kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwriteV6 {
    /// Role or user snowflake.
    pub id: String,
    /// Whether `id` names a role or a member.
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    /// Allowed permission bits as an integer.
    pub allow: u64,
    /// Denied permission bits as an integer.
    pub deny: u64,
    /// Allowed permission bits in the newer string encoding.
    #[serde(rename = "allowNew")]
    pub allow_new: String,
    /// Denied permission bits in the newer string encoding.
    #[serde(rename = "denyNew")]
    pub deny_new: String,
}

/// A guild channel as returned by the v8 API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelV8 {
    /// Channel snowflake.
    pub id: String,
    /// Channel type code.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Owning guild snowflake.
    pub guild_id: String,
    /// Sort position.
    pub position: u64,
    /// Explicit permission overwrites.
    pub permission_overwrites: Vec<PermissionOverwrite>,
    /// Channel name.
    pub name: String,
    /// Channel topic.
    pub topic: Option<String>,
    /// Whether the channel is age-restricted.
    pub nsfw: bool,
    /// Snowflake of the most recent message.
    pub last_message_id: Option<String>,
    /// Voice bitrate in bits per second.
    pub bitrate: u64,
    /// Voice user limit.
    pub user_limit: u64,
    /// Slow-mode delay in seconds.
    pub rate_limit_per_user: Option<u64>,
    /// Icon hash.
    pub icon: Option<String>,
    /// Parent category snowflake.
    pub parent_id: Option<String>,
    /// When a message was last pinned.
    pub last_pin_timestamp: Option<String>,
    /// Voice region identifier.
    pub rtc_region: String,
}

/// A guild channel as returned by the v6 API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelV6 {
    /// Channel snowflake.
    pub id: String,
    /// Channel type code.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Channel name.
    pub name: String,
    /// Sort position.
    pub position: u64,
    /// Parent category snowflake.
    pub parent_id: Option<String>,
    /// Voice bitrate in bits per second.
    pub bitrate: u64,
    /// Voice user limit.
    pub user_limit: u64,
    /// Voice region identifier.
    pub rtc_region: String,
    /// Owning guild snowflake.
    pub guild_id: String,
    /// Explicit permission overwrites.
    pub permission_overwrites: Vec<PermissionOverwriteV6>,
    /// Whether the channel is age-restricted.
    pub nsfw: bool,
}
