//! Channel message payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

/// Discord message type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
pub enum MessageType {
    /// Regular user message.
    Default = 0,
    /// Recipient added to a group DM.
    RecipientAdd = 1,
    /// Recipient removed from a group DM.
    RecipientRemove = 2,
    /// Call notification.
    Call = 3,
    /// Channel renamed.
    ChannelNameChange = 4,
    /// Channel icon changed.
    ChannelIconChange = 5,
    /// Message pinned.
    ChannelPinnedMessage = 6,
    /// Member joined the guild.
    GuildMemberJoin = 7,
    /// Member boosted the guild.
    UserPremiumGuildSubscription = 8,
    /// Guild reached boost tier 1.
    UserPremiumGuildSubscriptionTier1 = 9,
    /// Guild reached boost tier 2.
    UserPremiumGuildSubscriptionTier2 = 10,
    /// Guild reached boost tier 3.
    UserPremiumGuildSubscriptionTier3 = 11,
    /// Announcement channel followed.
    ChannelFollowAdd = 12,
    /// Guild removed from discovery.
    GuildDiscoveryDisqualified = 14,
    /// Guild back in discovery.
    GuildDiscoveryRequalified = 15,
    /// First discovery grace period warning.
    GuildDiscoveryGracePeriodInitialWarning = 16,
    /// Final discovery grace period warning.
    GuildDiscoveryGracePeriodFinalWarning = 17,
    /// Thread created.
    ThreadCreated = 18,
    /// Reply to another message.
    Reply = 19,
    /// Slash command response.
    ChatInputCommand = 20,
    /// First message of a thread.
    ThreadStarterMessage = 21,
    /// Invite reminder.
    GuildInviteReminder = 22,
    /// Context menu command response.
    ContextMenuCommand = 23,
    /// Auto-moderation action.
    AutoModerationAction = 24,
}

impl MessageType {
    /// Every message type the generator may pick.
    pub const ALL: [Self; 24] = [
        Self::Default,
        Self::RecipientAdd,
        Self::RecipientRemove,
        Self::Call,
        Self::ChannelNameChange,
        Self::ChannelIconChange,
        Self::ChannelPinnedMessage,
        Self::GuildMemberJoin,
        Self::UserPremiumGuildSubscription,
        Self::UserPremiumGuildSubscriptionTier1,
        Self::UserPremiumGuildSubscriptionTier2,
        Self::UserPremiumGuildSubscriptionTier3,
        Self::ChannelFollowAdd,
        Self::GuildDiscoveryDisqualified,
        Self::GuildDiscoveryRequalified,
        Self::GuildDiscoveryGracePeriodInitialWarning,
        Self::GuildDiscoveryGracePeriodFinalWarning,
        Self::ThreadCreated,
        Self::Reply,
        Self::ChatInputCommand,
        Self::ThreadStarterMessage,
        Self::GuildInviteReminder,
        Self::ContextMenuCommand,
        Self::AutoModerationAction,
    ];
}

impl From<MessageType> for u8 {
    fn from(kind: MessageType) -> Self {
        kind as Self
    }
}

impl TryFrom<u8> for MessageType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| u8::from(*kind) == value)
            .ok_or_else(|| format!("unknown message type: {value}"))
    }
}

/// A message posted in a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message snowflake.
    pub id: String,
    /// Message type code.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Message text.
    pub content: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Message author.
    pub author: User,
    /// Attached files.
    pub attachments: Vec<Value>,
    /// Rich embeds.
    pub embeds: Vec<Value>,
    /// Mentioned users.
    pub mentions: Vec<Value>,
    /// Mentioned role snowflakes.
    pub mention_roles: Vec<Value>,
    /// Whether the message is pinned.
    pub pinned: bool,
    /// Whether the message mentions everyone.
    pub mention_everyone: bool,
    /// Whether the message was sent as text-to-speech.
    pub tts: bool,
    /// When the message was sent.
    pub timestamp: String,
    /// When the message was last edited.
    pub edited_timestamp: Option<String>,
    /// Message flags.
    pub flags: u64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(MessageType::Default, 0)]
    #[case(MessageType::Reply, 19)]
    #[case(MessageType::AutoModerationAction, 24)]
    fn message_type_round_trips_through_code(#[case] kind: MessageType, #[case] code: u8) {
        assert_eq!(u8::from(kind), code);
        assert_eq!(MessageType::try_from(code), Ok(kind));
    }

    #[test]
    fn message_type_rejects_unused_code() {
        assert_eq!(
            MessageType::try_from(13),
            Err("unknown message type: 13".to_owned())
        );
    }
}
