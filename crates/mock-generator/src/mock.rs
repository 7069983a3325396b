//! The allow-list of mock names and user selections over it.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::MockNameError;

/// A fixture the generator knows how to produce.
///
/// The declaration order is the order in which a selection is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MockName {
    /// A single v6 guild channel.
    GetChannelV6,
    /// A single v8 guild channel.
    GetChannelV8,
    /// Three v6 channel groups, flattened.
    GetChannelsV6,
    /// Three v8 channel groups, flattened.
    GetChannelsV8,
    /// A single message.
    GetChannelMessage,
    /// Several messages.
    GetChannelMessages,
    /// A guild member.
    GetGuildMember,
    /// A guild's `@everyone` role followed by its other roles.
    GetGuildRoles,
    /// A freshly created role.
    CreateGuildRole,
    /// Users who reacted to a message.
    GetReactions,
}

impl MockName {
    /// Every mock, in write order.
    pub const ALL: [Self; 10] = [
        Self::GetChannelV6,
        Self::GetChannelV8,
        Self::GetChannelsV6,
        Self::GetChannelsV8,
        Self::GetChannelMessage,
        Self::GetChannelMessages,
        Self::GetGuildMember,
        Self::GetGuildRoles,
        Self::CreateGuildRole,
        Self::GetReactions,
    ];

    /// Returns the camel-case name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetChannelV6 => "getChannelV6",
            Self::GetChannelV8 => "getChannelV8",
            Self::GetChannelsV6 => "getChannelsV6",
            Self::GetChannelsV8 => "getChannelsV8",
            Self::GetChannelMessage => "getChannelMessage",
            Self::GetChannelMessages => "getChannelMessages",
            Self::GetGuildMember => "getGuildMember",
            Self::GetGuildRoles => "getGuildRoles",
            Self::CreateGuildRole => "createGuildRole",
            Self::GetReactions => "getReactions",
        }
    }

    /// Returns the kebab-case form of the name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::GetChannelV6 => "get-channel-v6",
            Self::GetChannelV8 => "get-channel-v8",
            Self::GetChannelsV6 => "get-channels-v6",
            Self::GetChannelsV8 => "get-channels-v8",
            Self::GetChannelMessage => "get-channel-message",
            Self::GetChannelMessages => "get-channel-messages",
            Self::GetGuildMember => "get-guild-member",
            Self::GetGuildRoles => "get-guild-roles",
            Self::CreateGuildRole => "create-guild-role",
            Self::GetReactions => "get-reactions",
        }
    }

    /// Returns the fixture file name, `<slug>-success.json`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}-success.json", self.slug())
    }

    /// Returns the heading printed while the mock is generated.
    #[must_use]
    pub fn title(self) -> String {
        self.slug()
            .split('-')
            .map(capitalise)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl fmt::Display for MockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MockName {
    type Err = MockNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mock| mock.as_str() == name)
            .ok_or_else(|| MockNameError::Unknown {
                name: name.to_owned(),
            })
    }
}

/// An ordered, duplicate-free set of mocks to generate.
///
/// # Example
///
/// ```
/// use mock_generator::{MockName, MockSelection};
///
/// let selection = MockSelection::parse(["getReactions,getChannelV8", "getEmojis"]);
///
/// let mocks: Vec<MockName> = selection.iter().collect();
/// assert_eq!(mocks, [MockName::GetChannelV8, MockName::GetReactions]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockSelection {
    mocks: BTreeSet<MockName>,
}

impl MockSelection {
    /// Selects every known mock.
    #[must_use]
    pub fn all() -> Self {
        Self {
            mocks: MockName::ALL.into_iter().collect(),
        }
    }

    /// Builds a selection from raw tokens.
    ///
    /// Each token may hold several comma-separated names. Names are trimmed,
    /// empty names are ignored, and unknown names are logged and dropped.
    #[must_use]
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mocks = BTreeSet::new();
        for token in tokens {
            for name in token.as_ref().split(',').map(str::trim) {
                if name.is_empty() {
                    continue;
                }
                match name.parse::<MockName>() {
                    Ok(mock) => {
                        mocks.insert(mock);
                    }
                    Err(err) => warn!(%err, "skipping mock"),
                }
            }
        }
        Self { mocks }
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }

    /// Returns the number of selected mocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    /// Iterates over the selected mocks in write order.
    pub fn iter(&self) -> impl Iterator<Item = MockName> + '_ {
        self.mocks.iter().copied()
    }
}

impl FromIterator<MockName> for MockSelection {
    fn from_iter<I: IntoIterator<Item = MockName>>(iter: I) -> Self {
        Self {
            mocks: iter.into_iter().collect(),
        }
    }
}
