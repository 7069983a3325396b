//! Guild role payloads.

use serde::{Deserialize, Serialize};

/// Optional tags describing why a role exists.
///
/// Only keys that are set are serialised, so an untagged role carries `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTags {
    /// Bot that owns the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    /// Integration that owns the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
    /// Marks the guild's booster role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_subscriber: Option<bool>,
}

impl RoleTags {
    /// Returns `true` when no tag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bot_id.is_none() && self.integration_id.is_none() && self.premium_subscriber.is_none()
    }
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role snowflake; equals the guild id for `@everyone`.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Permission bits as a decimal string.
    pub permissions: String,
    /// Sort position.
    pub position: u64,
    /// RGB colour, zero when unset.
    pub color: u64,
    /// Whether the role is displayed separately.
    pub hoist: bool,
    /// Whether an integration manages the role.
    pub managed: bool,
    /// Whether the role can be mentioned.
    pub mentionable: bool,
    /// Role tags.
    pub tags: RoleTags,
}
