//! Channel and permission overwrite builders.

use super::{any_icon_hash, permission_string};
use crate::faker::{Faker, Probability};
use crate::model::{ChannelV6, ChannelV8, OverwriteType, PermissionOverwrite, PermissionOverwriteV6};

/// Number of permission overwrites embedded in every channel.
pub const OVERWRITES_PER_CHANNEL: usize = 3;

/// Number of child channels generated under each parent.
pub const CHILDREN_PER_GROUP: usize = 3;

/// Number of parent-and-children groups in a channel list.
pub const CHANNEL_GROUPS: usize = 3;

const MAX_TOPIC_CHARS: usize = 1024;
const MAX_BITRATE: u64 = 384_000;
const MAX_RATE_LIMIT_PER_USER: u64 = 21_600;
const TOPIC_PROBABILITY: Probability = Probability::percent(80);
const ICON_PROBABILITY: Probability = Probability::percent(10);

/// Builds a v8 permission overwrite.
#[must_use]
pub fn generate_overwrite_v8<F: Faker>(faker: &mut F) -> PermissionOverwrite {
    let id = faker.snowflake();
    let kind = faker.either(OverwriteType::Role, OverwriteType::Member);
    let allow_raw = faker.permission_integer();
    let allow = permission_string(faker, allow_raw);
    let deny_raw = faker.permission_integer();
    let deny = permission_string(faker, deny_raw);
    PermissionOverwrite {
        id,
        kind,
        allow,
        deny,
    }
}

/// Builds a v6 permission overwrite.
///
/// The integer bitfields are drawn once; `allowNew` and `denyNew` either
/// repeat them as strings or carry the legacy sentinel.
#[must_use]
pub fn generate_overwrite_v6<F: Faker>(faker: &mut F) -> PermissionOverwriteV6 {
    let id = faker.snowflake();
    let kind = faker.either(OverwriteType::Role, OverwriteType::Member);
    let allow = faker.permission_integer();
    let deny = faker.permission_integer();
    let allow_new = permission_string(faker, allow);
    let deny_new = permission_string(faker, deny);
    PermissionOverwriteV6 {
        id,
        kind,
        allow,
        deny,
        allow_new,
        deny_new,
    }
}

/// Builds a v8 channel under `parent_id`.
#[must_use]
pub fn generate_channel_v8<F: Faker>(faker: &mut F, parent_id: Option<String>) -> ChannelV8 {
    let permission_overwrites = (0..OVERWRITES_PER_CHANNEL)
        .map(|_| generate_overwrite_v8(faker))
        .collect();

    ChannelV8 {
        id: faker.channel_id(),
        kind: faker.channel_type(),
        guild_id: faker.guild_id(),
        position: faker.random_digit(),
        permission_overwrites,
        name: faker.guild_name(),
        topic: faker.optional(TOPIC_PROBABILITY, |f| f.text(MAX_TOPIC_CHARS)),
        nsfw: faker.boolean(Probability::HALF),
        last_message_id: faker.optional(Probability::HALF, F::snowflake),
        bitrate: faker.number_between(0, MAX_BITRATE),
        user_limit: faker.random_digit(),
        rate_limit_per_user: faker.optional(Probability::HALF, |f| {
            f.number_between(0, MAX_RATE_LIMIT_PER_USER)
        }),
        icon: faker.optional(ICON_PROBABILITY, any_icon_hash),
        parent_id,
        last_pin_timestamp: faker.timestamp(Probability::HALF),
        rtc_region: faker.rtc_region(),
    }
}

/// Builds a v6 channel under `parent_id`.
#[must_use]
pub fn generate_channel_v6<F: Faker>(faker: &mut F, parent_id: Option<String>) -> ChannelV6 {
    let permission_overwrites = (0..OVERWRITES_PER_CHANNEL)
        .map(|_| generate_overwrite_v6(faker))
        .collect();

    ChannelV6 {
        id: faker.channel_id(),
        kind: faker.channel_type(),
        name: faker.guild_name(),
        position: faker.random_digit(),
        parent_id,
        bitrate: faker.number_between(0, MAX_BITRATE),
        user_limit: faker.random_digit(),
        rtc_region: faker.rtc_region(),
        guild_id: faker.guild_id(),
        permission_overwrites,
        nsfw: faker.boolean(Probability::HALF),
    }
}

/// Builds a parentless v8 channel followed by its children.
#[must_use]
pub fn generate_channel_group_v8<F: Faker>(faker: &mut F) -> Vec<ChannelV8> {
    let parent = generate_channel_v8(faker, None);
    let parent_id = parent.id.clone();
    let mut group = Vec::with_capacity(CHILDREN_PER_GROUP + 1);
    group.push(parent);
    for _ in 0..CHILDREN_PER_GROUP {
        group.push(generate_channel_v8(faker, Some(parent_id.clone())));
    }
    group
}

/// Builds a parentless v6 channel followed by its children.
#[must_use]
pub fn generate_channel_group_v6<F: Faker>(faker: &mut F) -> Vec<ChannelV6> {
    let parent = generate_channel_v6(faker, None);
    let parent_id = parent.id.clone();
    let mut group = Vec::with_capacity(CHILDREN_PER_GROUP + 1);
    group.push(parent);
    for _ in 0..CHILDREN_PER_GROUP {
        group.push(generate_channel_v6(faker, Some(parent_id.clone())));
    }
    group
}

/// Builds [`CHANNEL_GROUPS`] v8 channel groups as one flat list.
#[must_use]
pub fn generate_channel_list_v8<F: Faker>(faker: &mut F) -> Vec<ChannelV8> {
    (0..CHANNEL_GROUPS)
        .flat_map(|_| generate_channel_group_v8(faker))
        .collect()
}

/// Builds [`CHANNEL_GROUPS`] v6 channel groups as one flat list.
#[must_use]
pub fn generate_channel_list_v6<F: Faker>(faker: &mut F) -> Vec<ChannelV6> {
    (0..CHANNEL_GROUPS)
        .flat_map(|_| generate_channel_group_v6(faker))
        .collect()
}
