//! Entity builders.
//!
//! Each builder assembles one payload from a [`Faker`](crate::Faker) and,
//! where the payload belongs to a parent, the parent's id. Builders never
//! touch the filesystem; the orchestrator decides how many of each to build.

mod channel;
mod member;
mod message;
mod role;
mod user;

pub use channel::{
    CHANNEL_GROUPS, CHILDREN_PER_GROUP, OVERWRITES_PER_CHANNEL, generate_channel_group_v6,
    generate_channel_group_v8, generate_channel_list_v6, generate_channel_list_v8,
    generate_channel_v6, generate_channel_v8, generate_overwrite_v6, generate_overwrite_v8,
};
pub use member::{MAX_MEMBER_ROLES, generate_guild_member};
pub use message::generate_message;
pub use role::{EVERYONE_ROLE_NAME, generate_role};
pub use user::generate_user;

use crate::faker::{Faker, Probability};

/// Placeholder the API returned for permission strings during its move from
/// integer to string bitfields.
pub const LEGACY_PERMISSIONS_SENTINEL: &str = "6546771529";

/// Renders `raw` as a decimal string or, with equal odds, the legacy sentinel.
fn permission_string<F: Faker>(faker: &mut F, raw: u64) -> String {
    if faker.boolean(Probability::HALF) {
        raw.to_string()
    } else {
        LEGACY_PERMISSIONS_SENTINEL.to_owned()
    }
}

/// Returns a static or animated icon hash with equal odds.
fn any_icon_hash<F: Faker>(faker: &mut F) -> String {
    let animated = faker.boolean(Probability::HALF);
    faker.icon_hash(animated)
}
