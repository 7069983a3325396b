//! Guild member builder.

use chrono::TimeDelta;

use super::generate_user;
use crate::faker::{Faker, Probability, format_timestamp};
use crate::model::GuildMember;

/// Largest number of roles a generated member holds.
pub const MAX_MEMBER_ROLES: u64 = 3;

const ROLES_PROBABILITY: Probability = Probability::percent(75);
const LOOKBACK_DAYS: i64 = 730;

/// Builds a guild member.
///
/// Roles are only drawn when a 75% gate passes, and then number between zero
/// and [`MAX_MEMBER_ROLES`].
#[must_use]
pub fn generate_guild_member<F: Faker>(faker: &mut F) -> GuildMember {
    let premium_since = faker.optional(Probability::HALF, |f| {
        let since = f.date_time_in_interval(TimeDelta::days(-LOOKBACK_DAYS), TimeDelta::zero());
        format_timestamp(since)
    });
    let pending = faker.boolean(Probability::HALF);
    let roles = if faker.boolean(ROLES_PROBABILITY) {
        faker
            .range_between(MAX_MEMBER_ROLES, 0)
            .into_iter()
            .map(|_| faker.role_id())
            .collect()
    } else {
        Vec::new()
    };

    let joined_at = faker.date_time_in_interval(TimeDelta::days(-LOOKBACK_DAYS), TimeDelta::zero());

    GuildMember {
        roles,
        nick: faker.optional(Probability::HALF, F::user_name),
        premium_since,
        joined_at: format_timestamp(joined_at),
        is_pending: pending,
        pending,
        user: generate_user(faker, false),
        mute: faker.boolean(Probability::HALF),
        deaf: faker.boolean(Probability::HALF),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::faker::{RandomFaker, ScriptedFaker};

    #[test]
    fn pending_flags_always_agree() {
        let mut faker = RandomFaker::from_seed(31);
        for _ in 0..50 {
            let member = generate_guild_member(&mut faker);
            assert_eq!(member.is_pending, member.pending);
        }
    }

    #[test]
    fn roles_are_empty_when_the_gate_fails() {
        // premium_since gate, pending flag, then the roles gate.
        let mut faker = ScriptedFaker::new()
            .with_booleans([false, false, false])
            .with_high_numbers(true);

        let member = generate_guild_member(&mut faker);

        assert!(member.roles.is_empty());
    }

    #[rstest]
    #[case(false, 0)]
    #[case(true, 3)]
    fn roles_fill_the_drawn_range_when_the_gate_passes(
        #[case] prefer_high: bool,
        #[case] expected: usize,
    ) {
        let mut faker = ScriptedFaker::new()
            .with_booleans([false, false, true])
            .with_high_numbers(prefer_high);

        let member = generate_guild_member(&mut faker);

        assert_eq!(member.roles.len(), expected);
    }

    #[test]
    fn role_count_never_exceeds_the_maximum() {
        let mut faker = RandomFaker::from_seed(32);
        for _ in 0..100 {
            let member = generate_guild_member(&mut faker);
            assert!(member.roles.len() <= 3);
        }
    }

    #[test]
    fn optional_fields_follow_their_gates() {
        let mut faker = ScriptedFaker::new().with_default_boolean(true);

        let member = generate_guild_member(&mut faker);

        assert!(member.premium_since.is_some());
        assert!(member.nick.is_some());
        assert!(member.joined_at.ends_with("+00:00"));
    }
}
