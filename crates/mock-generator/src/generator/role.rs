//! Guild role builder.

use crate::faker::{Faker, Probability};
use crate::model::{Role, RoleTags};

/// Name of the role every guild member implicitly holds.
pub const EVERYONE_ROLE_NAME: &str = "@everyone";

const ROLE_NAME_WORDS: usize = 3;

/// Builds a role.
///
/// With a `guild_id` the role is the guild's `@everyone` role: it reuses the
/// guild id, sits at position 0 with no colour, is not hoisted, and never
/// carries tags. Otherwise tags are drawn unless `exclude_tags` is set.
/// `managed` is `true` exactly when the tags name a bot.
#[must_use]
pub fn generate_role<F: Faker>(faker: &mut F, guild_id: Option<&str>, exclude_tags: bool) -> Role {
    let tags = if guild_id.is_none() && !exclude_tags {
        generate_tags(faker)
    } else {
        RoleTags::default()
    };
    let managed = tags.bot_id.is_some();

    match guild_id {
        Some(everyone_id) => Role {
            id: everyone_id.to_owned(),
            name: EVERYONE_ROLE_NAME.to_owned(),
            permissions: faker.permission_integer().to_string(),
            position: 0,
            color: 0,
            hoist: false,
            managed,
            mentionable: faker.boolean(Probability::HALF),
            tags,
        },
        None => {
            let id = faker.role_id();
            let name = faker.words_sentence(ROLE_NAME_WORDS);
            let permissions = faker.permission_integer().to_string();
            let position = faker.random_digit();
            let embed_color = faker.embed_color();
            let color = faker.either(0, embed_color);
            Role {
                id,
                name,
                permissions,
                position,
                color,
                hoist: faker.boolean(Probability::HALF),
                managed,
                mentionable: faker.boolean(Probability::HALF),
                tags,
            }
        }
    }
}

fn generate_tags<F: Faker>(faker: &mut F) -> RoleTags {
    if !faker.boolean(Probability::HALF) {
        return RoleTags::default();
    }
    let bot_id = faker.optional(Probability::HALF, F::user_id);
    let integration_id = faker.optional(Probability::HALF, F::snowflake);
    let premium_subscriber = (bot_id.is_none() && integration_id.is_none()).then_some(true);
    RoleTags {
        bot_id,
        integration_id,
        premium_subscriber,
    }
}

#[cfg(test)]
mod tests {
    //! Covers the `@everyone` shortcut and tag gating.

    use rstest::rstest;

    use super::*;
    use crate::faker::{RandomFaker, ScriptedFaker};

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn everyone_role_uses_fixed_values(#[case] exclude_tags: bool) {
        let mut faker = ScriptedFaker::new()
            .with_default_boolean(true)
            .with_high_numbers(true);

        let role = generate_role(&mut faker, Some("81384788765712384"), exclude_tags);

        assert_eq!(role.id, "81384788765712384");
        assert_eq!(role.name, EVERYONE_ROLE_NAME);
        assert_eq!(role.position, 0);
        assert_eq!(role.color, 0);
        assert!(!role.hoist);
        assert!(role.tags.is_empty());
        assert!(!role.managed);
    }

    #[test]
    fn excluded_tags_stay_empty() {
        let mut faker = ScriptedFaker::new().with_default_boolean(true);

        let role = generate_role(&mut faker, None, true);

        assert!(role.tags.is_empty());
        assert!(!role.managed);
    }

    #[test]
    fn tags_are_empty_when_the_top_gate_fails() {
        let mut faker = ScriptedFaker::new().with_booleans([false]);

        let role = generate_role(&mut faker, None, false);

        assert!(role.tags.is_empty());
    }

    #[test]
    fn bot_tag_marks_the_role_managed() {
        let mut faker = ScriptedFaker::new().with_booleans([true, true, false]);

        let role = generate_role(&mut faker, None, false);

        assert!(role.tags.bot_id.is_some());
        assert_eq!(role.tags.integration_id, None);
        assert_eq!(role.tags.premium_subscriber, None);
        assert!(role.managed);
    }

    #[test]
    fn integration_tag_alone_is_not_managed() {
        let mut faker = ScriptedFaker::new().with_booleans([true, false, true]);

        let role = generate_role(&mut faker, None, false);

        assert_eq!(role.tags.bot_id, None);
        assert!(role.tags.integration_id.is_some());
        assert!(!role.managed);
    }

    #[test]
    fn premium_subscriber_is_the_fallback_tag() {
        let mut faker = ScriptedFaker::new().with_booleans([true, false, false]);

        let role = generate_role(&mut faker, None, false);

        assert_eq!(
            role.tags,
            RoleTags {
                premium_subscriber: Some(true),
                ..RoleTags::default()
            }
        );
        assert!(!role.managed);
    }

    #[test]
    fn managed_tracks_bot_id_across_random_roles() {
        let mut faker = RandomFaker::from_seed(40);
        for _ in 0..100 {
            let role = generate_role(&mut faker, None, false);
            assert_eq!(role.managed, role.tags.bot_id.is_some());
        }
    }

    #[test]
    fn regular_role_name_has_three_words() {
        let mut faker = ScriptedFaker::new();
        let role = generate_role(&mut faker, None, true);
        assert_eq!(role.name.split(' ').count(), 3);
    }
}
