//! User builder.

use super::any_icon_hash;
use crate::faker::{Faker, Probability};
use crate::model::User;

const AVATAR_PROBABILITY: Probability = Probability::percent(90);

/// Builds a user, adding the `bot` flag when `include_bot_flag` is set.
#[must_use]
pub fn generate_user<F: Faker>(faker: &mut F, include_bot_flag: bool) -> User {
    User {
        id: faker.user_id(),
        username: faker.user_name(),
        avatar: faker.optional(AVATAR_PROBABILITY, any_icon_hash),
        discriminator: faker.discriminator(),
        public_flags: faker.random_digit(),
        bot: include_bot_flag.then(|| faker.boolean(Probability::HALF)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faker::ScriptedFaker;

    #[test]
    fn bot_flag_is_only_set_on_request() {
        let mut faker = ScriptedFaker::new().with_default_boolean(true);

        assert_eq!(generate_user(&mut faker, false).bot, None);
        assert_eq!(generate_user(&mut faker, true).bot, Some(true));
    }

    #[test]
    fn avatar_is_null_when_its_gate_fails() {
        let mut faker = ScriptedFaker::new().with_booleans([false]);
        assert_eq!(generate_user(&mut faker, false).avatar, None);
    }
}
