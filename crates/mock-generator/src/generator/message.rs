//! Channel message builder.

use super::generate_user;
use crate::error::GenerationError;
use crate::faker::{Faker, Probability};
use crate::model::{Message, MessageType};

const EDITED_NULL_PROBABILITY: Probability = Probability::percent(20);

/// Builds a message whose type is restricted to a default message or a reply.
///
/// # Errors
///
/// Returns [`GenerationError::GenerationExhausted`] if the message type
/// generator never yields an accepted type.
pub fn generate_message<F: Faker>(faker: &mut F) -> Result<Message, GenerationError> {
    let id = faker.snowflake();
    let kind = faker.valid(
        "message_type",
        |kind| matches!(kind, MessageType::Default | MessageType::Reply),
        F::message_type,
    )?;

    Ok(Message {
        id,
        kind,
        content: faker.sentence(),
        channel_id: faker.channel_id(),
        author: generate_user(faker, false),
        attachments: Vec::new(),
        embeds: Vec::new(),
        mentions: Vec::new(),
        mention_roles: Vec::new(),
        pinned: faker.boolean(Probability::HALF),
        mention_everyone: faker.boolean(Probability::HALF),
        tts: faker.boolean(Probability::HALF),
        timestamp: faker.recent_timestamp(),
        edited_timestamp: faker.timestamp(EDITED_NULL_PROBABILITY),
        flags: faker.random_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faker::{RandomFaker, ScriptedFaker};

    #[test]
    fn message_types_are_default_or_reply() {
        let mut faker = RandomFaker::from_seed(19);
        for _ in 0..50 {
            let message = generate_message(&mut faker).expect("message generated");
            assert!(
                matches!(message.kind, MessageType::Default | MessageType::Reply),
                "unexpected type {:?}",
                message.kind
            );
        }
    }

    #[test]
    fn collections_are_always_empty() {
        let mut faker = RandomFaker::from_seed(20);
        let message = generate_message(&mut faker).expect("message generated");

        assert!(message.attachments.is_empty());
        assert!(message.embeds.is_empty());
        assert!(message.mentions.is_empty());
        assert!(message.mention_roles.is_empty());
        assert_eq!(message.author.bot, None);
    }

    #[test]
    fn message_type_exhaustion_is_reported() {
        // The high end of the type table is never a default message or reply.
        let mut faker = ScriptedFaker::new().with_high_numbers(true);

        let result = generate_message(&mut faker);

        assert!(matches!(
            result,
            Err(GenerationError::GenerationExhausted {
                generator: "message_type",
                ..
            })
        ));
    }
}
