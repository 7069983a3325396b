//! Randomised Discord API response fixtures.
//!
//! The crate builds schema-valid but randomised payloads for a fixed set of
//! API calls (channels in the v6 and v8 shapes, messages, guild members,
//! roles, and reaction users) and writes each one to
//! `<slug>-success.json` so client test suites can use them as canned
//! responses.
//!
//! # Overview
//!
//! - [`Faker`] supplies every random value; [`RandomFaker`] is the seeded
//!   production source and [`ScriptedFaker`] a deterministic test double.
//! - [`generator`] holds one pure builder per entity.
//! - [`build_payload`] composes the entities for a [`MockName`], and
//!   [`generate_mocks`] writes a [`MockSelection`] to disk.
//! - [`cli`] wraps all of this in the `generate-mocks` command.
//!
//! # Example
//!
//! ```
//! use mock_generator::{MockName, MockPayload, RandomFaker, build_payload};
//!
//! let mut faker = RandomFaker::from_seed(42);
//! let payload = build_payload(MockName::GetGuildMember, &mut faker).expect("payload");
//!
//! let MockPayload::GuildMember(member) = payload else {
//!     panic!("expected a guild member");
//! };
//! assert_eq!(member.is_pending, member.pending);
//! assert!(member.roles.len() <= 3);
//! ```

mod atomic_io;
pub mod cli;
mod error;
pub mod faker;
pub mod generator;
mod mock;
pub mod model;
mod orchestrator;

pub use error::{GenerationError, MockError, MockNameError, WriteError};
pub use faker::{Faker, Probability, RandomFaker, ScriptedFaker};
pub use mock::{MockName, MockSelection};
pub use orchestrator::{
    CHANNEL_MESSAGES, MAX_GUILD_ROLES, MAX_REACTIONS, MockObserver, MockPayload, SilentObserver,
    WrittenMock, build_payload, generate_mocks,
};
