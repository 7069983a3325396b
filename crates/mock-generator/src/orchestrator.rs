//! Turns a mock selection into fixture files.
//!
//! [`build_payload`] decides which entities make up each mock, and
//! [`generate_mocks`] serialises every selected payload into the destination
//! directory, one file per mock, in [`MockName`] order.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;
use tracing::{debug, info};

use crate::atomic_io::write_atomic;
use crate::error::{GenerationError, MockError, WriteError};
use crate::faker::{Faker, Probability};
use crate::generator::{
    generate_channel_list_v6, generate_channel_list_v8, generate_channel_v6, generate_channel_v8,
    generate_guild_member, generate_message, generate_role, generate_user,
};
use crate::mock::{MockName, MockSelection};
use crate::model::{ChannelV6, ChannelV8, GuildMember, Message, Role, User};

/// Number of messages in the `getChannelMessages` fixture.
pub const CHANNEL_MESSAGES: usize = 3;

/// Largest number of extra roles in the `getGuildRoles` fixture, besides
/// `@everyone`.
pub const MAX_GUILD_ROLES: u64 = 10;

/// Largest number of users in the `getReactions` fixture.
pub const MAX_REACTIONS: u64 = 10;

/// The JSON document written for one mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MockPayload {
    /// A single v6 channel.
    ChannelV6(ChannelV6),
    /// A single v8 channel.
    ChannelV8(ChannelV8),
    /// A flattened list of v6 channel groups.
    ChannelsV6(Vec<ChannelV6>),
    /// A flattened list of v8 channel groups.
    ChannelsV8(Vec<ChannelV8>),
    /// A single message.
    Message(Message),
    /// Several messages.
    Messages(Vec<Message>),
    /// A guild member.
    GuildMember(GuildMember),
    /// A list of roles.
    Roles(Vec<Role>),
    /// A single role.
    Role(Role),
    /// A list of users.
    Users(Vec<User>),
}

/// Builds the payload for `mock`.
///
/// # Errors
///
/// Returns [`GenerationError`] when a filtered generator gives up.
///
/// # Example
///
/// ```
/// use mock_generator::{MockName, MockPayload, RandomFaker, build_payload};
///
/// let mut faker = RandomFaker::from_seed(7);
/// let payload = build_payload(MockName::GetChannelsV8, &mut faker).expect("payload");
///
/// let MockPayload::ChannelsV8(channels) = payload else {
///     panic!("expected a channel list");
/// };
/// assert_eq!(channels.len(), 12);
/// ```
pub fn build_payload<F: Faker>(
    mock: MockName,
    faker: &mut F,
) -> Result<MockPayload, GenerationError> {
    let payload = match mock {
        MockName::GetChannelV6 => {
            let parent_id = faker.optional(Probability::HALF, F::channel_id);
            MockPayload::ChannelV6(generate_channel_v6(faker, parent_id))
        }
        MockName::GetChannelV8 => {
            let parent_id = faker.optional(Probability::HALF, F::channel_id);
            MockPayload::ChannelV8(generate_channel_v8(faker, parent_id))
        }
        MockName::GetChannelsV6 => MockPayload::ChannelsV6(generate_channel_list_v6(faker)),
        MockName::GetChannelsV8 => MockPayload::ChannelsV8(generate_channel_list_v8(faker)),
        MockName::GetChannelMessage => MockPayload::Message(generate_message(faker)?),
        MockName::GetChannelMessages => MockPayload::Messages(
            (0..CHANNEL_MESSAGES)
                .map(|_| generate_message(faker))
                .collect::<Result<_, _>>()?,
        ),
        MockName::GetGuildMember => MockPayload::GuildMember(generate_guild_member(faker)),
        MockName::GetGuildRoles => MockPayload::Roles(guild_roles(faker)),
        MockName::CreateGuildRole => MockPayload::Role(generate_role(faker, None, true)),
        MockName::GetReactions => MockPayload::Users(
            faker
                .range_between(MAX_REACTIONS, 1)
                .into_iter()
                .map(|_| generate_user(faker, true))
                .collect(),
        ),
    };
    Ok(payload)
}

fn guild_roles<F: Faker>(faker: &mut F) -> Vec<Role> {
    let guild_id = faker.guild_id();
    let everyone = generate_role(faker, Some(&guild_id), false);
    let others = faker
        .range_between(MAX_GUILD_ROLES, 1)
        .into_iter()
        .map(|_| generate_role(faker, None, false))
        .collect::<Vec<_>>();
    std::iter::once(everyone).chain(others).collect()
}

/// A fixture that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenMock {
    /// The mock the fixture holds.
    pub mock: MockName,
    /// Where the fixture was written.
    pub path: Utf8PathBuf,
}

/// Progress callbacks for [`generate_mocks`].
pub trait MockObserver {
    /// Called before the payload for `mock` is built.
    fn mock_started(&mut self, mock: MockName);

    /// Called once the fixture for a mock has been written.
    fn mock_finished(&mut self, written: &WrittenMock);
}

/// A [`MockObserver`] that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl MockObserver for SilentObserver {
    fn mock_started(&mut self, _mock: MockName) {}

    fn mock_finished(&mut self, _written: &WrittenMock) {}
}

/// Generates every selected mock and writes it under `destination`.
///
/// The destination directory is created on demand, but only when the
/// selection is not empty. Each fixture is pretty-printed JSON with a trailing
/// newline and replaces any file of the same name. Generation stops at the
/// first failure; fixtures already written are left in place.
///
/// # Errors
///
/// Returns [`MockError`] when a payload cannot be built or serialised, or when
/// the directory or a fixture cannot be written.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use mock_generator::{MockSelection, RandomFaker, SilentObserver, generate_mocks};
///
/// let mut faker = RandomFaker::from_seed(1);
/// let written = generate_mocks(
///     &MockSelection::default(),
///     &mut faker,
///     Utf8Path::new("never-created"),
///     &mut SilentObserver,
/// )
/// .expect("nothing to write");
///
/// assert!(written.is_empty());
/// assert!(!Utf8Path::new("never-created").exists());
/// ```
pub fn generate_mocks<F, O>(
    selection: &MockSelection,
    faker: &mut F,
    destination: &Utf8Path,
    observer: &mut O,
) -> Result<Vec<WrittenMock>, MockError>
where
    F: Faker,
    O: MockObserver + ?Sized,
{
    if selection.is_empty() {
        debug!("no mocks selected");
        return Ok(Vec::new());
    }

    let dir = open_destination(destination)?;
    let mut written = Vec::with_capacity(selection.len());
    for mock in selection.iter() {
        observer.mock_started(mock);
        let payload =
            build_payload(mock, faker).map_err(|source| MockError::Generation { mock, source })?;
        let mut json =
            serde_json::to_string_pretty(&payload).map_err(|err| MockError::Serialize {
                mock,
                message: err.to_string(),
            })?;
        json.push('\n');

        let file_name = mock.file_name();
        write_atomic(&dir, destination, &file_name, &json)?;
        let entry = WrittenMock {
            mock,
            path: destination.join(&file_name),
        };
        info!(%mock, path = %entry.path, "wrote mock");
        observer.mock_finished(&entry);
        written.push(entry);
    }
    Ok(written)
}

fn open_destination(destination: &Utf8Path) -> Result<Dir, WriteError> {
    let to_write_error = |err: std::io::Error| WriteError {
        path: destination.to_path_buf(),
        message: err.to_string(),
    };
    Dir::create_ambient_dir_all(destination, ambient_authority()).map_err(to_write_error)?;
    Dir::open_ambient_dir(destination, ambient_authority()).map_err(to_write_error)
}
