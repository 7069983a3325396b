//! Random value provider for Discord-shaped fixtures.
//!
//! [`Faker`] separates a handful of required primitives (ratios, bounded
//! integers, text, and a reference clock) from the domain generators built on
//! top of them. Entity builders are generic over the trait, so the same code
//! runs against the seeded [`RandomFaker`] in production and the
//! deterministic [`ScriptedFaker`] in tests.

mod probability;
mod random;
mod scripted;

use chrono::{DateTime, TimeDelta, Utc};

pub use probability::Probability;
pub use random::RandomFaker;
pub use scripted::ScriptedFaker;

use crate::error::GenerationError;
use crate::model::{ChannelType, MessageType};

/// Maximum number of samples [`Faker::valid`] draws before giving up.
pub const MAX_VALID_ATTEMPTS: usize = 10_000;

/// Milliseconds between the Unix epoch and the first second of 2015, the
/// zero point of Discord snowflakes.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Every permission bit the v8 API defines.
pub const ALL_PERMISSIONS: u64 = 8_589_934_591;

/// Largest RGB value an embed or role colour can take.
pub const MAX_EMBED_COLOR: u64 = 0x00FF_FFFF;

/// Voice regions a channel may be pinned to.
pub const RTC_REGIONS: [&str; 13] = [
    "brazil",
    "hongkong",
    "india",
    "japan",
    "rotterdam",
    "russia",
    "singapore",
    "southafrica",
    "sydney",
    "us-central",
    "us-east",
    "us-south",
    "us-west",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";
const TIMESTAMP_LOOKBACK_DAYS: i64 = 730;
const SNOWFLAKE_TIMESTAMP_SHIFT: u32 = 22;
const SNOWFLAKE_WORKER_SHIFT: u32 = 17;
const SNOWFLAKE_PROCESS_SHIFT: u32 = 12;
const SNOWFLAKE_MAX_WORKER: u64 = 31;
const SNOWFLAKE_MAX_INCREMENT: u64 = 4095;

/// Source of random values for fixture generation.
///
/// Implementors supply the primitives; every other method has a default
/// built on them.
pub trait Faker {
    /// Returns `true` with probability `numerator / denominator`.
    ///
    /// A zero numerator or denominator yields `false`; a numerator at or above
    /// the denominator yields `true`.
    fn ratio(&mut self, numerator: u32, denominator: u32) -> bool;

    /// Returns an integer in the inclusive range between `min` and `max`.
    ///
    /// The bounds may be given in either order.
    fn number_between(&mut self, min: u64, max: u64) -> u64;

    /// Returns exactly `count` lorem words.
    fn words(&mut self, count: usize) -> Vec<String>;

    /// Returns a lorem sentence.
    fn sentence(&mut self) -> String;

    /// Returns lorem text of at most `max_chars` characters.
    fn text(&mut self, max_chars: usize) -> String;

    /// Returns an account name.
    fn user_name(&mut self) -> String;

    /// Returns a guild or channel name.
    fn guild_name(&mut self) -> String;

    /// Returns the reference time that timestamps and snowflakes are drawn
    /// relative to.
    fn anchor(&self) -> DateTime<Utc>;

    /// Returns `true` with the given probability.
    fn boolean(&mut self, probability_true: Probability) -> bool {
        self.ratio(probability_true.numerator(), Probability::DENOMINATOR)
    }

    /// Evaluates `value` with the given probability, else returns `None`.
    ///
    /// `value` is not called when the draw fails.
    fn optional<T, F>(&mut self, probability: Probability, value: F) -> Option<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> T,
    {
        if self.boolean(probability) {
            Some(value(self))
        } else {
            None
        }
    }

    /// Picks one of two values with equal odds.
    fn either<T>(&mut self, first: T, second: T) -> T
    where
        Self: Sized,
    {
        if self.boolean(Probability::HALF) {
            first
        } else {
            second
        }
    }

    /// Picks an element of `choices`, or `None` when it is empty.
    fn random_element<'a, T>(&mut self, choices: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let last = u64::try_from(choices.len().checked_sub(1)?).ok()?;
        let index = usize::try_from(self.number_between(0, last)).ok()?;
        choices.get(index)
    }

    /// Returns a digit between 0 and 9.
    fn random_digit(&mut self) -> u64 {
        self.number_between(0, 9)
    }

    /// Returns the sequence `1..=len` where `len` is drawn between `min` and
    /// `max`, for sizing variable-length collections.
    fn range_between(&mut self, max: u64, min: u64) -> Vec<u64> {
        let len = self.number_between(min, max);
        (1..=len).collect()
    }

    /// Draws from `generate` until `predicate` accepts a value.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::GenerationExhausted`] when
    /// [`MAX_VALID_ATTEMPTS`] samples are all rejected.
    fn valid<T, P, G>(
        &mut self,
        generator: &'static str,
        predicate: P,
        generate: G,
    ) -> Result<T, GenerationError>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
        G: FnMut(&mut Self) -> T,
    {
        self.valid_within(MAX_VALID_ATTEMPTS, generator, predicate, generate)
    }

    /// Like [`Faker::valid`] with an explicit attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::GenerationExhausted`] when `max_attempts`
    /// samples are all rejected.
    fn valid_within<T, P, G>(
        &mut self,
        max_attempts: usize,
        generator: &'static str,
        predicate: P,
        mut generate: G,
    ) -> Result<T, GenerationError>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
        G: FnMut(&mut Self) -> T,
    {
        for _ in 0..max_attempts {
            let candidate = generate(self);
            if predicate(&candidate) {
                return Ok(candidate);
            }
        }
        Err(GenerationError::GenerationExhausted {
            generator,
            attempts: max_attempts,
        })
    }

    /// Returns a snowflake id as a decimal string.
    ///
    /// The timestamp bits fall between [`DISCORD_EPOCH_MS`] and the anchor;
    /// worker, process, and increment bits are random.
    fn snowflake(&mut self) -> String {
        let anchor_ms =
            u64::try_from(self.anchor().timestamp_millis()).unwrap_or(DISCORD_EPOCH_MS);
        let elapsed = self.number_between(0, anchor_ms.saturating_sub(DISCORD_EPOCH_MS));
        let worker = self.number_between(0, SNOWFLAKE_MAX_WORKER);
        let process = self.number_between(0, SNOWFLAKE_MAX_WORKER);
        let increment = self.number_between(0, SNOWFLAKE_MAX_INCREMENT);
        let id = (elapsed << SNOWFLAKE_TIMESTAMP_SHIFT)
            | (worker << SNOWFLAKE_WORKER_SHIFT)
            | (process << SNOWFLAKE_PROCESS_SHIFT)
            | increment;
        id.to_string()
    }

    /// Returns a channel snowflake.
    fn channel_id(&mut self) -> String {
        self.snowflake()
    }

    /// Returns a guild snowflake.
    fn guild_id(&mut self) -> String {
        self.snowflake()
    }

    /// Returns a user snowflake.
    fn user_id(&mut self) -> String {
        self.snowflake()
    }

    /// Returns a role snowflake.
    fn role_id(&mut self) -> String {
        self.snowflake()
    }

    /// Returns one of the known channel types.
    fn channel_type(&mut self) -> ChannelType
    where
        Self: Sized,
    {
        self.random_element(&ChannelType::ALL)
            .copied()
            .unwrap_or(ChannelType::GuildText)
    }

    /// Returns one of the known message types.
    fn message_type(&mut self) -> MessageType
    where
        Self: Sized,
    {
        self.random_element(&MessageType::ALL)
            .copied()
            .unwrap_or(MessageType::Default)
    }

    /// Returns a permission bitfield.
    fn permission_integer(&mut self) -> u64 {
        self.number_between(0, ALL_PERMISSIONS)
    }

    /// Returns a 32 character hex hash, prefixed with `a_` when `animated`.
    fn icon_hash(&mut self, animated: bool) -> String {
        let high = self.number_between(0, u64::MAX);
        let low = self.number_between(0, u64::MAX);
        let prefix = if animated { "a_" } else { "" };
        format!("{prefix}{high:016x}{low:016x}")
    }

    /// Returns a voice region identifier.
    fn rtc_region(&mut self) -> String
    where
        Self: Sized,
    {
        self.random_element(&RTC_REGIONS)
            .copied()
            .unwrap_or("us-west")
            .to_owned()
    }

    /// Returns a formatted timestamp from the last two years, or `None` with
    /// probability `probability_null`.
    fn timestamp(&mut self, probability_null: Probability) -> Option<String> {
        if self.boolean(probability_null) {
            return None;
        }
        Some(self.recent_timestamp())
    }

    /// Returns a formatted timestamp from the last two years.
    fn recent_timestamp(&mut self) -> String {
        let at = self.date_time_in_interval(
            TimeDelta::days(-TIMESTAMP_LOOKBACK_DAYS),
            TimeDelta::zero(),
        );
        format_timestamp(at)
    }

    /// Returns a time between `anchor + start_offset` and
    /// `anchor + end_offset`.
    fn date_time_in_interval(
        &mut self,
        start_offset: TimeDelta,
        end_offset: TimeDelta,
    ) -> DateTime<Utc> {
        let (earliest, latest) = if start_offset <= end_offset {
            (start_offset, end_offset)
        } else {
            (end_offset, start_offset)
        };
        let span_ms = u64::try_from((latest - earliest).num_milliseconds()).unwrap_or(0);
        let offset_ms = i64::try_from(self.number_between(0, span_ms)).unwrap_or(0);
        let anchor = self.anchor();
        anchor
            .checked_add_signed(earliest + TimeDelta::milliseconds(offset_ms))
            .unwrap_or(anchor)
    }

    /// Returns an RGB colour.
    fn embed_color(&mut self) -> u64 {
        self.number_between(0, MAX_EMBED_COLOR)
    }

    /// Returns a zero-padded four digit discriminator.
    fn discriminator(&mut self) -> String {
        format!("{:04}", self.number_between(1, 9999))
    }

    /// Returns `count` lorem words joined by spaces.
    fn words_sentence(&mut self, count: usize) -> String {
        self.words(count).join(" ")
    }
}

/// Formats a time the way the API renders ISO 8601 timestamps.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mock_generator::faker::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).single().expect("valid date");
/// assert_eq!(format_timestamp(at), "2021-03-04T05:06:07.000000+00:00");
/// ```
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
