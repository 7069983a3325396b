//! Seeded production implementation of [`Faker`].

use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::Username;
use fake::faker::lorem::raw::{Paragraph, Sentence, Words};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Faker;

/// Range of words in a generated sentence.
const SENTENCE_WORDS: std::ops::Range<usize> = 4..10;

/// Range of sentences in a generated paragraph.
const PARAGRAPH_SENTENCES: std::ops::Range<usize> = 1..4;

/// A [`Faker`] backed by a `ChaCha8` stream and the `fake` crate.
///
/// The same seed and anchor always produce the same sequence of values.
///
/// # Example
///
/// ```
/// use mock_generator::{Faker, RandomFaker};
///
/// let mut first = RandomFaker::from_seed(2021);
/// let mut second = RandomFaker::from_seed(2021).with_anchor(first.anchor());
///
/// assert_eq!(first.snowflake(), second.snowflake());
/// ```
#[derive(Debug, Clone)]
pub struct RandomFaker {
    rng: ChaCha8Rng,
    seed: u64,
    anchor: DateTime<Utc>,
}

impl RandomFaker {
    /// Creates a faker seeded with `seed`, anchored at the current time.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            anchor: Utc::now(),
        }
    }

    /// Creates a faker with a freshly drawn seed.
    ///
    /// The seed is available from [`RandomFaker::seed`] so the run can be
    /// reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Pins the reference time used for timestamps and snowflakes.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = anchor;
        self
    }

    /// Returns the seed this faker was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Faker for RandomFaker {
    fn ratio(&mut self, numerator: u32, denominator: u32) -> bool {
        if numerator == 0 || denominator == 0 {
            false
        } else if numerator >= denominator {
            true
        } else {
            self.rng.random_ratio(numerator, denominator)
        }
    }

    fn number_between(&mut self, min: u64, max: u64) -> u64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(low..=high)
    }

    fn words(&mut self, count: usize) -> Vec<String> {
        Words(EN, count..count.saturating_add(1)).fake_with_rng(&mut self.rng)
    }

    fn sentence(&mut self) -> String {
        Sentence(EN, SENTENCE_WORDS).fake_with_rng(&mut self.rng)
    }

    fn text(&mut self, max_chars: usize) -> String {
        let paragraph: String = Paragraph(EN, PARAGRAPH_SENTENCES).fake_with_rng(&mut self.rng);
        let truncated: String = paragraph.chars().take(max_chars).collect();
        truncated.trim_end().to_owned()
    }

    fn user_name(&mut self) -> String {
        Username(EN).fake_with_rng(&mut self.rng)
    }

    fn guild_name(&mut self) -> String {
        CompanyName(EN).fake_with_rng(&mut self.rng)
    }

    fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }
}
