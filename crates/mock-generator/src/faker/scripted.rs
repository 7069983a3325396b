//! Deterministic [`Faker`] for exercising builder branches.

use std::collections::VecDeque;

use chrono::{DateTime, TimeZone, Utc};

use super::Faker;

/// A [`Faker`] whose draws are scripted rather than random.
///
/// Probability draws consume queued answers first and then fall back to a
/// fixed default; certain draws (0% or 100%) ignore the script. Bounded
/// integers always resolve to the low or the high end of their range. Text
/// generators return numbered placeholders.
///
/// # Example
///
/// ```
/// use mock_generator::{Faker, Probability, ScriptedFaker};
///
/// let mut faker = ScriptedFaker::new().with_booleans([true, false]);
///
/// assert!(faker.boolean(Probability::HALF));
/// assert!(!faker.boolean(Probability::HALF));
/// assert_eq!(faker.random_digit(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedFaker {
    booleans: VecDeque<bool>,
    default_boolean: bool,
    high_numbers: bool,
    anchor: DateTime<Utc>,
    counter: u64,
}

impl ScriptedFaker {
    /// Creates a faker answering `false` to every uncertain draw and the low
    /// bound to every integer draw, anchored at 2021-01-01T00:00:00Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            booleans: VecDeque::new(),
            default_boolean: false,
            high_numbers: false,
            anchor: Utc
                .with_ymd_and_hms(2021, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            counter: 0,
        }
    }

    /// Queues answers for the next uncertain probability draws.
    #[must_use]
    pub fn with_booleans<I>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.booleans.extend(answers);
        self
    }

    /// Sets the answer used once the queue is empty.
    #[must_use]
    pub const fn with_default_boolean(mut self, answer: bool) -> Self {
        self.default_boolean = answer;
        self
    }

    /// Resolves integer draws to the high end of their range when `true`.
    #[must_use]
    pub const fn with_high_numbers(mut self, high: bool) -> Self {
        self.high_numbers = high;
        self
    }

    /// Pins the reference time.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = anchor;
        self
    }

    fn next_label(&mut self, prefix: &str) -> String {
        self.counter = self.counter.saturating_add(1);
        format!("{prefix}{}", self.counter)
    }
}

impl Default for ScriptedFaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Faker for ScriptedFaker {
    fn ratio(&mut self, numerator: u32, denominator: u32) -> bool {
        if numerator == 0 || denominator == 0 {
            return false;
        }
        if numerator >= denominator {
            return true;
        }
        self.booleans.pop_front().unwrap_or(self.default_boolean)
    }

    fn number_between(&mut self, min: u64, max: u64) -> u64 {
        if self.high_numbers {
            min.max(max)
        } else {
            min.min(max)
        }
    }

    fn words(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.next_label("word")).collect()
    }

    fn sentence(&mut self) -> String {
        format!("{}.", self.next_label("Sentence "))
    }

    fn text(&mut self, max_chars: usize) -> String {
        self.next_label("Text ").chars().take(max_chars).collect()
    }

    fn user_name(&mut self) -> String {
        self.next_label("user")
    }

    fn guild_name(&mut self) -> String {
        self.next_label("Guild ")
    }

    fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }
}
