//! Integer percentages for probability-gated draws.

use std::fmt;

/// Chance of an event expressed as a whole percentage.
///
/// Values above 100 are clamped, so every `Probability` is a valid ratio
/// over [`Probability::DENOMINATOR`].
///
/// # Example
///
/// ```
/// use mock_generator::Probability;
///
/// assert_eq!(Probability::percent(75).numerator(), 75);
/// assert_eq!(Probability::percent(250), Probability::ALWAYS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probability(u32);

impl Probability {
    /// Denominator shared by every probability.
    pub const DENOMINATOR: u32 = 100;
    /// An event that never happens.
    pub const NEVER: Self = Self(0);
    /// An event that always happens.
    pub const ALWAYS: Self = Self(Self::DENOMINATOR);
    /// A fair coin flip.
    pub const HALF: Self = Self(50);

    /// Creates a probability from a percentage, clamping at 100.
    #[must_use]
    pub const fn percent(value: u32) -> Self {
        if value > Self::DENOMINATOR {
            Self::ALWAYS
        } else {
            Self(value)
        }
    }

    /// Returns the percentage as the numerator over [`Self::DENOMINATOR`].
    #[must_use]
    pub const fn numerator(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
