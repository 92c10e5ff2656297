//! Mastermind feedback calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - exact: pegs with the right color in the right position
//! - partial: further color matches ignoring position, each secret peg
//!   credited at most once and exact pegs never counted twice

use super::Code;
use std::fmt;

/// Feedback for a Mastermind guess
///
/// Invariant: `exact + partial <= length` of the codes that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a guess that matches the secret on every peg
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self {
            exact: length as u8,
            partial: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Size of the color multiset intersection (exact + partial)
    #[inline]
    #[must_use]
    pub const fn matched(self) -> u8 {
        self.exact + self.partial
    }

    /// Check whether this feedback ends a game with codes of `length` pegs
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Check whether this feedback could be produced by codes of `length` pegs
    #[inline]
    #[must_use]
    pub const fn fits(self, length: usize) -> bool {
        (self.exact as usize) + (self.partial as usize) <= length
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. exact = positions where both codes hold the same color
    /// 2. For every color, take the smaller of its two multiplicities and sum
    ///    them; that is the multiset intersection size
    /// 3. partial = intersection - exact
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess = Code::new(&[0, 0, 1, 1]);
    /// let secret = Code::new(&[1, 3, 2, 0]);
    ///
    /// // One 0 and one 1 are shared, none in place
    /// assert_eq!(Feedback::calculate(&guess, &secret), Feedback::new(0, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "Codes must have equal length");

        let exact = guess
            .pegs()
            .iter()
            .zip(secret.pegs())
            .filter(|(g, s)| g == s)
            .count() as u8;

        let guess_counts = guess.color_counts();
        let secret_counts = secret.color_counts();
        let intersection: u8 = guess_counts
            .iter()
            .zip(&secret_counts)
            .map(|(&g, &s)| g.min(s))
            .sum();

        Self {
            exact,
            partial: intersection - exact,
        }
    }

    /// Parse feedback from user input such as `"1 2"`, `"1,2"` or `"12"`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::from_str("1 2"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::from_str("02"), Some(Feedback::new(0, 2)));
    /// assert_eq!(Feedback::from_str("x"), None);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for prompts; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s
            .split(|ch: char| ch.is_whitespace() || ch == ',' || ch == '/')
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [exact, partial] => Some(Self::new(exact.parse().ok()?, partial.parse().ok()?)),
            [digits] if digits.len() == 2 && digits.chars().all(|ch| ch.is_ascii_digit()) => {
                let mut chars = digits.chars();
                let exact = chars.next()?.to_digit(10)? as u8;
                let partial = chars.next()?.to_digit(10)? as u8;
                Some(Self::new(exact, partial))
            }
            _ => None,
        }
    }
}

/// Check whether `candidate` could be the secret given an observed round
///
/// A candidate is consistent with (guess, observed) iff playing `guess`
/// against it reproduces `observed`. This is the only pruning primitive.
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Code, guess: &Code, observed: Feedback) -> bool {
    Feedback::calculate(guess, candidate) == observed
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
