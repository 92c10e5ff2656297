//! Mastermind code representation
//!
//! A Code is an ordered sequence of colored pegs. Colors are small integers,
//! written as base-36 digits (`0`-`9`, then `a`-`z`) when parsed or displayed.

use super::GameConfig;
use rand::Rng;
use std::fmt;

/// A single peg color in `0..colors`
pub type Color = u8;

/// Largest alphabet that can be written with one digit per peg
pub const MAX_COLORS: usize = 36;

/// An ordered sequence of peg colors (a guess or a secret)
///
/// Duplicate colors are allowed. Codes compare, order and hash structurally;
/// the derived ordering matches the canonical enumeration of the guess space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    pegs: Box<[Color]>,
}

/// Error type for codes that do not fit a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, got: usize },
    ColorOutOfRange { color: usize, colors: usize },
    InvalidDigit(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Code must have exactly {expected} pegs, got {got}")
            }
            Self::ColorOutOfRange { color, colors } => {
                write!(f, "Color {color} is outside the alphabet of {colors} colors")
            }
            Self::InvalidDigit(ch) => write!(f, "'{ch}' is not a color digit"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from raw peg colors
    ///
    /// No configuration check happens here; use [`Code::validate`] before
    /// handing a user-supplied code to the solver.
    #[must_use]
    pub fn new(pegs: &[Color]) -> Self {
        debug_assert!(
            pegs.iter().all(|&color| usize::from(color) < MAX_COLORS),
            "Peg colors must be < {MAX_COLORS}"
        );
        Self {
            pegs: pegs.into(),
        }
    }

    /// Parse a code written as one base-36 digit per peg
    ///
    /// Whitespace and commas between pegs are ignored, so `"1320"`,
    /// `"1 3 2 0"` and `"1,3,2,0"` are the same code.
    ///
    /// # Errors
    /// Returns `CodeError::InvalidDigit` for any other character.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::parse("1 3 2 0").unwrap();
    /// assert_eq!(code.pegs(), &[1, 3, 2, 0]);
    /// assert_eq!(code.to_string(), "1320");
    ///
    /// assert!(Code::parse("12-4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let pegs = text
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .map(|ch| {
                ch.to_digit(MAX_COLORS as u32)
                    .map(|digit| digit as Color)
                    .ok_or(CodeError::InvalidDigit(ch))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pegs: pegs.into_boxed_slice(),
        })
    }

    /// Parse a code and check it against a configuration
    ///
    /// # Errors
    /// Returns `CodeError` if the text is malformed or the code does not fit `config`.
    pub fn parse_for(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let code = Self::parse(text)?;
        code.validate(config)?;
        Ok(code)
    }

    /// Draw a uniformly random code from the injected generator
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let config = GameConfig::default();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let secret = Code::random(&config, &mut rng);
    /// assert!(secret.validate(&config).is_ok());
    /// ```
    pub fn random<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let pegs: Vec<Color> = (0..config.length())
            .map(|_| rng.random_range(0..config.colors()) as Color)
            .collect();

        Self {
            pegs: pegs.into_boxed_slice(),
        }
    }

    /// Check that the code has the configured length and alphabet
    ///
    /// # Errors
    /// Returns `CodeError` describing the first mismatch found.
    pub fn validate(&self, config: &GameConfig) -> Result<(), CodeError> {
        if self.pegs.len() != config.length() {
            return Err(CodeError::InvalidLength {
                expected: config.length(),
                got: self.pegs.len(),
            });
        }

        match self
            .pegs
            .iter()
            .find(|&&color| usize::from(color) >= config.colors())
        {
            Some(&color) => Err(CodeError::ColorOutOfRange {
                color: usize::from(color),
                colors: config.colors(),
            }),
            None => Ok(()),
        }
    }

    /// Get the peg colors
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.pegs
    }

    /// Number of pegs in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Multiplicity of every color in the code
    #[inline]
    pub(crate) fn color_counts(&self) -> [u8; MAX_COLORS] {
        let mut counts = [0u8; MAX_COLORS];
        for &color in &self.pegs {
            counts[usize::from(color)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in &self.pegs {
            let digit = char::from_digit(u32::from(color), MAX_COLORS as u32).unwrap_or('?');
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
