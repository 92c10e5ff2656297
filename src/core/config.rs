//! Game configuration
//!
//! Alphabet size and code length, validated once at setup.

use super::code::MAX_COLORS;
use std::fmt;

/// Longest code the engine accepts (feedback counts are stored in a byte)
pub const MAX_LENGTH: usize = 32;

/// Largest guess space the engine will enumerate
pub const MAX_SPACE_SIZE: usize = 1 << 24;

/// Number of colors and pegs for a game
///
/// The default is the classical board: 6 colors, 4 pegs, 1296 codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    colors: usize,
    length: usize,
}

/// Error type for configurations the engine cannot run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoColors,
    NoPegs,
    TooManyColors(usize),
    TooManyPegs(usize),
    SpaceTooLarge { colors: usize, length: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColors => write!(f, "Alphabet must contain at least one color"),
            Self::NoPegs => write!(f, "Code must contain at least one peg"),
            Self::TooManyColors(colors) => {
                write!(f, "At most {MAX_COLORS} colors are supported, got {colors}")
            }
            Self::TooManyPegs(length) => {
                write!(f, "At most {MAX_LENGTH} pegs are supported, got {length}")
            }
            Self::SpaceTooLarge { colors, length } => write!(
                f,
                "{colors}^{length} codes exceed the enumeration limit of {MAX_SPACE_SIZE}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub const DEFAULT_COLORS: usize = 6;
    pub const DEFAULT_LENGTH: usize = 4;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero, exceeds its limit,
    /// or the resulting guess space is too large to enumerate.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4).unwrap();
    /// assert_eq!(config.space_size(), 1296);
    ///
    /// assert!(GameConfig::new(0, 4).is_err());
    /// assert!(GameConfig::new(6, 0).is_err());
    /// ```
    pub fn new(colors: usize, length: usize) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if length == 0 {
            return Err(ConfigError::NoPegs);
        }
        if colors > MAX_COLORS {
            return Err(ConfigError::TooManyColors(colors));
        }
        if length > MAX_LENGTH {
            return Err(ConfigError::TooManyPegs(length));
        }

        match colors.checked_pow(length as u32) {
            Some(size) if size <= MAX_SPACE_SIZE => Ok(Self { colors, length }),
            _ => Err(ConfigError::SpaceTooLarge { colors, length }),
        }
    }

    /// Alphabet size K
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    /// Code length L
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of codes in the guess space (K^L)
    #[must_use]
    pub fn space_size(&self) -> usize {
        self.colors.pow(self.length as u32)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            colors: Self::DEFAULT_COLORS,
            length: Self::DEFAULT_LENGTH,
        }
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colors × {} pegs", self.colors, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classical_board() {
        let config = GameConfig::default();
        assert_eq!(config.colors(), 6);
        assert_eq!(config.length(), 4);
        assert_eq!(config.space_size(), 1296);
        assert_eq!(GameConfig::new(6, 4).unwrap(), config);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(GameConfig::new(0, 4), Err(ConfigError::NoColors));
        assert_eq!(GameConfig::new(6, 0), Err(ConfigError::NoPegs));
    }

    #[test]
    fn rejects_oversized_alphabet_and_length() {
        assert_eq!(GameConfig::new(37, 2), Err(ConfigError::TooManyColors(37)));
        assert_eq!(GameConfig::new(1, 33), Err(ConfigError::TooManyPegs(33)));
    }

    #[test]
    fn rejects_unenumerable_space() {
        assert_eq!(
            GameConfig::new(10, 8),
            Err(ConfigError::SpaceTooLarge {
                colors: 10,
                length: 8
            })
        );
        assert!(GameConfig::new(36, 32).is_err());
    }

    #[test]
    fn accepts_space_at_limit() {
        let config = GameConfig::new(2, 24).unwrap();
        assert_eq!(config.space_size(), MAX_SPACE_SIZE);
    }

    #[test]
    fn single_color_board() {
        let config = GameConfig::new(1, 5).unwrap();
        assert_eq!(config.space_size(), 1);
    }
}
