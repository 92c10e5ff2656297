//! Guess space enumeration
//!
//! All K^L codes in canonical order: lexicographic, last peg varying fastest.
//! Built once per configuration and only ever read afterwards.

use super::{Code, Color, GameConfig};

/// Every code of a configuration, in canonical enumeration order
#[derive(Debug, Clone)]
pub struct GuessSpace {
    config: GameConfig,
    codes: Vec<Code>,
}

impl GuessSpace {
    /// Enumerate the full space for `config`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig, GuessSpace};
    ///
    /// let space = GuessSpace::new(GameConfig::default());
    /// assert_eq!(space.len(), 1296);
    /// assert_eq!(space.codes()[0], Code::new(&[0, 0, 0, 0]));
    /// assert_eq!(space.codes()[1], Code::new(&[0, 0, 0, 1]));
    /// assert_eq!(space.position(&Code::new(&[0, 0, 1, 1])), Some(7));
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let colors = config.colors();
        let length = config.length();

        let codes = (0..config.space_size())
            .map(|index| {
                let mut pegs: Vec<Color> = vec![0; length];
                let mut rest = index;
                for peg in pegs.iter_mut().rev() {
                    *peg = (rest % colors) as Color;
                    rest /= colors;
                }
                Code::new(&pegs)
            })
            .collect();

        Self { config, codes }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All codes in enumeration order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Index of `code` in the enumeration, or `None` if it does not fit the configuration
    #[must_use]
    pub fn position(&self, code: &Code) -> Option<usize> {
        code.validate(&self.config).ok()?;

        Some(
            code.pegs()
                .iter()
                .fold(0, |index, &color| index * self.config.colors() + usize::from(color)),
        )
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.position(code).is_some()
    }
}
