//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Both strategies
//! implement the same minimax criterion and tie-break; they differ only in cost.

use crate::core::Code;

/// A strategy for selecting the best guess from a pool given the current candidates
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if no guess in the pool is informative.
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code>;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Bucketed, parallel minimax (default)
    Minimax(MinimaxStrategy),
    /// Literal sequential scan
    Exhaustive(ExhaustiveStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Exhaustive(s) => s.select_guess(guess_pool, candidates),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Minimax(s) => s.name(),
            Self::Exhaustive(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["minimax", "exhaustive"];

    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "exhaustive" (alias "reference").
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "exhaustive" | "reference" => Self::Exhaustive(ExhaustiveStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Minimax strategy
///
/// Buckets candidates by feedback and evaluates the pool with rayon.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Exhaustive strategy
///
/// Rescans every candidate for every hypothesis, one guess at a time.
/// Cubic per game; practical only for small boards.
pub struct ExhaustiveStrategy;

impl Strategy for ExhaustiveStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        super::minimax::select_best_guess_exhaustive(guess_pool, candidates).map(|(best, _)| best)
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}
