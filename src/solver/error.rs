//! Solver error type
//!
//! Configuration and code errors are rejected at setup. The remaining variants
//! are internal invariant violations: they mean the feedback history and the
//! candidate set disagree, and are never absorbed locally.

use super::game::Phase;
use crate::core::{CodeError, ConfigError, Feedback};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The game configuration cannot be run
    InvalidConfig(ConfigError),
    /// A secret or opening guess does not fit the configuration
    InvalidCode(CodeError),
    /// Feedback whose counts exceed the code length
    InvalidFeedback { feedback: Feedback, length: usize },
    /// Selection was requested with no consistent candidate left
    NoCandidates,
    /// No guess in the pool eliminates anything from the candidates
    NoInformativeGuess { candidates: usize },
    /// A filter step removed the true secret from the candidate set
    SecretEliminated { round: usize },
    /// The secret was guessed but other candidates were still consistent
    Unresolved { remaining: usize },
    /// A game step was attempted in the wrong phase
    OutOfTurn { expected: Phase, actual: Phase },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "Invalid configuration: {e}"),
            Self::InvalidCode(e) => write!(f, "Invalid code: {e}"),
            Self::InvalidFeedback { feedback, length } => {
                write!(f, "Feedback ({feedback}) is impossible for {length} pegs")
            }
            Self::NoCandidates => write!(
                f,
                "No candidates remain: the feedback history is inconsistent"
            ),
            Self::NoInformativeGuess { candidates } => write!(
                f,
                "No guess can separate the {candidates} remaining candidates"
            ),
            Self::SecretEliminated { round } => {
                write!(f, "The secret was filtered out of the candidates in round {round}")
            }
            Self::Unresolved { remaining } => write!(
                f,
                "Secret guessed but {remaining} candidates were still consistent"
            ),
            Self::OutOfTurn { expected, actual } => {
                write!(f, "Game step expected phase {expected:?}, but game is {actual:?}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::InvalidCode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolverError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

impl From<CodeError> for SolverError {
    fn from(e: CodeError) -> Self {
        Self::InvalidCode(e)
    }
}
