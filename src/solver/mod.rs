//! Mastermind solving algorithms
//!
//! Candidate tracking, game state and the minimax guess selection.

mod candidates;
mod engine;
mod error;
mod game;
pub mod minimax;
pub mod strategy;

pub use candidates::CandidateSet;
pub use engine::{SolveOutcome, Solver};
pub use error::SolverError;
pub use game::{Game, Phase, Round};
pub use strategy::{ExhaustiveStrategy, MinimaxStrategy, Strategy, StrategyType};
