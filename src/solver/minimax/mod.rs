//! Minimax-based Mastermind solver
//!
//! Implements worst-case maximization of eliminated candidates.

mod calculator;
mod selector;

pub use calculator::{feedback_distribution, worst_case_reduction, worst_case_reduction_exhaustive};
pub use selector::{select_best_guess, select_best_guess_exhaustive};
