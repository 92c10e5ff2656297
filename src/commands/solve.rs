//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::minimax::worst_case_reduction;
use crate::solver::{CandidateSet, Solver, SolverError, Strategy};

/// Round cap for a single game; only bounds runaway loops
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub steps: Vec<GuessStep>,
    /// Candidates left when the game stopped
    pub remaining: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Candidates the guess was guaranteed to eliminate, whatever the secret
    pub worst_case_reduction: usize,
}

/// Solve a specific code using the given solver and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the solver's configuration
/// - The solver reaches an inconsistent state (see [`SolverError`])
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SolverError> {
    let outcome = solver.solve(&config.secret, config.max_rounds)?;

    // Replay the rounds to report each guess's guarantee against the set it faced
    let mut candidates = CandidateSet::full(solver.space());
    let steps = outcome
        .rounds
        .iter()
        .map(|round| {
            let reduction = worst_case_reduction(&round.guess, candidates.codes());
            candidates.filter(&round.guess, round.feedback);

            GuessStep {
                guess: round.guess.clone(),
                feedback: round.feedback,
                candidates_before: round.candidates_before,
                candidates_after: round.candidates_after,
                worst_case_reduction: reduction,
            }
        })
        .collect();

    Ok(SolveResult {
        success: outcome.solved,
        secret: config.secret,
        steps,
        remaining: outcome.remaining,
    })
}
