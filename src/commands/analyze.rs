//! Guess analysis command
//!
//! Shows how a guess splits the full code space and how it compares with the
//! best opening the minimax selector finds.

use crate::core::{Code, Feedback, GuessSpace};
use crate::solver::SolverError;
use crate::solver::minimax::{feedback_distribution, select_best_guess};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Candidates eliminated whatever the secret
    pub worst_case_reduction: usize,
    /// Feedback buckets, largest first
    pub distribution: Vec<(Feedback, usize)>,
    /// Best opening over the same space and its reduction
    pub best: Option<(Code, usize)>,
}

impl AnalysisResult {
    /// Size of the largest feedback bucket
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.distribution.first().map_or(0, |&(_, count)| count)
    }
}

/// Analyze a guess against every code of the space
///
/// # Errors
///
/// Returns `SolverError::InvalidCode` if the guess does not fit the space's configuration.
pub fn analyze_guess(guess: &Code, space: &GuessSpace) -> Result<AnalysisResult, SolverError> {
    guess.validate(space.config())?;

    let candidates = space.codes();
    let distribution = feedback_distribution(guess, candidates);
    let largest = distribution.first().map_or(0, |&(_, count)| count);

    Ok(AnalysisResult {
        guess: guess.clone(),
        total_candidates: candidates.len(),
        worst_case_reduction: candidates.len() - largest,
        distribution,
        best: select_best_guess(candidates, candidates).map(|(code, score)| (code.clone(), score)),
    })
}
