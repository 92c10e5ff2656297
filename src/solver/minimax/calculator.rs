//! Worst-case reduction calculation for Mastermind guesses
//!
//! For a guess `g` and a secret hypothesis `s`, the reduction is how many
//! candidates the outcome `score(g, s)` would eliminate. The worst case of `g`
//! is the smallest reduction over every hypothesis still in the candidates.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the guaranteed number of candidates eliminated by a guess
///
/// Candidates sharing an outcome survive together, so the reduction for any
/// hypothesis is `|candidates| - |its outcome bucket|` and the worst case is
/// decided by the largest bucket. One linear pass per guess.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::worst_case_reduction;
///
/// let candidates = vec![Code::new(&[0, 1]), Code::new(&[1, 0]), Code::new(&[1, 1])];
///
/// // [0, 1] scores differently against every candidate
/// assert_eq!(worst_case_reduction(&Code::new(&[0, 1]), &candidates), 2);
///
/// // [2, 2] scores (0, 0) against everything and eliminates nothing
/// assert_eq!(worst_case_reduction(&Code::new(&[2, 2]), &candidates), 0);
/// ```
#[must_use]
pub fn worst_case_reduction(guess: &Code, candidates: &[Code]) -> usize {
    let largest = group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0);

    candidates.len() - largest
}

/// Literal form of [`worst_case_reduction`]: rescans the candidates for every hypothesis
///
/// O(|candidates|²) per guess. Kept as the reference the bucketed form is
/// checked against, and used by the exhaustive strategy.
#[must_use]
pub fn worst_case_reduction_exhaustive(guess: &Code, candidates: &[Code]) -> usize {
    let mut worst = candidates.len();

    for secret in candidates {
        let feedback = Feedback::calculate(guess, secret);
        let reduction = candidates
            .iter()
            .filter(|&p| Feedback::calculate(guess, p) != feedback)
            .count();

        if reduction < worst {
            worst = reduction;
        }
    }

    worst
}

/// Outcome buckets for a guess, sorted from largest to smallest
///
/// Ties are ordered by feedback so the result is deterministic.
#[must_use]
pub fn feedback_distribution(guess: &Code, candidates: &[Code]) -> Vec<(Feedback, usize)> {
    let mut buckets: Vec<(Feedback, usize)> =
        group_by_feedback(guess, candidates).into_iter().collect();

    buckets.sort_by(|(f1, n1), (f2, n2)| n2.cmp(n1).then(f1.cmp(f2)));
    buckets
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
