//! Minimax guess selection
//!
//! Picks the guess whose worst-case reduction is largest. The earliest guess in
//! pool order wins on ties, so every selector here returns the same code for
//! the same inputs.

use super::calculator::{worst_case_reduction, worst_case_reduction_exhaustive};
use crate::core::Code;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Select the guess maximizing guaranteed eliminations
///
/// Evaluates the pool in parallel and merges on `(score, Reverse(index))`, which
/// reproduces a sequential scan that only replaces the best guess on a strictly
/// greater score. A guess must eliminate at least one candidate to be chosen.
///
/// Returns the winning guess and its worst-case reduction, or `None` if no
/// guess in the pool eliminates anything.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let pool = vec![Code::new(&[2]), Code::new(&[0]), Code::new(&[1])];
/// let candidates = vec![Code::new(&[0]), Code::new(&[1])];
///
/// // [0] and [1] both eliminate one candidate; [0] comes first in the pool
/// let (best, reduction) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best, &Code::new(&[0]));
/// assert_eq!(reduction, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, worst_case_reduction(guess, candidates)))
        .filter(|&(_, _, reduction)| reduction > 0)
        .max_by_key(|&(index, _, reduction)| (reduction, Reverse(index)))
        .map(|(_, guess, reduction)| (guess, reduction))
}

/// Sequential reference selector using the literal O(|candidates|²) scan
///
/// Same contract and tie-break as [`select_best_guess`].
#[must_use]
pub fn select_best_guess_exhaustive<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    let mut best_reduction = 0;
    let mut best_guess = None;

    for guess in guess_pool {
        let reduction = worst_case_reduction_exhaustive(guess, candidates);

        if reduction > best_reduction {
            best_reduction = reduction;
            best_guess = Some(guess);
        }
    }

    best_guess.map(|guess| (guess, best_reduction))
}
