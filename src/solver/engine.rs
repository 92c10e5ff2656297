//! Main Mastermind solver interface

use super::game::{Game, Phase, Round};
use super::strategy::Strategy;
use super::SolverError;
use crate::core::{Code, Feedback, GameConfig, GuessSpace};

/// Main Mastermind solver
///
/// Coordinates the solving process using a given strategy over a shared,
/// read-only guess space.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    space: &'a GuessSpace,
    opening: Option<Code>,
}

/// Result of solving one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub rounds: Vec<Round>,
    pub solved: bool,
    /// Candidates still consistent when the loop stopped
    pub remaining: usize,
}

impl SolveOutcome {
    /// Number of guesses played
    #[must_use]
    pub fn steps(&self) -> usize {
        self.rounds.len()
    }

    /// The last guess, which equals the secret when solved
    #[must_use]
    pub fn final_guess(&self) -> Option<&Code> {
        if self.solved {
            self.rounds.last().map(|round| &round.guess)
        } else {
            None
        }
    }
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and guess space
    ///
    /// Without an opening every round, the first included, runs the selector.
    pub const fn new(strategy: S, space: &'a GuessSpace) -> Self {
        Self {
            strategy,
            space,
            opening: None,
        }
    }

    /// Play `opening` as the first guess instead of running the selector
    ///
    /// The first selection over the unconstrained space is the most expensive
    /// one and its result does not depend on the secret, so a precomputed
    /// opening skips it without changing the search.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` if the opening does not fit the configuration.
    pub fn with_opening(mut self, opening: Option<Code>) -> Result<Self, SolverError> {
        if let Some(code) = &opening {
            code.validate(self.space.config())?;
        }
        self.opening = opening;
        Ok(self)
    }

    #[inline]
    pub const fn space(&self) -> &'a GuessSpace {
        self.space
    }

    #[inline]
    pub const fn config(&self) -> &'a GameConfig {
        self.space.config()
    }

    #[inline]
    pub const fn opening(&self) -> Option<&Code> {
        self.opening.as_ref()
    }

    /// Start a game over the full guess space
    pub fn new_game(&self) -> Game {
        Game::new(self.space)
    }

    /// Get the next guess for a game awaiting one
    ///
    /// Uses the opening on the first round when one is set, the sole candidate
    /// when only one remains, and the strategy otherwise.
    ///
    /// # Errors
    /// - `SolverError::OutOfTurn` if the game is not awaiting a guess
    /// - `SolverError::NoCandidates` if the feedback history left no candidate
    /// - `SolverError::NoInformativeGuess` if the strategy finds nothing to play
    pub fn next_guess(&self, game: &Game) -> Result<Code, SolverError> {
        if game.phase() != Phase::AwaitingGuess {
            return Err(SolverError::OutOfTurn {
                expected: Phase::AwaitingGuess,
                actual: game.phase(),
            });
        }

        if game.round() == 0
            && let Some(opening) = &self.opening
        {
            return Ok(opening.clone());
        }

        let candidates = game.candidates();
        if let Some(sole) = candidates.sole() {
            return Ok(sole.clone());
        }
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        log::debug!(
            "{:<24}{} candidates × {} guesses ({})",
            "selecting guess",
            candidates.len(),
            self.space.len(),
            self.strategy.name()
        );

        self.strategy
            .select_guess(self.space.codes(), candidates.codes())
            .cloned()
            .ok_or_else(|| SolverError::NoInformativeGuess {
                candidates: candidates.len(),
            })
    }

    /// Solve `secret`, playing at most `max_rounds` guesses
    ///
    /// Stops as soon as a guess scores every peg exact. If the round limit is
    /// reached first, the outcome is unsolved and reports the residual
    /// candidate count.
    ///
    /// # Errors
    /// - `SolverError::InvalidCode` if the secret does not fit the configuration
    /// - `SolverError::SecretEliminated` if filtering ever drops the secret
    /// - `SolverError::Unresolved` if the secret is guessed while other
    ///   candidates remain
    /// - any error of [`Solver::next_guess`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig, GuessSpace};
    /// use mastermind_solver::solver::{MinimaxStrategy, Solver};
    ///
    /// let space = GuessSpace::new(GameConfig::default());
    /// let solver = Solver::new(MinimaxStrategy, &space)
    ///     .with_opening(Some(Code::new(&[0, 0, 1, 1])))
    ///     .unwrap();
    ///
    /// let secret = Code::new(&[1, 3, 2, 0]);
    /// let outcome = solver.solve(&secret, 10).unwrap();
    /// assert!(outcome.solved);
    /// assert_eq!(outcome.final_guess(), Some(&secret));
    /// ```
    pub fn solve(&self, secret: &Code, max_rounds: usize) -> Result<SolveOutcome, SolverError> {
        secret.validate(self.config())?;

        let mut game = self.new_game();

        while game.round() < max_rounds {
            let guess = self.next_guess(&game)?;
            let feedback = Feedback::calculate(&guess, secret);

            game.submit_guess(guess)?;
            let round = game.apply_feedback(feedback)?;
            log::debug!(
                "{:<24}{} → ({}, {}) {} → {} candidates",
                format!("round {}", round.number),
                round.guess,
                round.feedback.exact(),
                round.feedback.partial(),
                round.candidates_before,
                round.candidates_after
            );

            if !game.candidates().contains(secret) {
                return Err(SolverError::SecretEliminated {
                    round: game.round(),
                });
            }

            if game.phase() == Phase::Done {
                log::info!("{:<24}{} in {} steps", "solved", secret, game.round());
                return Ok(SolveOutcome {
                    remaining: game.candidates().len(),
                    rounds: game.into_rounds(),
                    solved: true,
                });
            }
        }

        log::info!(
            "{:<24}{} after {} steps, {} candidates remain",
            "unresolved",
            secret,
            game.round(),
            game.candidates().len()
        );

        Ok(SolveOutcome {
            remaining: game.candidates().len(),
            rounds: game.into_rounds(),
            solved: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{ExhaustiveStrategy, MinimaxStrategy};

    fn opening() -> Option<Code> {
        Some(Code::new(&[0, 0, 1, 1]))
    }

    #[test]
    fn first_guess_uses_opening() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space)
            .with_opening(opening())
            .unwrap();

        let game = solver.new_game();
        assert_eq!(solver.next_guess(&game).unwrap(), Code::new(&[0, 0, 1, 1]));
    }

    #[test]
    fn first_guess_without_opening_runs_selector() {
        let space = GuessSpace::new(GameConfig::new(3, 2).unwrap());
        let solver = Solver::new(MinimaxStrategy, &space);

        let game = solver.new_game();
        let guess = solver.next_guess(&game).unwrap();
        assert!(space.contains(&guess));
    }

    #[test]
    fn rejects_opening_outside_config() {
        let space = GuessSpace::new(GameConfig::default());
        let result = Solver::new(MinimaxStrategy, &space).with_opening(Some(Code::new(&[0, 0, 1])));
        assert!(matches!(result, Err(SolverError::InvalidCode(_))));
    }

    #[test]
    fn next_guess_short_circuits_single_candidate() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space);
        let mut game = solver.new_game();

        let guess = Code::new(&[0, 1, 2, 3]);
        game.submit_guess(guess.clone()).unwrap();
        game.apply_feedback(Feedback::new(2, 2)).unwrap();
        let guess = Code::new(&[1, 0, 2, 4]);
        let secret = Code::new(&[1, 0, 2, 3]);
        game.submit_guess(guess.clone()).unwrap();
        game.apply_feedback(Feedback::calculate(&guess, &secret)).unwrap();

        assert_eq!(game.candidates().sole(), Some(&secret));
        assert_eq!(solver.next_guess(&game).unwrap(), secret);
    }

    #[test]
    fn next_guess_errors_when_no_candidates() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space);
        let mut game = solver.new_game();

        game.submit_guess(Code::new(&[0, 1, 2, 3])).unwrap();
        game.apply_feedback(Feedback::new(3, 1)).unwrap();

        assert_eq!(solver.next_guess(&game), Err(SolverError::NoCandidates));
    }

    #[test]
    fn next_guess_errors_out_of_turn() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space);
        let mut game = solver.new_game();
        game.submit_guess(Code::new(&[0, 1, 2, 3])).unwrap();

        assert!(matches!(
            solver.next_guess(&game),
            Err(SolverError::OutOfTurn { .. })
        ));
    }

    #[test]
    fn solves_classical_scenario() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space)
            .with_opening(opening())
            .unwrap();
        let secret = Code::new(&[1, 3, 2, 0]);

        let outcome = solver.solve(&secret, 10).unwrap();

        assert!(outcome.solved);
        assert_eq!(outcome.remaining, 1);
        assert_eq!(outcome.final_guess(), Some(&secret));

        let first = &outcome.rounds[0];
        assert_eq!(first.guess, Code::new(&[0, 0, 1, 1]));
        assert_eq!(first.feedback, Feedback::new(0, 2));
        assert_eq!(first.candidates_after, 96);

        let guesses: Vec<Code> = outcome.rounds.iter().map(|r| r.guess.clone()).collect();
        assert_eq!(
            guesses,
            vec![
                Code::new(&[0, 0, 1, 1]),
                Code::new(&[1, 2, 3, 3]),
                Code::new(&[1, 3, 0, 2]),
                Code::new(&[1, 3, 2, 0]),
            ]
        );
        assert_eq!(outcome.steps(), 4);
    }

    #[test]
    fn opening_matches_selector_first_move() {
        let space = GuessSpace::new(GameConfig::default());
        let with_opening = Solver::new(MinimaxStrategy, &space)
            .with_opening(opening())
            .unwrap();
        let without_opening = Solver::new(MinimaxStrategy, &space);
        let secret = Code::new(&[5, 0, 4, 4]);

        assert_eq!(
            with_opening.solve(&secret, 10).unwrap(),
            without_opening.solve(&secret, 10).unwrap()
        );
    }

    #[test]
    fn candidate_counts_never_grow() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space)
            .with_opening(opening())
            .unwrap();

        for secret in space.codes().iter().step_by(97) {
            let outcome = solver.solve(secret, 10).unwrap();
            let mut previous = space.len();
            for round in &outcome.rounds {
                assert_eq!(round.candidates_before, previous);
                assert!(round.candidates_after <= round.candidates_before);
                previous = round.candidates_after;
            }
        }
    }

    #[test]
    fn converges_on_every_classical_secret() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space)
            .with_opening(opening())
            .unwrap();

        let mut distribution = [0usize; 6];
        for secret in space.codes() {
            let outcome = solver.solve(secret, 10).unwrap();
            assert!(outcome.solved, "did not solve {secret}");
            assert_eq!(outcome.remaining, 1, "{secret} left several candidates");
            assert_eq!(outcome.final_guess(), Some(secret));
            assert!(outcome.steps() <= 5, "{secret} took {} steps", outcome.steps());
            distribution[outcome.steps()] += 1;
        }

        assert_eq!(distribution, [0, 1, 6, 25, 239, 1025]);
    }

    #[test]
    fn converges_on_every_small_board_secret() {
        let space = GuessSpace::new(GameConfig::new(3, 3).unwrap());
        let solver = Solver::new(MinimaxStrategy, &space);

        for secret in space.codes() {
            let outcome = solver.solve(secret, 10).unwrap();
            assert!(outcome.solved);
            assert_eq!(outcome.final_guess(), Some(secret));
        }
    }

    #[test]
    fn exhaustive_and_minimax_play_identical_games() {
        let space = GuessSpace::new(GameConfig::new(4, 3).unwrap());
        let fast = Solver::new(MinimaxStrategy, &space);
        let reference = Solver::new(ExhaustiveStrategy, &space);

        for secret in space.codes().iter().step_by(5) {
            assert_eq!(
                fast.solve(secret, 10).unwrap(),
                reference.solve(secret, 10).unwrap()
            );
        }
    }

    #[test]
    fn round_limit_reports_residual_candidates() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space)
            .with_opening(opening())
            .unwrap();
        let secret = Code::new(&[1, 3, 2, 0]);

        let outcome = solver.solve(&secret, 1).unwrap();
        assert!(!outcome.solved);
        assert_eq!(outcome.steps(), 1);
        assert_eq!(outcome.remaining, 96);
        assert_eq!(outcome.final_guess(), None);
    }

    #[test]
    fn rejects_secret_outside_config() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space);

        assert!(matches!(
            solver.solve(&Code::new(&[0, 1, 2, 6]), 10),
            Err(SolverError::InvalidCode(_))
        ));
    }

    #[test]
    fn single_code_board_solves_in_one() {
        let space = GuessSpace::new(GameConfig::new(1, 3).unwrap());
        let solver = Solver::new(MinimaxStrategy, &space);

        let outcome = solver.solve(&Code::new(&[0, 0, 0]), 10).unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.steps(), 1);
    }
}
