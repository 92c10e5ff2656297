//! Game state
//!
//! One game's candidate set, round history and phase. The phase cycles
//! `AwaitingGuess → AwaitingFeedback → (filter) → AwaitingGuess` until a
//! feedback with every peg exact moves it to `Done`.

use super::{CandidateSet, SolverError};
use crate::core::{Code, Feedback, GameConfig, GuessSpace};

/// Where a game is in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    AwaitingFeedback,
    Done,
}

/// One completed guess/feedback round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number
    pub number: usize,
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of a single game
///
/// Owns its candidate set exclusively; the set only shrinks while the game lives.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    candidates: CandidateSet,
    rounds: Vec<Round>,
    pending: Option<Code>,
    done: bool,
}

impl Game {
    /// Start a game with every code of the space as a candidate
    #[must_use]
    pub fn new(space: &GuessSpace) -> Self {
        Self {
            config: *space.config(),
            candidates: CandidateSet::full(space),
            rounds: Vec::new(),
            pending: None,
            done: false,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.done {
            Phase::Done
        } else if self.pending.is_some() {
            Phase::AwaitingFeedback
        } else {
            Phase::AwaitingGuess
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of completed rounds
    #[inline]
    #[must_use]
    pub fn round(&self) -> usize {
        self.rounds.len()
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// The guess waiting for feedback, if any
    #[must_use]
    pub const fn pending_guess(&self) -> Option<&Code> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn into_rounds(self) -> Vec<Round> {
        self.rounds
    }

    /// Commit to the next guess
    ///
    /// # Errors
    /// Returns `SolverError::OutOfTurn` unless the game awaits a guess, and
    /// `SolverError::InvalidCode` if the guess does not fit the configuration.
    pub fn submit_guess(&mut self, guess: Code) -> Result<(), SolverError> {
        self.expect_phase(Phase::AwaitingGuess)?;
        guess.validate(&self.config)?;

        self.pending = Some(guess);
        Ok(())
    }

    /// Record the feedback for the pending guess and filter the candidates
    ///
    /// # Errors
    /// - `SolverError::OutOfTurn` unless a guess is pending
    /// - `SolverError::InvalidFeedback` if the counts exceed the code length
    ///   (the guess stays pending)
    /// - `SolverError::NoCandidates` if the feedback solves the game with a
    ///   guess earlier rounds had already ruled out
    /// - `SolverError::Unresolved` if the feedback solves the game while more
    ///   than one candidate remains consistent
    pub fn apply_feedback(&mut self, feedback: Feedback) -> Result<&Round, SolverError> {
        self.expect_phase(Phase::AwaitingFeedback)?;

        let length = self.config.length();
        if !feedback.fits(length) {
            return Err(SolverError::InvalidFeedback { feedback, length });
        }

        let Some(guess) = self.pending.take() else {
            return Err(SolverError::OutOfTurn {
                expected: Phase::AwaitingFeedback,
                actual: self.phase(),
            });
        };

        let candidates_before = self.candidates.len();
        self.candidates.filter(&guess, feedback);

        let index = self.rounds.len();
        self.rounds.push(Round {
            number: index + 1,
            guess,
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        if feedback.is_solved(length) {
            self.done = true;
            match self.candidates.len() {
                0 => return Err(SolverError::NoCandidates),
                1 => {}
                remaining => return Err(SolverError::Unresolved { remaining }),
            }
        }

        Ok(&self.rounds[index])
    }

    /// Same game with its last round taken back
    ///
    /// Candidates are rebuilt from the full space by replaying the remaining
    /// rounds, so this game itself never regrows. A pending guess is dropped.
    #[must_use]
    pub fn rewound(&self, space: &GuessSpace) -> Self {
        let mut game = Self::new(space);
        let keep = self.rounds.len().saturating_sub(1);

        for round in &self.rounds[..keep] {
            game.candidates.filter(&round.guess, round.feedback);
            game.rounds.push(round.clone());
        }

        game
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SolverError> {
        let actual = self.phase();
        if actual == expected {
            Ok(())
        } else {
            Err(SolverError::OutOfTurn { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classical() -> GuessSpace {
        GuessSpace::new(GameConfig::default())
    }

    #[test]
    fn new_game_awaits_guess() {
        let space = classical();
        let game = Game::new(&space);

        assert_eq!(game.phase(), Phase::AwaitingGuess);
        assert_eq!(game.round(), 0);
        assert_eq!(game.candidates().len(), 1296);
        assert!(game.last().is_none());
    }

    #[test]
    fn round_cycle() {
        let space = classical();
        let mut game = Game::new(&space);
        let guess = Code::new(&[0, 0, 1, 1]);
        let secret = Code::new(&[1, 3, 2, 0]);

        game.submit_guess(guess.clone()).unwrap();
        assert_eq!(game.phase(), Phase::AwaitingFeedback);
        assert_eq!(game.pending_guess(), Some(&guess));

        let round = game
            .apply_feedback(Feedback::calculate(&guess, &secret))
            .unwrap();
        assert_eq!(round.number, 1);
        assert_eq!(round.feedback, Feedback::new(0, 2));
        assert_eq!(round.candidates_before, 1296);
        assert_eq!(round.candidates_after, 96);

        assert_eq!(game.phase(), Phase::AwaitingGuess);
        assert!(game.candidates().contains(&secret));
    }

    #[test]
    fn perfect_feedback_finishes_game() {
        let space = classical();
        let mut game = Game::new(&space);
        let secret = Code::new(&[2, 2, 5, 1]);

        game.submit_guess(secret.clone()).unwrap();
        game.apply_feedback(Feedback::perfect(4)).unwrap();

        assert_eq!(game.phase(), Phase::Done);
        assert_eq!(game.candidates().sole(), Some(&secret));
    }

    #[test]
    fn out_of_turn_steps_are_rejected() {
        let space = classical();
        let mut game = Game::new(&space);

        assert_eq!(
            game.apply_feedback(Feedback::new(0, 0)).unwrap_err(),
            SolverError::OutOfTurn {
                expected: Phase::AwaitingFeedback,
                actual: Phase::AwaitingGuess
            }
        );

        game.submit_guess(Code::new(&[0, 0, 0, 0])).unwrap();
        assert!(matches!(
            game.submit_guess(Code::new(&[1, 1, 1, 1])),
            Err(SolverError::OutOfTurn { .. })
        ));
    }

    #[test]
    fn no_steps_after_done() {
        let space = classical();
        let mut game = Game::new(&space);
        game.submit_guess(Code::new(&[0, 1, 2, 3])).unwrap();
        game.apply_feedback(Feedback::perfect(4)).unwrap();

        assert!(matches!(
            game.submit_guess(Code::new(&[0, 1, 2, 3])),
            Err(SolverError::OutOfTurn {
                actual: Phase::Done,
                ..
            })
        ));
    }

    #[test]
    fn rejects_guess_outside_config() {
        let space = classical();
        let mut game = Game::new(&space);

        assert!(matches!(
            game.submit_guess(Code::new(&[0, 1, 2])),
            Err(SolverError::InvalidCode(_))
        ));
        assert!(matches!(
            game.submit_guess(Code::new(&[0, 1, 2, 9])),
            Err(SolverError::InvalidCode(_))
        ));
        assert_eq!(game.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn rejects_impossible_feedback_and_keeps_guess() {
        let space = classical();
        let mut game = Game::new(&space);
        game.submit_guess(Code::new(&[0, 1, 2, 3])).unwrap();

        assert_eq!(
            game.apply_feedback(Feedback::new(3, 2)).unwrap_err(),
            SolverError::InvalidFeedback {
                feedback: Feedback::new(3, 2),
                length: 4
            }
        );
        assert_eq!(game.phase(), Phase::AwaitingFeedback);
        assert_eq!(game.candidates().len(), 1296);
    }

    #[test]
    fn solving_with_eliminated_guess_reports_no_candidates() {
        let space = classical();
        let mut game = Game::new(&space);

        // Claim no color of 0123 is in the secret, then claim it was guessed
        let guess = Code::new(&[0, 1, 2, 3]);
        game.submit_guess(guess.clone()).unwrap();
        game.apply_feedback(Feedback::new(0, 0)).unwrap();
        game.submit_guess(guess).unwrap();

        assert_eq!(
            game.apply_feedback(Feedback::perfect(4)).unwrap_err(),
            SolverError::NoCandidates
        );
        assert_eq!(game.phase(), Phase::Done);
        assert!(game.candidates().is_empty());
    }

    #[test]
    fn rewound_drops_last_round() {
        let space = classical();
        let mut game = Game::new(&space);
        let secret = Code::new(&[4, 4, 0, 1]);

        for guess in [Code::new(&[0, 0, 1, 1]), Code::new(&[2, 3, 4, 5])] {
            let feedback = Feedback::calculate(&guess, &secret);
            game.submit_guess(guess).unwrap();
            game.apply_feedback(feedback).unwrap();
        }
        let after_two = game.candidates().len();

        let back = game.rewound(&space);
        assert_eq!(back.round(), 1);
        assert_eq!(back.phase(), Phase::AwaitingGuess);
        assert!(back.candidates().len() >= after_two);
        assert_eq!(back.candidates().len(), game.rounds()[0].candidates_after);

        let start = back.rewound(&space).rewound(&space);
        assert_eq!(start.round(), 0);
        assert_eq!(start.candidates().len(), 1296);
    }
}
