//! Candidate set
//!
//! The codes still consistent with every observation of a game. Starts as the
//! full guess space and only ever shrinks; enumeration order is preserved.

use crate::core::{Code, Feedback, GuessSpace, is_consistent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// Every code of the space is a candidate
    #[must_use]
    pub fn full(space: &GuessSpace) -> Self {
        Self {
            codes: space.codes().to_vec(),
        }
    }

    /// Keep only codes consistent with `guess` scoring `observed`
    ///
    /// Returns the number of codes eliminated. Filtering twice with the same
    /// observation eliminates nothing the second time.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, GameConfig, GuessSpace};
    /// use mastermind_solver::solver::CandidateSet;
    ///
    /// let space = GuessSpace::new(GameConfig::default());
    /// let mut candidates = CandidateSet::full(&space);
    ///
    /// let guess = Code::new(&[0, 0, 1, 1]);
    /// let secret = Code::new(&[1, 3, 2, 0]);
    /// let removed = candidates.filter(&guess, Feedback::calculate(&guess, &secret));
    ///
    /// assert_eq!(removed + candidates.len(), 1296);
    /// assert!(candidates.contains(&secret));
    /// ```
    pub fn filter(&mut self, guess: &Code, observed: Feedback) -> usize {
        let before = self.codes.len();
        self.codes.retain(|candidate| is_consistent(candidate, guess, observed));
        before - self.codes.len()
    }

    /// Filtered copy, leaving `self` untouched
    #[must_use]
    pub fn filtered(&self, guess: &Code, observed: Feedback) -> Self {
        Self {
            codes: self
                .codes
                .iter()
                .filter(|candidate| is_consistent(candidate, guess, observed))
                .cloned()
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// The remaining code when exactly one is left
    #[must_use]
    pub fn sole(&self) -> Option<&Code> {
        match self.codes.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn classical() -> GuessSpace {
        GuessSpace::new(GameConfig::default())
    }

    #[test]
    fn full_matches_space() {
        let space = classical();
        let candidates = CandidateSet::full(&space);
        assert_eq!(candidates.len(), 1296);
        assert_eq!(candidates.codes(), space.codes());
    }

    #[test]
    fn filter_keeps_secret() {
        let space = classical();
        let mut candidates = CandidateSet::full(&space);
        let guess = Code::new(&[0, 0, 1, 1]);
        let secret = Code::new(&[1, 3, 2, 0]);

        let feedback = Feedback::calculate(&guess, &secret);
        assert_eq!(feedback, Feedback::new(0, 2));

        candidates.filter(&guess, feedback);
        assert!(candidates.contains(&secret));
        assert!(!candidates.contains(&guess));
        assert!(candidates.len() < 1296);
    }

    #[test]
    fn filter_is_idempotent() {
        let space = classical();
        let mut candidates = CandidateSet::full(&space);
        let guess = Code::new(&[0, 1, 2, 3]);
        let observed = Feedback::new(1, 1);

        candidates.filter(&guess, observed);
        let once = candidates.clone();

        let removed = candidates.filter(&guess, observed);
        assert_eq!(removed, 0);
        assert_eq!(candidates, once);
    }

    #[test]
    fn filtered_matches_filter() {
        let space = classical();
        let candidates = CandidateSet::full(&space);
        let guess = Code::new(&[2, 2, 4, 5]);
        let observed = Feedback::new(0, 1);

        let copy = candidates.filtered(&guess, observed);
        let mut in_place = candidates.clone();
        in_place.filter(&guess, observed);

        assert_eq!(copy, in_place);
        assert_eq!(candidates.len(), 1296);
    }

    #[test]
    fn filter_is_monotone_over_rounds() {
        let space = classical();
        let mut candidates = CandidateSet::full(&space);
        let secret = Code::new(&[3, 3, 0, 5]);

        let mut previous = candidates.len();
        for guess in [[0u8, 0, 1, 1], [2, 3, 4, 5], [3, 0, 3, 5], [3, 3, 0, 5]] {
            let guess = Code::new(&guess);
            candidates.filter(&guess, Feedback::calculate(&guess, &secret));
            assert!(candidates.len() <= previous);
            assert!(candidates.contains(&secret));
            previous = candidates.len();
        }
        assert_eq!(candidates.sole(), Some(&secret));
    }

    #[test]
    fn perfect_feedback_leaves_only_guess() {
        let space = classical();
        let mut candidates = CandidateSet::full(&space);
        let guess = Code::new(&[4, 1, 4, 2]);

        candidates.filter(&guess, Feedback::perfect(4));
        assert_eq!(candidates.sole(), Some(&guess));
    }

    #[test]
    fn impossible_feedback_empties_set() {
        let space = classical();
        let mut candidates = CandidateSet::full(&space);

        candidates.filter(&Code::new(&[0, 1, 2, 3]), Feedback::new(3, 1));
        assert!(candidates.is_empty());
        assert_eq!(candidates.sole(), None);
    }
}
