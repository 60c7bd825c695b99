//! Quiz screen state: the running session and its random source.

use comete::catalog::Period;
use comete::quiz::{Outcome, QuizRound, QuizSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Number of answers offered per question.
const CHOICES_PER_ROUND: usize = 3;

pub struct QuizState {
    session: QuizSession,
    rng: StdRng,
}

impl std::fmt::Debug for QuizState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizState")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            session: QuizSession::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic quiz, for tests.
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            session: QuizSession::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn round(&self) -> Option<&QuizRound> {
        self.session.current()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.session.outcome()
    }

    /// Starts the first round if none is running.
    pub fn ensure_round(&mut self, periods: &[Period]) {
        if self.session.current().is_none() {
            self.next_round(periods);
        }
    }

    pub fn next_round(&mut self, periods: &[Period]) {
        if !self.session.next_round(periods, &mut self.rng, CHOICES_PER_ROUND) {
            tracing::warn!("catalog cannot produce a quiz round");
        }
    }

    pub fn answer(&mut self, choice: usize) {
        self.session.answer(choice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_round_keeps_current_round() {
        let periods = comete::catalog::periods().unwrap();
        let mut quiz = QuizState::with_seed(3);
        quiz.ensure_round(periods);
        let first = quiz.round().cloned();
        assert!(first.is_some());

        quiz.ensure_round(periods);
        assert_eq!(quiz.round().cloned(), first);
        assert_eq!(quiz.round().unwrap().choices.len(), CHOICES_PER_ROUND);
    }
}
