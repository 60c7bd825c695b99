//! "Quelle époque ?" mini-game.
//!
//! Each round shows a key event from the catalog and asks which period it
//! belongs to. Choices are period ids; exactly one of them is correct.

use crate::catalog::Period;
use rand::seq::SliceRandom;
use rand::Rng;

/// Minimum number of choices in a round.
pub const MIN_CHOICES: usize = 2;

/// One question with its shuffled choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub event: String,
    /// Period ids, in display order.
    pub choices: Vec<String>,
    answer_index: usize,
}

impl QuizRound {
    /// Draws a round from `periods` with up to `choices` options.
    ///
    /// Returns `None` when the catalog cannot support a question (fewer than
    /// two periods, or no key events at all).
    pub fn generate<R: Rng + ?Sized>(periods: &[Period], rng: &mut R, choices: usize) -> Option<Self> {
        if periods.len() < MIN_CHOICES {
            return None;
        }
        let with_events: Vec<&Period> = periods.iter().filter(|p| !p.key_events.is_empty()).collect();
        let answer = *with_events.choose(rng)?;
        let event = answer.key_events.choose(rng)?.clone();

        let count = choices.clamp(MIN_CHOICES, periods.len());
        let mut options: Vec<String> = periods
            .iter()
            .filter(|p| p.id != answer.id)
            .map(|p| p.id.clone())
            .collect::<Vec<_>>()
            .choose_multiple(rng, count - 1)
            .cloned()
            .collect();
        options.push(answer.id.clone());
        options.shuffle(rng);

        let answer_index = options.iter().position(|id| *id == answer.id)?;
        Some(Self {
            event,
            choices: options,
            answer_index,
        })
    }

    pub fn answer_id(&self) -> &str {
        &self.choices[self.answer_index]
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}

/// Result of answering a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong { answer_id: String },
}

/// Running score across rounds.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    score: u32,
    rounds: u32,
    current: Option<QuizRound>,
    outcome: Option<Outcome>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn current(&self) -> Option<&QuizRound> {
        self.current.as_ref()
    }

    /// Outcome of the current round, once answered.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Starts a new round. Returns false if the catalog cannot produce one.
    pub fn next_round<R: Rng + ?Sized>(&mut self, periods: &[Period], rng: &mut R, choices: usize) -> bool {
        self.current = QuizRound::generate(periods, rng, choices);
        self.outcome = None;
        self.current.is_some()
    }

    /// Answers the current round. Only the first answer of a round counts.
    pub fn answer(&mut self, choice: usize) -> Option<&Outcome> {
        let round = self.current.as_ref()?;
        if self.outcome.is_none() {
            let outcome = if round.is_correct(choice) {
                self.score += 1;
                Outcome::Correct
            } else {
                Outcome::Wrong {
                    answer_id: round.answer_id().to_string(),
                }
            };
            self.rounds += 1;
            tracing::debug!(score = self.score, rounds = self.rounds, ?outcome, "quiz answer");
            self.outcome = Some(outcome);
        }
        self.outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_contains_answer_once() {
        let periods = catalog::periods().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let round = QuizRound::generate(periods, &mut rng, 3).unwrap();
            assert_eq!(round.choices.len(), 3);

            let answer = round.answer_id().to_string();
            assert_eq!(round.choices.iter().filter(|id| **id == answer).count(), 1);

            let period = periods.iter().find(|p| p.id == answer).unwrap();
            assert!(period.key_events.contains(&round.event));

            let mut unique = round.choices.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_choice_count_is_bounded() {
        let periods = catalog::periods().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(QuizRound::generate(periods, &mut rng, 0).unwrap().choices.len(), MIN_CHOICES);
        assert_eq!(QuizRound::generate(periods, &mut rng, 99).unwrap().choices.len(), periods.len());
        assert!(QuizRound::generate(&periods[..1], &mut rng, 3).is_none());
    }

    #[test]
    fn test_session_scores_first_answer_only() {
        let periods = catalog::periods().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = QuizSession::new();
        assert!(session.answer(0).is_none());

        assert!(session.next_round(periods, &mut rng, 4));
        let round = session.current().unwrap().clone();
        let right = round.choices.iter().position(|id| id == round.answer_id()).unwrap();
        let wrong = (right + 1) % round.choices.len();

        assert_eq!(session.answer(right), Some(&Outcome::Correct));
        // A second click on the same round changes nothing
        assert_eq!(session.answer(wrong), Some(&Outcome::Correct));
        assert_eq!((session.score(), session.rounds()), (1, 1));

        session.next_round(periods, &mut rng, 4);
        let round = session.current().unwrap().clone();
        let right = round.choices.iter().position(|id| id == round.answer_id()).unwrap();
        let wrong = (right + 1) % round.choices.len();
        assert!(matches!(session.answer(wrong), Some(Outcome::Wrong { .. })));
        assert_eq!((session.score(), session.rounds()), (1, 2));
    }
}
