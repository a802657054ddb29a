//! A single round of the digit-guessing game
//!
//! The player hunts for a secret string of decimal digits. Each valid guess
//! is scored by how many digits sit in exactly the right position. The round
//! ends on a full match or when the guess cap is reached.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;
use thiserror::Error;

use crate::rank::RankTier;

/// Digits in the secret number
pub const DEFAULT_DIGITS: usize = 5;
/// Guesses allowed before the round is lost
pub const DEFAULT_MAX_GUESSES: u32 = 30;

/// Rejected guess input. Never consumes a guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no input found")]
    EmptyGuess,
    #[error("please fill all {expected} digits (got {actual})")]
    WrongLength { expected: usize, actual: usize },
    #[error("only digits 0-9 allowed")]
    NonDigit,
    #[error("round is over")]
    RoundOver,
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    Playing,
    Won,
    Lost,
}

/// Result of one valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    /// Not solved yet; `correct` digits are in the right place
    Miss { correct: usize },
    Won { guesses: u32 },
    /// Guess cap reached without a match
    Lost { guesses: u32 },
}

impl GuessOutcome {
    /// Guess count if this outcome ended the round
    pub fn final_guesses(&self) -> Option<u32> {
        match *self {
            GuessOutcome::Miss { .. } => None,
            GuessOutcome::Won { guesses } | GuessOutcome::Lost { guesses } => Some(guesses),
        }
    }
}

/// A scored guess kept in the round history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessFeedback {
    pub guess: String,
    pub correct: usize,
}

/// One round in progress (or just finished)
#[derive(Debug, Clone)]
pub struct GuessRound {
    rng: Pcg32,
    secret: Vec<u8>,
    digits: usize,
    max_guesses: u32,
    guesses: u32,
    phase: RoundPhase,
    history: Vec<GuessFeedback>,
}

impl GuessRound {
    /// New round with default length and cap
    pub fn new(seed: u64) -> Self {
        Self::with_limits(seed, DEFAULT_DIGITS, DEFAULT_MAX_GUESSES)
    }

    pub fn with_limits(seed: u64, digits: usize, max_guesses: u32) -> Self {
        let mut round = Self {
            rng: Pcg32::seed_from_u64(seed),
            secret: Vec::new(),
            digits: digits.max(1),
            max_guesses: max_guesses.max(1),
            guesses: 0,
            phase: RoundPhase::Playing,
            history: Vec::new(),
        };
        round.restart();
        round
    }

    /// Draw a fresh secret and clear progress
    pub fn restart(&mut self) {
        self.secret = (0..self.digits).map(|_| self.rng.random_range(0..10u8)).collect();
        self.guesses = 0;
        self.phase = RoundPhase::Playing;
        self.history.clear();
        log::debug!("New round, {} digits, {} guesses", self.digits, self.max_guesses);
    }

    /// Change length and cap, then draw a fresh secret
    pub fn reconfigure(&mut self, digits: usize, max_guesses: u32) {
        self.digits = digits.max(1);
        self.max_guesses = max_guesses.max(1);
        self.restart();
    }

    /// Validate, count and score a guess
    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.phase != RoundPhase::Playing {
            return Err(GuessError::RoundOver);
        }
        let guess = self.parse(input)?;

        let correct = guess
            .iter()
            .zip(&self.secret)
            .filter(|(g, s)| g == s)
            .count();
        self.guesses += 1;

        let outcome = if correct == self.digits {
            self.phase = RoundPhase::Won;
            GuessOutcome::Won { guesses: self.guesses }
        } else if self.guesses >= self.max_guesses {
            self.phase = RoundPhase::Lost;
            GuessOutcome::Lost { guesses: self.guesses }
        } else {
            self.history.push(GuessFeedback {
                guess: input.trim().to_string(),
                correct,
            });
            GuessOutcome::Miss { correct }
        };
        log::debug!("Guess {} -> {:?}", self.guesses, outcome);
        Ok(outcome)
    }

    fn parse(&self, input: &str) -> Result<Vec<u8>, GuessError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GuessError::EmptyGuess);
        }
        let actual = input.chars().count();
        if actual != self.digits {
            return Err(GuessError::WrongLength {
                expected: self.digits,
                actual,
            });
        }
        input
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(GuessError::NonDigit))
            .collect()
    }

    /// Rank for the guesses used so far
    pub fn live_rank(&self) -> RankTier {
        RankTier::from_guesses(self.guesses)
    }

    /// The secret as a digit string (for end-of-round display)
    pub fn secret(&self) -> String {
        self.secret.iter().map(|d| char::from(b'0' + d)).collect()
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn guesses_left(&self) -> u32 {
        self.max_guesses.saturating_sub(self.guesses)
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != RoundPhase::Playing
    }

    /// Missed guesses, oldest first
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A guess sharing no position with the secret
    fn miss_everything(secret: &str) -> String {
        secret
            .chars()
            .map(|c| if c == '0' { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn test_seeded_secret_is_deterministic() {
        let a = GuessRound::new(42);
        let b = GuessRound::new(42);
        assert_eq!(a.secret(), b.secret());
        assert_eq!(a.secret().len(), DEFAULT_DIGITS);
        assert!(a.secret().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_validation_does_not_consume_guesses() {
        let mut round = GuessRound::new(1);
        assert_eq!(round.submit("   "), Err(GuessError::EmptyGuess));
        assert_eq!(
            round.submit("123"),
            Err(GuessError::WrongLength { expected: 5, actual: 3 })
        );
        assert_eq!(round.submit("12a45"), Err(GuessError::NonDigit));
        assert_eq!(round.guesses(), 0);
        assert_eq!(round.guesses_left(), DEFAULT_MAX_GUESSES);
    }

    #[test]
    fn test_scoring_positions() {
        let mut round = GuessRound::new(7);
        let secret = round.secret();

        // First digit right, the rest wrong
        let mut guess = miss_everything(&secret);
        guess.replace_range(0..1, &secret[0..1]);
        assert_eq!(round.submit(&guess), Ok(GuessOutcome::Miss { correct: 1 }));
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.history()[0].correct, 1);

        assert_eq!(round.submit(&secret), Ok(GuessOutcome::Won { guesses: 2 }));
        assert_eq!(round.phase(), RoundPhase::Won);
        assert_eq!(round.live_rank(), RankTier::Hacker);
        assert_eq!(round.submit(&secret), Err(GuessError::RoundOver));
    }

    #[test]
    fn test_cap_loses_round() {
        let mut round = GuessRound::with_limits(3, 5, 3);
        let wrong = miss_everything(&round.secret());
        assert!(matches!(round.submit(&wrong), Ok(GuessOutcome::Miss { correct: 0 })));
        assert!(matches!(round.submit(&wrong), Ok(GuessOutcome::Miss { .. })));
        let outcome = round.submit(&wrong).unwrap();
        assert_eq!(outcome, GuessOutcome::Lost { guesses: 3 });
        assert_eq!(outcome.final_guesses(), Some(3));
        assert!(round.is_over());
        assert_eq!(round.guesses_left(), 0);
    }

    #[test]
    fn test_win_on_last_guess_counts_as_win() {
        let mut round = GuessRound::with_limits(9, 4, 2);
        let secret = round.secret();
        round.submit(&miss_everything(&secret)).unwrap();
        assert_eq!(round.submit(&secret), Ok(GuessOutcome::Won { guesses: 2 }));
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut round = GuessRound::new(11);
        let secret = round.secret();
        round.submit(&secret).unwrap();
        round.restart();
        assert_eq!(round.phase(), RoundPhase::Playing);
        assert_eq!(round.guesses(), 0);
        assert!(round.history().is_empty());
        assert_eq!(round.live_rank(), RankTier::Hacker);
    }

    #[test]
    fn test_reconfigure() {
        let mut round = GuessRound::new(5);
        round.submit(&miss_everything(&round.secret())).unwrap();
        round.reconfigure(3, 0);
        assert_eq!(round.digits(), 3);
        assert_eq!(round.max_guesses(), 1);
        assert_eq!(round.secret().len(), 3);
        assert_eq!(round.guesses(), 0);
        assert!(round.history().is_empty());
    }

    #[test]
    fn test_limits_are_floored() {
        let round = GuessRound::with_limits(0, 0, 0);
        assert_eq!(round.digits(), 1);
        assert_eq!(round.max_guesses(), 1);
    }
}
