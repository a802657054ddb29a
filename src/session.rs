//! Application session
//!
//! Owns the score ledger, the current round and the settings. Front ends
//! build one at startup and drive everything through it.

use serde::Serialize;

use crate::ledger::{LedgerError, ScoreLedger, Scoreboard};
use crate::persistence::ScoreStore;
use crate::rank::RankTier;
use crate::round::{GuessError, GuessOutcome, GuessRound};
use crate::settings::{Settings, Theme};

/// How a finished round was booked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub won: bool,
    pub guesses: u32,
    pub rank: RankTier,
    /// Entered the top three
    pub new_best: bool,
    /// Ledger writes reached the store
    pub persisted: bool,
}

/// Feedback for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub live_rank: RankTier,
    pub guesses_left: u32,
    /// Present when this guess ended the round
    pub summary: Option<RoundSummary>,
}

/// Game session
#[derive(Debug)]
pub struct Session<S> {
    settings: Settings,
    ledger: ScoreLedger<S>,
    round: GuessRound,
}

impl<S: ScoreStore> Session<S> {
    /// Load scores and deal the first round
    ///
    /// A store that cannot be loaded is logged and play goes on with
    /// in-memory scores.
    pub async fn start(store: S, settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let mut ledger = ScoreLedger::new(store);
        if let Err(e) = ledger.load().await {
            log::warn!("Scores will not be saved this session: {}", e);
        }
        let round = GuessRound::with_limits(seed, settings.digit_count, settings.max_guesses);
        Self {
            settings,
            ledger,
            round,
        }
    }

    /// Submit a guess and book the round if it ended
    pub async fn submit_guess(&mut self, input: &str) -> Result<GuessReport, GuessError> {
        let outcome = self.round.submit(input)?;
        let summary = match outcome {
            GuessOutcome::Miss { .. } => None,
            GuessOutcome::Won { guesses } => Some(self.finish_round(guesses, true).await),
            GuessOutcome::Lost { guesses } => Some(self.finish_round(guesses, false).await),
        };
        Ok(GuessReport {
            outcome,
            live_rank: self.round.live_rank(),
            guesses_left: self.round.guesses_left(),
            summary,
        })
    }

    async fn finish_round(&mut self, guesses: u32, won: bool) -> RoundSummary {
        let mut persisted = self.ledger.is_attached();

        let mut new_best = false;
        if won {
            match self.ledger.record_best_if_improved(guesses).await {
                Ok(updated) => new_best = updated,
                Err(e) => {
                    log::warn!("Could not save best scores: {}", e);
                    persisted = false;
                }
            }
        }
        if let Err(e) = self.ledger.track_completed_round(guesses, won).await {
            log::warn!("Could not save game stats: {}", e);
            persisted = false;
        }

        let rank = RankTier::from_guesses(guesses);
        if won {
            log::info!("Round won in {} guesses ({})", guesses, rank.name());
        } else {
            log::info!("Round lost after {} guesses", guesses);
        }
        RoundSummary {
            won,
            guesses,
            rank,
            new_best,
            persisted,
        }
    }

    /// Deal a new round (abandoning any round in progress without booking it)
    ///
    /// Picks up round limits changed through `update_settings`.
    pub fn new_round(&mut self) {
        self.round
            .reconfigure(self.settings.digit_count, self.settings.max_guesses);
    }

    /// Wipe all scores and statistics
    pub async fn reset_scores(&mut self) -> Result<(), LedgerError> {
        self.ledger.reset().await
    }

    /// Apply and save new settings; round limits take effect from the next round
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings.sanitized();
        self.settings.save();
    }

    /// Flip light/dark and save
    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.toggle_theme();
        self.settings.save();
        self.settings.theme
    }

    /// Flip sound feedback and save
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings.save();
        self.settings.sound_enabled
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.ledger.scoreboard()
    }

    pub fn round(&self) -> &GuessRound {
        &self.round
    }

    pub fn ledger(&self) -> &ScoreLedger<S> {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ScoreLedger<S> {
        &mut self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
