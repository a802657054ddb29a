//! Figures derived from the score record for display

use serde::Serialize;

use super::ScoreRecord;
use crate::rank::RankTier;

/// Overall rank label before any round has been played
pub const UNRANKED: &str = "Unranked";

/// Lifetime statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Tier name for the average guess count, or `Unranked`
    pub overall_rank: &'static str,
    #[serde(skip)]
    pub overall_tier: Option<RankTier>,
    pub total_games: u64,
    /// Rounds that ended in a win
    pub completed_games: u64,
    /// Percentage of rounds won, one decimal place
    pub win_ratio: f64,
    /// Guesses per round, one decimal place
    pub avg_guess: f64,
}

impl Statistics {
    pub fn from_record(record: &ScoreRecord) -> Self {
        if record.total_games == 0 {
            return Self {
                overall_rank: UNRANKED,
                overall_tier: None,
                total_games: 0,
                completed_games: record.total_wins,
                win_ratio: 0.0,
                avg_guess: 0.0,
            };
        }

        let games = record.total_games as f64;
        let avg_guess = round_tenth(record.total_guesses as f64 / games);
        let win_ratio = round_tenth(100.0 * record.total_wins as f64 / games);
        // The displayed (rounded) average is what gets ranked
        let tier = RankTier::classify(avg_guess);

        Self {
            overall_rank: tier.name(),
            overall_tier: Some(tier),
            total_games: record.total_games,
            completed_games: record.total_wins,
            win_ratio,
            avg_guess,
        }
    }
}

/// Everything the scoreboard shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scoreboard {
    pub best: Option<u32>,
    pub better: Option<u32>,
    pub good: Option<u32>,
    pub stats: Statistics,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
