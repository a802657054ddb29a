//! The persisted score record

use serde::{Deserialize, Serialize};

/// Best results plus lifetime counters
///
/// Slots hold the three lowest winning guess counts seen so far, with
/// `best <= better <= good`; `None` means the slot has not been filled yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub best: Option<u32>,
    pub better: Option<u32>,
    pub good: Option<u32>,
    /// Completed rounds, won or lost
    #[serde(default)]
    pub total_games: u64,
    #[serde(default)]
    pub total_wins: u64,
    /// Guesses summed over all completed rounds
    #[serde(default)]
    pub total_guesses: u64,
}

impl ScoreRecord {
    /// The three slots, best first
    pub fn slots(&self) -> [Option<u32>; 3] {
        [self.best, self.better, self.good]
    }

    /// Insert a winning guess count into the slots (lower is better)
    ///
    /// A displaced value moves down one slot; whatever falls off `good` is
    /// dropped. Returns whether any slot changed.
    pub fn insert_result(&mut self, guesses: u32) -> bool {
        let beats = |slot: Option<u32>| slot.is_none_or(|current| guesses < current);

        if beats(self.best) {
            self.good = self.better;
            self.better = self.best;
            self.best = Some(guesses);
        } else if beats(self.better) {
            self.good = self.better;
            self.better = Some(guesses);
        } else if beats(self.good) {
            self.good = Some(guesses);
        } else {
            return false;
        }
        true
    }

    /// Count one completed round
    pub fn add_round(&mut self, guesses: u32, won: bool) {
        self.total_games += 1;
        self.total_guesses += u64::from(guesses);
        if won {
            self.total_wins += 1;
        }
    }

    /// Slots are filled front to back in non-decreasing order, and wins never
    /// outnumber games
    pub fn is_consistent(&self) -> bool {
        let filled: Vec<u32> = self.slots().into_iter().map_while(|s| s).collect();
        let no_gaps = self.slots().iter().filter(|s| s.is_some()).count() == filled.len();
        no_gaps && filled.windows(2).all(|w| w[0] <= w[1]) && self.total_wins <= self.total_games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_from_empty() {
        let mut record = ScoreRecord::default();
        assert!(record.insert_result(10));
        assert_eq!(record.slots(), [Some(10), None, None]);
        assert!(record.insert_result(12));
        assert_eq!(record.slots(), [Some(10), Some(12), None]);
        assert!(record.insert_result(4));
        assert_eq!(record.slots(), [Some(4), Some(10), Some(12)]);
        assert!(record.insert_result(11));
        assert_eq!(record.slots(), [Some(4), Some(10), Some(11)]);
        assert!(!record.insert_result(11));
        assert!(!record.insert_result(30));
        assert_eq!(record.slots(), [Some(4), Some(10), Some(11)]);
    }

    #[test]
    fn test_ties_do_not_displace() {
        let mut record = ScoreRecord::default();
        record.insert_result(6);
        // Equal to best, so it lands in `better`
        assert!(record.insert_result(6));
        assert_eq!(record.slots(), [Some(6), Some(6), None]);
        assert!(record.insert_result(6));
        assert_eq!(record.slots(), [Some(6), Some(6), Some(6)]);
        assert!(!record.insert_result(6));
    }

    #[test]
    fn test_add_round() {
        let mut record = ScoreRecord::default();
        record.add_round(7, true);
        record.add_round(30, false);
        assert_eq!(record.total_games, 2);
        assert_eq!(record.total_wins, 1);
        assert_eq!(record.total_guesses, 37);
        // Counters never touch the slots
        assert_eq!(record.slots(), [None, None, None]);
    }

    #[test]
    fn test_json_layout() {
        let record = ScoreRecord {
            best: Some(3),
            total_games: 1,
            total_wins: 1,
            total_guesses: 3,
            ..ScoreRecord::default()
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "best": 3,
                "better": null,
                "good": null,
                "totalGames": 1,
                "totalWins": 1,
                "totalGuesses": 3,
            })
        );
    }

    #[test]
    fn test_slot_only_record_loads() {
        // Older saves only carried the three slots
        let record: ScoreRecord =
            serde_json::from_str(r#"{"best":5,"better":9,"good":null}"#).unwrap();
        assert_eq!(record.slots(), [Some(5), Some(9), None]);
        assert_eq!(record.total_games, 0);
        assert_eq!(record.total_wins, 0);
        assert_eq!(record.total_guesses, 0);
    }

    #[test]
    fn test_consistency() {
        assert!(ScoreRecord::default().is_consistent());
        let gap = ScoreRecord {
            best: Some(3),
            good: Some(5),
            ..ScoreRecord::default()
        };
        assert!(!gap.is_consistent());
        let unordered = ScoreRecord {
            best: Some(8),
            better: Some(3),
            ..ScoreRecord::default()
        };
        assert!(!unordered.is_consistent());
        let too_many_wins = ScoreRecord {
            total_wins: 2,
            total_games: 1,
            ..ScoreRecord::default()
        };
        assert!(!too_many_wins.is_consistent());
    }
}
