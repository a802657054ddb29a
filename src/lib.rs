//! Guess the Number - digit guessing game with a persistent score ledger
//!
//! Core modules:
//! - `rank`: Skill tiers derived from guess counts
//! - `ledger`: Top-three best scores and lifetime statistics
//! - `persistence`: Key-value score stores (memory, file, LocalStorage)
//! - `round`: One round of the guessing game
//! - `session`: Ties ledger, round and settings together for a front end
//! - `settings`: Player preferences
//! - `web`: JS bindings for the browser build

pub mod ledger;
pub mod persistence;
pub mod rank;
pub mod round;
pub mod session;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use ledger::{LedgerError, ScoreLedger, ScoreRecord, Scoreboard, Statistics};
pub use persistence::{MemoryStore, ScoreStore, StorageError};
pub use rank::RankTier;
pub use round::{GuessError, GuessOutcome, GuessRound};
pub use session::{GuessReport, RoundSummary, Session};
pub use settings::{Settings, Theme};
