//! Best-score ledger
//!
//! Keeps the three best winning guess counts and lifetime counters in a
//! single record, mirrored in memory and written through to a `ScoreStore`.
//!
//! The in-memory mirror only changes after the store accepted the write. A
//! ledger whose store could not be loaded runs detached: mutations apply to
//! the mirror alone so play continues. A later successful `load` replaces the
//! mirror with the stored record, discarding progress made while detached;
//! a successful `reset` reattaches with a fresh record.

pub mod record;
pub mod stats;

pub use record::ScoreRecord;
pub use stats::{Scoreboard, Statistics, UNRANKED};

use thiserror::Error;

use crate::persistence::{RECORD_KEY, ScoreStore, StorageError};

/// Ledger failures
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Caller bug: a completed round always has at least one guess
    #[error("invalid guess count: {0}")]
    InvalidGuessCount(u32),
    #[error("score storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}

/// Score ledger over a store
#[derive(Debug)]
pub struct ScoreLedger<S> {
    store: S,
    record: ScoreRecord,
    attached: bool,
}

impl<S: ScoreStore> ScoreLedger<S> {
    /// Ledger with default figures, detached until `load` succeeds
    pub fn new(store: S) -> Self {
        Self {
            store,
            record: ScoreRecord::default(),
            attached: false,
        }
    }

    /// Open the store and pull the record into memory
    ///
    /// A missing record is created at defaults. On failure the ledger stays
    /// detached with its current in-memory figures.
    pub async fn load(&mut self) -> Result<ScoreRecord, LedgerError> {
        self.store.open().await?;
        let record = match self.store.get(RECORD_KEY).await? {
            Some(record) => {
                if !record.is_consistent() {
                    log::warn!("Loaded score record is out of order: {:?}", record);
                }
                log::info!("Scores loaded: {:?}", record);
                record
            }
            None => {
                let fresh = ScoreRecord::default();
                self.store.put(RECORD_KEY, &fresh).await?;
                log::info!("No scores found, starting fresh");
                fresh
            }
        };
        self.record = record;
        self.attached = true;
        Ok(record)
    }

    /// Record a winning round's guess count if it makes the top three
    ///
    /// Returns whether the slots changed. Only writes when they did.
    pub async fn record_best_if_improved(&mut self, guesses: u32) -> Result<bool, LedgerError> {
        Self::check_guesses(guesses)?;
        let mut next = self.record;
        if !next.insert_result(guesses) {
            return Ok(false);
        }
        self.commit(next).await?;
        log::info!("Best scores updated: {:?}", next.slots());
        Ok(true)
    }

    /// Count a completed round, won or lost. Always writes.
    pub async fn track_completed_round(
        &mut self,
        guesses: u32,
        won: bool,
    ) -> Result<(), LedgerError> {
        Self::check_guesses(guesses)?;
        let mut next = self.record;
        next.add_round(guesses, won);
        self.commit(next).await?;
        log::info!(
            "Game stats updated: {} games, {} wins, {} guesses",
            next.total_games,
            next.total_wins,
            next.total_guesses
        );
        Ok(())
    }

    /// Wipe the record back to its first-use state
    ///
    /// Always goes to the store (open, delete, recreate), so it also repairs a
    /// record that failed to load and reattaches the ledger. All or nothing:
    /// if the store rejects any step the in-memory figures are left as they
    /// were.
    pub async fn reset(&mut self) -> Result<(), LedgerError> {
        let fresh = ScoreRecord::default();
        self.store.open().await?;
        self.store.delete(RECORD_KEY).await?;
        self.store.put(RECORD_KEY, &fresh).await?;
        self.record = fresh;
        self.attached = true;
        log::info!("Score ledger reset");
        Ok(())
    }

    /// Derived lifetime statistics
    pub fn statistics(&self) -> Statistics {
        Statistics::from_record(&self.record)
    }

    /// Slots plus statistics, for the scoreboard
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            best: self.record.best,
            better: self.record.better,
            good: self.record.good,
            stats: self.statistics(),
        }
    }

    pub fn record(&self) -> &ScoreRecord {
        &self.record
    }

    /// Whether mutations are being written to the store
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn check_guesses(guesses: u32) -> Result<(), LedgerError> {
        if guesses == 0 {
            return Err(LedgerError::InvalidGuessCount(guesses));
        }
        Ok(())
    }

    async fn commit(&mut self, next: ScoreRecord) -> Result<(), LedgerError> {
        if self.attached {
            self.store.put(RECORD_KEY, &next).await?;
        } else {
            log::debug!("Ledger detached, keeping scores in memory only");
        }
        self.record = next;
        Ok(())
    }
}
