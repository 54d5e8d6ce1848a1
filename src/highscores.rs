//! High score tracking
//!
//! A single best score, persisted as a plain integer string.

use crate::platform::storage::KeyValueStore;

/// Best score seen on this device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Storage key, shared with earlier browser builds of the game
    pub const STORAGE_KEY: &'static str = "spaceShooterHighScore";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Parse a stored value; anything that isn't a non-negative integer counts as no score
    pub fn parse(raw: &str) -> u64 {
        match raw.trim().parse::<u64>() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("Ignoring malformed high score {:?}", raw);
                0
            }
        }
    }

    /// Read from a store (missing key means 0)
    pub fn load_from(store: &impl KeyValueStore) -> Self {
        let best = store
            .get(Self::STORAGE_KEY)
            .map(|raw| Self::parse(&raw))
            .unwrap_or(0);
        Self { best }
    }

    /// Write the current best to a store
    pub fn save_to(&self, store: &mut impl KeyValueStore) -> bool {
        store.set(Self::STORAGE_KEY, &self.best.to_string())
    }

    /// Record a finished run. Returns true if it beat the best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}
