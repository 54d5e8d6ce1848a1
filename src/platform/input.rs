//! Keyboard input
//!
//! Tracks physical keys by their DOM `KeyboardEvent.key` name. Aliases are
//! resolved when building a `MoveInput`, so releasing one of two keys held
//! for the same direction keeps the ship moving.

use std::collections::HashSet;

use crate::sim::MoveInput;

/// Key that requests a shot on every key-down (repeats included)
pub const FIRE_KEY: &str = " ";

const LEFT_KEYS: [&str; 2] = ["ArrowLeft", "a"];
const RIGHT_KEYS: [&str; 2] = ["ArrowRight", "d"];
const UP_KEYS: [&str; 2] = ["ArrowUp", "w"];
const DOWN_KEYS: [&str; 2] = ["ArrowDown", "s"];

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns true if it requests a shot.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string());
        key == FIRE_KEY
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// Forget everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.keys.contains(*k))
    }

    /// Directions currently requested
    pub fn move_input(&self) -> MoveInput {
        MoveInput {
            left: self.any_held(&LEFT_KEYS),
            right: self.any_held(&RIGHT_KEYS),
            up: self.any_held(&UP_KEYS),
            down: self.any_held(&DOWN_KEYS),
        }
    }
}
