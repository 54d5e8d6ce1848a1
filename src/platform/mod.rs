//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held keys)
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Time (fixed-period timers driven by frame time)

pub mod input;
pub mod storage;
pub mod time;

pub use input::HeldKeys;
pub use storage::{KeyValueStore, MemoryStore};
pub use time::{Interval, TimerFirings, Timers};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
