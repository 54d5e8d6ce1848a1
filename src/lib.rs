//! Space Shooter - A vertical arcade shooter for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, session state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance
//! - `app`: Menu / play / game over flow

pub mod app;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use app::{App, Hud, Screen};
pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Physics tick period (~60 Hz)
    pub const PHYSICS_TICK_MS: f64 = 16.0;
    /// Player movement poll period (~60 Hz)
    pub const MOVEMENT_TICK_MS: f64 = 16.0;
    /// Spawner period
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Maximum firings of one timer per frame; any further backlog is dropped
    pub const MAX_TIMER_FIRINGS: u32 = 8;
    /// Ticks per second used for HUD countdowns
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Player ship
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HEALTH: u32 = 3;
    /// Distance of the spawn point above the bottom edge
    pub const PLAYER_START_OFFSET_Y: f32 = 100.0;

    /// Projectiles
    pub const BULLET_SIZE: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Lateral/vertical spacing of the weapon power-up fan
    pub const WEAPON_SPREAD: f32 = 10.0;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const NORMAL_ENEMY_HEALTH: u32 = 1;
    pub const BOSS_HEALTH: u32 = 5;
    /// Bosses descend slower than normal enemies
    pub const BOSS_SPEED_FACTOR: f32 = 0.7;
    /// Boss hit radius as a multiple of ENEMY_SIZE (sprite is 2.5x)
    pub const BOSS_RADIUS_FACTOR: f32 = 1.25;
    pub const NORMAL_KILL_SCORE: u64 = 10;
    pub const BOSS_KILL_SCORE: u64 = 100;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 25.0;
    pub const POWERUP_SPEED: f32 = 3.0;
    /// 5 seconds at 60 Hz
    pub const POWERUP_DURATION_TICKS: u32 = 300;

    /// Spawn odds per spawner firing. The normal rate is multiplied by the
    /// level and deliberately left unclamped.
    pub const NORMAL_SPAWN_RATE_PER_LEVEL: f64 = 0.1;
    pub const BOSS_SPAWN_CHANCE: f64 = 0.01;
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.02;

    /// Score per level: level N ends once score exceeds N * LEVEL_SCORE_STEP
    pub const LEVEL_SCORE_STEP: u64 = 500;
}

/// Upper bound of a position range so an object of `size` stays inside `extent`.
///
/// Degenerate extents (zero, negative, NaN) collapse to 0 instead of producing
/// an inverted range.
#[inline]
pub fn fit_span(extent: f32, size: f32) -> f32 {
    let span = extent - size;
    if span.is_finite() && span > 0.0 { span } else { 0.0 }
}
