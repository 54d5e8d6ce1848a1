//! Data-driven game balance
//!
//! Every gameplay number lives here so a JSON override in LocalStorage can
//! rebalance the game without a rebuild. Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Timing ===
    /// Physics tick period (ms)
    pub physics_tick_ms: f64,
    /// Player movement poll period (ms)
    pub movement_tick_ms: f64,
    /// Spawner period (ms)
    pub spawn_interval_ms: f64,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub player_start_health: u32,
    pub player_start_offset_y: f32,
    pub weapon_spread: f32,

    // === Projectiles ===
    pub bullet_size: f32,
    pub bullet_speed: f32,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_speed: f32,
    pub normal_enemy_health: u32,
    pub boss_health: u32,
    pub boss_speed_factor: f32,
    pub boss_radius_factor: f32,
    pub normal_kill_score: u64,
    pub boss_kill_score: u64,

    // === Power-ups ===
    pub powerup_size: f32,
    pub powerup_speed: f32,
    pub powerup_duration_ticks: u32,

    // === Spawning ===
    pub normal_spawn_rate_per_level: f64,
    pub boss_spawn_chance: f64,
    pub powerup_spawn_chance: f64,

    // === Progression ===
    pub level_score_step: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            physics_tick_ms: PHYSICS_TICK_MS,
            movement_tick_ms: MOVEMENT_TICK_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_start_health: PLAYER_START_HEALTH,
            player_start_offset_y: PLAYER_START_OFFSET_Y,
            weapon_spread: WEAPON_SPREAD,

            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,

            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            normal_enemy_health: NORMAL_ENEMY_HEALTH,
            boss_health: BOSS_HEALTH,
            boss_speed_factor: BOSS_SPEED_FACTOR,
            boss_radius_factor: BOSS_RADIUS_FACTOR,
            normal_kill_score: NORMAL_KILL_SCORE,
            boss_kill_score: BOSS_KILL_SCORE,

            powerup_size: POWERUP_SIZE,
            powerup_speed: POWERUP_SPEED,
            powerup_duration_ticks: POWERUP_DURATION_TICKS,

            normal_spawn_rate_per_level: NORMAL_SPAWN_RATE_PER_LEVEL,
            boss_spawn_chance: BOSS_SPAWN_CHANCE,
            powerup_spawn_chance: POWERUP_SPAWN_CHANCE,

            level_score_step: LEVEL_SCORE_STEP,
        }
    }
}

impl Tuning {
    /// LocalStorage key for overrides
    pub const STORAGE_KEY: &'static str = "space_shooter_tuning";

    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                log::warn!("Ignoring malformed tuning override: {}", e);
                None
            }
        }
    }

    /// Hit radius of a projectile
    pub fn bullet_radius(&self) -> f32 {
        self.bullet_size / 2.0
    }

    /// Hit radius of the player ship
    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Hit radius of a power-up
    pub fn powerup_radius(&self) -> f32 {
        self.powerup_size / 2.0
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use crate::platform::storage::{KeyValueStore, LocalStore};

        if let Some(json) = LocalStore::open().get(Self::STORAGE_KEY) {
            if let Some(tuning) = Self::from_json(&json) {
                log::info!("Loaded tuning overrides from LocalStorage");
                return tuning;
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
