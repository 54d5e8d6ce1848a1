//! Probabilistic spawning of enemies and power-ups
//!
//! Called once per spawner interval. Each roll is independent and all
//! randomness comes from the session RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{EnemyKind, GameState, PowerUpKind};
use crate::fit_span;

/// What a single spawner firing produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub normal: Option<u32>,
    pub boss: Option<u32>,
    pub power_up: Option<u32>,
}

impl SpawnReport {
    pub fn count(&self) -> usize {
        [self.normal, self.boss, self.power_up]
            .iter()
            .filter(|id| id.is_some())
            .count()
    }
}

/// Chance of a normal enemy per firing. Grows with level and is not capped:
/// from level 10 on a spawn is guaranteed every firing.
pub fn normal_spawn_chance(state: &GameState) -> f64 {
    state.tuning.normal_spawn_rate_per_level * state.level as f64
}

/// Random x so that an object of `size` centered there fits the width,
/// shifted right by `inset`
fn random_x(state: &mut GameState, size: f32, inset: f32) -> f32 {
    let span = fit_span(state.viewport.width, size);
    state.rng.random::<f32>() * span + inset
}

/// Run one spawner firing
pub fn spawn_wave(state: &mut GameState) -> SpawnReport {
    let mut report = SpawnReport::default();
    if state.is_over() {
        return report;
    }

    let enemy_size = state.tuning.enemy_size;

    // Compare against a raw draw so chances above 1.0 stay valid
    if state.rng.random::<f64>() < normal_spawn_chance(state) {
        let x = random_x(state, enemy_size, enemy_size / 2.0);
        report.normal = Some(state.spawn_enemy(EnemyKind::Normal, Vec2::new(x, 0.0)));
    }

    if state.level > 1 && state.rng.random::<f64>() < state.tuning.boss_spawn_chance {
        let x = random_x(state, enemy_size * 2.0, enemy_size);
        let id = state.spawn_enemy(EnemyKind::Boss, Vec2::new(x, 0.0));
        log::info!("Boss {} incoming at level {}", id, state.level);
        report.boss = Some(id);
    }

    if state.rng.random::<f64>() < state.tuning.powerup_spawn_chance {
        let powerup_size = state.tuning.powerup_size;
        let kind = if state.rng.random_bool(0.5) {
            PowerUpKind::Weapon
        } else {
            PowerUpKind::Shield
        };
        let x = random_x(state, powerup_size, powerup_size / 2.0);
        report.power_up = Some(state.spawn_power_up(kind, Vec2::new(x, 0.0)));
    }

    if report.count() > 0 {
        log::debug!("Spawned {:?}", report);
    }
    report
}
