//! Per-tick entity movement
//!
//! Every entity travels straight up or down at a speed fixed by its kind.
//! Horizontal position never changes after spawn.

use glam::Vec2;

use super::state::Entity;
use crate::tuning::Tuning;

/// Distance an entity travels in one tick
pub fn displacement(entity: &Entity, tuning: &Tuning) -> Vec2 {
    match entity {
        Entity::Projectile(_) => Vec2::new(0.0, -tuning.bullet_speed),
        Entity::Enemy(enemy) => Vec2::new(0.0, enemy.speed(tuning)),
        Entity::PowerUp(_) => Vec2::new(0.0, tuning.powerup_speed),
    }
}

/// Advance every entity by one tick
pub fn advance(entities: &mut [Entity], tuning: &Tuning) {
    for entity in entities.iter_mut() {
        let delta = displacement(entity, tuning);
        *entity.pos_mut() += delta;
    }
}
