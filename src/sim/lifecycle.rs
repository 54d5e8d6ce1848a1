//! End-of-tick pruning of destroyed and off-screen entities

use super::state::{Entity, Viewport};
use crate::tuning::Tuning;

/// Whether an entity survives this tick
pub fn is_retained(
    entity: &Entity,
    collected: &[u32],
    viewport: Viewport,
    tuning: &Tuning,
) -> bool {
    match entity {
        Entity::Projectile(p) => p.pos.y > -tuning.bullet_size,
        Entity::Enemy(e) => e.is_alive() && e.pos.y < viewport.height + tuning.enemy_size,
        Entity::PowerUp(p) => {
            p.pos.y < viewport.height + tuning.powerup_size && !collected.contains(&p.id)
        }
    }
}

/// Drop everything that left the screen, died, or was collected.
/// Returns how many entities were removed.
pub fn prune(
    entities: &mut Vec<Entity>,
    collected: &[u32],
    viewport: Viewport,
    tuning: &Tuning,
) -> usize {
    let before = entities.len();
    entities.retain(|e| is_retained(e, collected, viewport, tuning));
    before - entities.len()
}
