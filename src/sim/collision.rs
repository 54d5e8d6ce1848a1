//! Collision detection and response
//!
//! Everything collides as circles. Three independent passes run per tick on
//! post-move positions: projectile vs enemy, enemy vs player, player vs
//! power-up. Results are written to enemy health and player power-up state;
//! score and damage come back as a report for the session to apply.

use glam::Vec2;

use super::state::{Entity, Player, PowerUpKind};
use crate::tuning::Tuning;

/// Deltas produced by one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Score from enemies destroyed by projectiles
    pub score_gained: u64,
    /// Enemies brought to 0 health by projectiles
    pub enemies_destroyed: u32,
    /// Enemies destroyed by ramming the player
    pub enemies_rammed: u32,
    /// Player touched at least one enemy without a shield
    pub player_hit: bool,
    /// Power-ups picked up this tick
    pub collected: Vec<u32>,
    /// Kind of the last power-up picked up (the one now active)
    pub collected_kind: Option<PowerUpKind>,
}

/// Strict circle overlap: centers closer than `reach`
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance(b) < reach
}

/// Resolve all collisions for one tick
pub fn resolve(entities: &mut [Entity], player: &mut Player, tuning: &Tuning) -> CollisionReport {
    let mut report = CollisionReport::default();

    projectile_enemy_pass(entities, tuning, &mut report);
    enemy_player_pass(entities, player, tuning, &mut report);
    player_power_up_pass(entities, player, tuning, &mut report);

    report
}

/// Every projectile damages every enemy it overlaps. Projectiles are not
/// consumed by hits.
fn projectile_enemy_pass(entities: &mut [Entity], tuning: &Tuning, report: &mut CollisionReport) {
    let projectiles: Vec<Vec2> = entities
        .iter()
        .filter_map(|e| match e {
            Entity::Projectile(p) => Some(p.pos),
            _ => None,
        })
        .collect();
    if projectiles.is_empty() {
        return;
    }

    let bullet_radius = tuning.bullet_radius();
    for entity in entities.iter_mut() {
        let Entity::Enemy(enemy) = entity else {
            continue;
        };
        let reach = enemy.collision_radius(tuning) + bullet_radius;

        for &shot in &projectiles {
            if !enemy.is_alive() {
                break;
            }
            if circles_overlap(shot, enemy.pos, reach) {
                enemy.health -= 1;
                if !enemy.is_alive() {
                    report.score_gained += enemy.kill_score(tuning);
                    report.enemies_destroyed += 1;
                    log::trace!("Enemy {} destroyed ({:?})", enemy.id, enemy.kind);
                }
            }
        }
    }
}

/// Living enemies that touch the player are destroyed. Damage is flagged at
/// most once no matter how many enemies hit this tick.
fn enemy_player_pass(
    entities: &mut [Entity],
    player: &Player,
    tuning: &Tuning,
    report: &mut CollisionReport,
) {
    let player_radius = tuning.player_radius();
    for entity in entities.iter_mut() {
        let Entity::Enemy(enemy) = entity else {
            continue;
        };
        if !enemy.is_alive() {
            continue;
        }
        let reach = enemy.collision_radius(tuning) + player_radius;
        if circles_overlap(player.pos, enemy.pos, reach) {
            enemy.health = 0;
            report.enemies_rammed += 1;
            if !player.is_shielded() {
                report.player_hit = true;
            }
        }
    }
}

/// Power-ups touching the player are collected; each resets the duration.
fn player_power_up_pass(
    entities: &[Entity],
    player: &mut Player,
    tuning: &Tuning,
    report: &mut CollisionReport,
) {
    let reach = tuning.powerup_radius() + tuning.player_radius();
    for entity in entities {
        let Entity::PowerUp(power_up) = entity else {
            continue;
        };
        if circles_overlap(player.pos, power_up.pos, reach) {
            player.collect(power_up.kind, tuning.powerup_duration_ticks);
            report.collected.push(power_up.id);
            report.collected_kind = Some(power_up.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EnemyKind, GameState, Viewport};
    use proptest::prelude::*;

    fn new_state() -> GameState {
        let mut state = GameState::new(11, Viewport::new(800.0, 600.0), Tuning::default());
        state.player.pos = Vec2::new(400.0, 500.0);
        state
    }

    fn enemy_health(state: &GameState, id: u32) -> u32 {
        match state.entity(id) {
            Some(Entity::Enemy(e)) => e.health,
            _ => panic!("no enemy {}", id),
        }
    }

    fn resolve_state(state: &mut GameState) -> CollisionReport {
        resolve(&mut state.entities, &mut state.player, &state.tuning)
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.1));
        assert!(!circles_overlap(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0));
    }

    #[test]
    fn test_projectile_kills_normal_enemy() {
        let mut state = new_state();
        let enemy = state.spawn_enemy(EnemyKind::Normal, Vec2::new(100.0, 100.0));
        state.spawn_projectile(Vec2::new(110.0, 105.0));

        let report = resolve_state(&mut state);
        assert_eq!(report.score_gained, 10);
        assert_eq!(report.enemies_destroyed, 1);
        assert_eq!(enemy_health(&state, enemy), 0);
        assert!(!report.player_hit);
    }

    #[test]
    fn test_projectile_miss_just_outside_reach() {
        let mut state = new_state();
        let enemy = state.spawn_enemy(EnemyKind::Normal, Vec2::new(100.0, 100.0));
        // reach = 15 + 2.5
        state.spawn_projectile(Vec2::new(117.5, 100.0));

        let report = resolve_state(&mut state);
        assert_eq!(report.score_gained, 0);
        assert_eq!(enemy_health(&state, enemy), 1);
    }

    #[test]
    fn test_boss_larger_radius_and_health() {
        let mut state = new_state();
        let boss = state.spawn_enemy(EnemyKind::Boss, Vec2::new(100.0, 100.0));
        // Outside a normal enemy's reach, inside a boss's (37.5 + 2.5)
        state.spawn_projectile(Vec2::new(135.0, 100.0));

        for hit in 1..=4 {
            let report = resolve_state(&mut state);
            assert_eq!(report.score_gained, 0);
            assert_eq!(enemy_health(&state, boss), 5 - hit);
        }
        let report = resolve_state(&mut state);
        assert_eq!(report.score_gained, 100);
        assert_eq!(enemy_health(&state, boss), 0);

        // Dead bosses score nothing more
        let report = resolve_state(&mut state);
        assert_eq!(report.score_gained, 0);
    }

    #[test]
    fn test_one_projectile_hits_many_enemies() {
        let mut state = new_state();
        let a = state.spawn_enemy(EnemyKind::Normal, Vec2::new(100.0, 100.0));
        let b = state.spawn_enemy(EnemyKind::Normal, Vec2::new(110.0, 100.0));
        state.spawn_projectile(Vec2::new(105.0, 100.0));

        let report = resolve_state(&mut state);
        assert_eq!(report.score_gained, 20);
        assert_eq!(enemy_health(&state, a), 0);
        assert_eq!(enemy_health(&state, b), 0);
        assert_eq!(state.projectiles().count(), 1);
    }

    #[test]
    fn test_simultaneous_hits_on_boss_stack() {
        let mut state = new_state();
        let boss = state.spawn_enemy(EnemyKind::Boss, Vec2::new(200.0, 100.0));
        for dx in [-10.0, 0.0, 10.0] {
            state.spawn_projectile(Vec2::new(200.0 + dx, 100.0));
        }

        resolve_state(&mut state);
        assert_eq!(enemy_health(&state, boss), 2);
    }

    #[test]
    fn test_enemy_rams_player() {
        let mut state = new_state();
        let enemy = state.spawn_enemy(EnemyKind::Normal, Vec2::new(420.0, 510.0));

        let report = resolve_state(&mut state);
        assert!(report.player_hit);
        assert_eq!(report.enemies_rammed, 1);
        assert_eq!(report.score_gained, 0);
        assert_eq!(enemy_health(&state, enemy), 0);
    }

    #[test]
    fn test_shield_blocks_damage_but_destroys_enemy() {
        let mut state = new_state();
        state.player.collect(PowerUpKind::Shield, 300);
        let enemy = state.spawn_enemy(EnemyKind::Boss, Vec2::new(400.0, 480.0));

        let report = resolve_state(&mut state);
        assert!(!report.player_hit);
        assert_eq!(report.enemies_rammed, 1);
        assert_eq!(enemy_health(&state, enemy), 0);
    }

    #[test]
    fn test_enemy_shot_down_cannot_ram() {
        let mut state = new_state();
        state.spawn_enemy(EnemyKind::Normal, Vec2::new(400.0, 480.0));
        state.spawn_projectile(Vec2::new(400.0, 480.0));

        let report = resolve_state(&mut state);
        assert_eq!(report.score_gained, 10);
        assert!(!report.player_hit);
        assert_eq!(report.enemies_rammed, 0);
    }

    #[test]
    fn test_collect_power_up() {
        let mut state = new_state();
        let id = state.spawn_power_up(PowerUpKind::Weapon, Vec2::new(400.0, 470.0));
        state.spawn_power_up(PowerUpKind::Shield, Vec2::new(100.0, 100.0));

        let report = resolve_state(&mut state);
        assert_eq!(report.collected, vec![id]);
        assert_eq!(report.collected_kind, Some(PowerUpKind::Weapon));
        assert_eq!(state.player.power_up, Some(PowerUpKind::Weapon));
        assert_eq!(state.player.power_up_ticks, 300);
    }

    #[test]
    fn test_collect_resets_remaining_duration() {
        let mut state = new_state();
        state.player.collect(PowerUpKind::Shield, 12);
        state.spawn_power_up(PowerUpKind::Shield, Vec2::new(400.0, 500.0));

        resolve_state(&mut state);
        assert_eq!(state.player.power_up_ticks, 300);
    }

    proptest! {
        #[test]
        fn prop_damage_flag_is_boolean_for_any_crowd(
            offsets in proptest::collection::vec((-24.0f32..24.0, -24.0f32..24.0), 1..20),
            boss in any::<bool>(),
        ) {
            let mut state = new_state();
            let kind = if boss { EnemyKind::Boss } else { EnemyKind::Normal };
            for (dx, dy) in &offsets {
                state.spawn_enemy(kind, state.player.pos + Vec2::new(*dx, *dy));
            }

            let report = resolve_state(&mut state);
            // Every enemy is within reach (>= 35), so all are rammed, one hit flagged
            prop_assert!(report.player_hit);
            prop_assert_eq!(report.enemies_rammed as usize, offsets.len());
            prop_assert!(state.enemies().all(|e| !e.is_alive()));
        }
    }
}
