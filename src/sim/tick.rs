//! Fixed timestep simulation tick
//!
//! One physics tick: power-up countdown, movement, collisions, pruning,
//! then score/damage/level bookkeeping. Spawning and player movement run on
//! their own timers (see `spawn` and `player`).

use super::collision;
use super::lifecycle;
use super::movement;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the session by one physics tick.
///
/// Returns `Some(GameEvent::GameOver)` on the tick the player's health runs
/// out; a finished session ignores further ticks.
pub fn tick(state: &mut GameState) -> Option<GameEvent> {
    if state.is_over() {
        return None;
    }

    state.time_ticks += 1;

    state.player.tick_power_up();

    movement::advance(&mut state.entities, &state.tuning);

    let report = collision::resolve(&mut state.entities, &mut state.player, &state.tuning);

    state.score += report.score_gained;
    if let Some(kind) = report.collected_kind {
        log::info!(
            "Picked up {:?} ({} ticks)",
            kind,
            state.player.power_up_ticks
        );
    }
    if report.player_hit {
        state.player.health = state.player.health.saturating_sub(1);
        log::info!("Player hit, health {}", state.player.health);
    }

    lifecycle::prune(
        &mut state.entities,
        &report.collected,
        state.viewport,
        &state.tuning,
    );

    // One level per tick at most, even if the score jumped several thresholds
    if state.score > state.level as u64 * state.tuning.level_score_step {
        state.level += 1;
        log::info!("Level {} reached (score {})", state.level, state.score);
    }

    if state.player.health == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} at level {} after {} ticks",
            state.score,
            state.level,
            state.time_ticks
        );
        return Some(GameEvent::GameOver { score: state.score });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::player::{MoveInput, fire, move_player};
    use crate::sim::spawn::spawn_wave;
    use crate::sim::state::{EnemyKind, Entity, PowerUpKind, Viewport};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        let mut state = GameState::new(12345, Viewport::new(800.0, 600.0), Tuning::default());
        state.player.pos = Vec2::new(400.0, 500.0);
        state
    }

    #[test]
    fn test_projectile_kills_enemy_scenario() {
        let mut state = new_state();
        // Enemy moves +2, projectile -10 this tick; they meet at y = 102
        let enemy = state.spawn_enemy(EnemyKind::Normal, Vec2::new(100.0, 100.0));
        state.spawn_projectile(Vec2::new(100.0, 112.0));

        assert_eq!(tick(&mut state), None);
        assert_eq!(state.score, 10);
        assert!(state.entity(enemy).is_none());
        assert_eq!(state.projectiles().count(), 1);
    }

    #[test]
    fn test_boss_takes_five_ticks_of_hits() {
        let mut state = new_state();
        let boss = state.spawn_enemy(EnemyKind::Boss, Vec2::new(200.0, 100.0));

        for _ in 0..4 {
            // Fresh projectile right under the boss's post-move position
            let y = state.entity(boss).unwrap().pos().y + 1.4 + 10.0;
            state.spawn_projectile(Vec2::new(200.0, y));
            tick(&mut state);
            state.entities.retain(|e| !matches!(e, Entity::Projectile(_)));
            assert!(state.entity(boss).is_some());
            assert_eq!(state.score, 0);
        }

        let y = state.entity(boss).unwrap().pos().y + 1.4 + 10.0;
        state.spawn_projectile(Vec2::new(200.0, y));
        tick(&mut state);
        assert!(state.entity(boss).is_none());
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_last_life_ends_game_with_score() {
        let mut state = new_state();
        state.player.health = 1;
        state.score = 240;
        state.spawn_enemy(EnemyKind::Normal, Vec2::new(400.0, 490.0));

        let event = tick(&mut state);
        assert_eq!(event, Some(GameEvent::GameOver { score: 240 }));
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Terminal sessions are frozen and never report twice
        state.spawn_enemy(EnemyKind::Normal, Vec2::new(400.0, 490.0));
        assert_eq!(tick(&mut state), None);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_final_score_includes_same_tick_kill() {
        let mut state = new_state();
        state.player.health = 1;
        state.score = 240;
        // One enemy dies to a projectile while another rams the player
        state.spawn_enemy(EnemyKind::Normal, Vec2::new(100.0, 100.0));
        state.spawn_projectile(Vec2::new(100.0, 112.0));
        state.spawn_enemy(EnemyKind::Normal, Vec2::new(400.0, 490.0));

        let event = tick(&mut state);
        assert_eq!(event, Some(GameEvent::GameOver { score: 250 }));
        assert_eq!(state.score, 250);
        assert_eq!(state.player.health, 0);
    }

    #[test]
    fn test_crowd_costs_one_health() {
        let mut state = new_state();
        for dx in [-10.0, 0.0, 10.0, 20.0] {
            state.spawn_enemy(EnemyKind::Normal, Vec2::new(400.0 + dx, 495.0));
        }

        tick(&mut state);
        assert_eq!(state.player.health, 2);
        assert_eq!(state.enemies().count(), 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_shield_absorbs_ram() {
        let mut state = new_state();
        state.player.collect(PowerUpKind::Shield, 300);
        state.spawn_enemy(EnemyKind::Boss, Vec2::new(400.0, 480.0));

        tick(&mut state);
        assert_eq!(state.player.health, 3);
        assert_eq!(state.enemies().count(), 0);
    }

    #[test]
    fn test_power_up_collected_and_expires() {
        let mut state = new_state();
        let id = state.spawn_power_up(PowerUpKind::Weapon, Vec2::new(400.0, 480.0));

        tick(&mut state);
        assert!(state.entity(id).is_none());
        assert_eq!(state.player.power_up, Some(PowerUpKind::Weapon));
        assert_eq!(state.player.power_up_ticks, 300);

        for _ in 0..299 {
            tick(&mut state);
        }
        assert_eq!(state.player.power_up, Some(PowerUpKind::Weapon));
        tick(&mut state);
        assert_eq!(state.player.power_up, None);
    }

    #[test]
    fn test_level_up_once_per_tick() {
        let mut state = new_state();
        // Kill a boss worth 100 while sitting well past two thresholds
        state.score = 1400;
        let boss = state.spawn_enemy(EnemyKind::Boss, Vec2::new(200.0, 100.0));
        if let Some(Entity::Enemy(e)) = state.entities.iter_mut().find(|e| e.id() == boss) {
            e.health = 1;
        }
        state.spawn_projectile(Vec2::new(200.0, 111.4));

        tick(&mut state);
        assert_eq!(state.score, 1500);
        assert_eq!(state.level, 2);
        tick(&mut state);
        assert_eq!(state.level, 3);
        // 1500 is not > 3 * 500
        tick(&mut state);
        assert_eq!(state.level, 3);
    }

    #[test]
    fn test_determinism() {
        // Same seed and same inputs give the same session
        let run = || {
            let mut state = new_state();
            state.level = 4;
            for t in 0..600u32 {
                if t % 62 == 0 {
                    spawn_wave(&mut state);
                }
                move_player(
                    &mut state,
                    &MoveInput {
                        left: t % 200 < 100,
                        right: t % 200 >= 100,
                        ..Default::default()
                    },
                );
                if t % 10 == 0 {
                    fire(&mut state);
                }
                tick(&mut state);
            }
            state
        };

        let a = run();
        let b = run();
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.health, b.player.health);
        let ids_a: Vec<u32> = a.entities.iter().map(|e| e.id()).collect();
        let ids_b: Vec<u32> = b.entities.iter().map(|e| e.id()).collect();
        assert_eq!(ids_a, ids_b);
    }

    proptest! {
        #[test]
        fn prop_health_drops_at_most_one_per_tick(
            seed in any::<u64>(),
            level in 1u32..30,
            ticks in 1usize..400,
        ) {
            let mut state = GameState::new(seed, Viewport::new(400.0, 300.0), Tuning::default());
            state.level = level;
            for t in 0..ticks {
                if t % 20 == 0 {
                    spawn_wave(&mut state);
                }
                let health = state.player.health;
                let level = state.level;
                let score = state.score;
                tick(&mut state);
                prop_assert!(health - state.player.health <= 1);
                prop_assert!(state.level - level <= 1);
                prop_assert!(state.score >= score);
            }
        }
    }
}
