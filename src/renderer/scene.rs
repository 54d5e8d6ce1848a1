//! Scene assembly: session state to a flat triangle list
//!
//! Kept free of GPU types so it can be built and tested natively.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{EnemyKind, Entity, GameState, PowerUpKind};

const PROJECTILE_SEGMENTS: u32 = 8;
const SHIELD_SEGMENTS: u32 = 32;
const STAR_COUNT: u32 = 48;

/// Build the vertices for one frame, back to front
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(state.entities.len() * 12 + 256);
    let tuning = &state.tuning;

    starfield(&mut out, state);

    for entity in &state.entities {
        match entity {
            Entity::PowerUp(p) => {
                let color = match p.kind {
                    PowerUpKind::Weapon => colors::POWERUP_WEAPON,
                    PowerUpKind::Shield => colors::POWERUP_SHIELD,
                };
                shapes::diamond(&mut out, p.pos, tuning.powerup_radius(), color);
            }
            Entity::Enemy(e) => {
                let radius = e.collision_radius(tuning);
                match e.kind {
                    EnemyKind::Normal => shapes::invader(&mut out, e.pos, radius, colors::ENEMY),
                    EnemyKind::Boss => {
                        shapes::invader(&mut out, e.pos, radius, colors::BOSS);
                        health_pips(&mut out, e.pos, radius, e.health);
                    }
                }
            }
            Entity::Projectile(p) => {
                shapes::circle(
                    &mut out,
                    p.pos,
                    tuning.bullet_radius(),
                    colors::PROJECTILE,
                    PROJECTILE_SEGMENTS,
                );
            }
        }
    }

    let player = &state.player;
    let ship_color = if player.has_weapon() {
        colors::PLAYER_WEAPON
    } else {
        colors::PLAYER
    };
    shapes::ship(&mut out, player.pos, player.size, ship_color);
    if player.is_shielded() {
        let r = tuning.player_radius();
        shapes::ring(
            &mut out,
            player.pos,
            r * 1.2,
            r * 1.4,
            colors::SHIELD,
            SHIELD_SEGMENTS,
        );
    }

    out
}

/// Row of small squares above a boss, one per remaining hit
fn health_pips(out: &mut Vec<Vertex>, center: Vec2, radius: f32, health: u32) {
    let half = Vec2::splat(2.0);
    let step = 6.0;
    let width = step * health.saturating_sub(1) as f32;
    let y = center.y - radius - 6.0;
    for i in 0..health {
        let x = center.x - width / 2.0 + step * i as f32;
        shapes::quad(out, Vec2::new(x, y), half, colors::BOSS_PIP);
    }
}

/// Slowly scrolling background dots, placed by a fixed hash of their index
fn starfield(out: &mut Vec<Vertex>, state: &GameState) {
    let (w, h) = (state.viewport.width, state.viewport.height);
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let scroll = (state.time_ticks as f32 * 0.5) % h;
    for i in 0..STAR_COUNT {
        let hash = i.wrapping_mul(2_654_435_761);
        let x = (hash % 1000) as f32 / 1000.0 * w;
        let y = ((hash / 1000 % 1000) as f32 / 1000.0 * h + scroll) % h;
        shapes::quad(out, Vec2::new(x, y), Vec2::splat(1.0), colors::STAR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;
    use crate::tuning::Tuning;

    const STAR_VERTS: usize = STAR_COUNT as usize * 6;
    const SHIP_VERTS: usize = 6;

    fn new_state() -> GameState {
        GameState::new(1, Viewport::new(800.0, 600.0), Tuning::default())
    }

    fn has_color(vertices: &[Vertex], color: [f32; 4]) -> bool {
        vertices.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_empty_session_draws_ship_and_stars() {
        let scene = build_scene(&new_state());
        assert_eq!(scene.len(), STAR_VERTS + SHIP_VERTS);
        assert!(has_color(&scene, colors::PLAYER));
    }

    #[test]
    fn test_entities_drawn() {
        let mut state = new_state();
        state.spawn_projectile(Vec2::new(100.0, 100.0));
        state.spawn_enemy(EnemyKind::Normal, Vec2::new(200.0, 100.0));
        state.spawn_power_up(PowerUpKind::Shield, Vec2::new(300.0, 100.0));

        let scene = build_scene(&state);
        let expected = STAR_VERTS + PROJECTILE_SEGMENTS as usize * 3 + 6 + 6 + SHIP_VERTS;
        assert_eq!(scene.len(), expected);
        assert!(has_color(&scene, colors::PROJECTILE));
        assert!(has_color(&scene, colors::ENEMY));
        assert!(has_color(&scene, colors::POWERUP_SHIELD));
    }

    #[test]
    fn test_boss_shows_remaining_health() {
        let mut state = new_state();
        state.spawn_enemy(EnemyKind::Boss, Vec2::new(200.0, 100.0));
        let full = build_scene(&state);

        if let Some(Entity::Enemy(boss)) = state.entities.first_mut() {
            boss.health = 2;
        }
        let hurt = build_scene(&state);
        assert_eq!(full.len() - hurt.len(), 3 * 6);
    }

    #[test]
    fn test_power_up_changes_ship() {
        let mut state = new_state();
        state.player.collect(PowerUpKind::Weapon, 10);
        let scene = build_scene(&state);
        assert!(has_color(&scene, colors::PLAYER_WEAPON));
        assert!(!has_color(&scene, colors::SHIELD));

        state.player.collect(PowerUpKind::Shield, 10);
        let scene = build_scene(&state);
        assert!(has_color(&scene, colors::SHIELD));
        assert_eq!(
            scene.len(),
            STAR_VERTS + SHIP_VERTS + SHIELD_SEGMENTS as usize * 6
        );
    }

    #[test]
    fn test_stars_stay_on_screen() {
        let mut state = new_state();
        state.time_ticks = 12_345;
        for v in build_scene(&state).iter().take(STAR_VERTS) {
            assert!(v.position[0] >= -1.0 && v.position[0] <= 801.0);
            assert!(v.position[1] >= -1.0 && v.position[1] <= 601.0);
        }
    }
}
