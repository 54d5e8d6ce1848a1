//! Player controller: held-key movement and firing
//!
//! Runs on its own timer, independent of the physics tick.

use glam::Vec2;

use super::state::GameState;

/// Movement directions held during one controller step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveInput {
    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Move the player one step along each held axis, staying on screen
pub fn move_player(state: &mut GameState, input: &MoveInput) {
    if state.is_over() || input.is_idle() {
        return;
    }

    let speed = state.tuning.player_speed;
    let player = &mut state.player;
    if input.left {
        player.pos.x -= speed;
    }
    if input.right {
        player.pos.x += speed;
    }
    if input.up {
        player.pos.y -= speed;
    }
    if input.down {
        player.pos.y += speed;
    }
    player.clamp_to(state.viewport);
}

/// Fire from the player's position. Returns the new projectile ids.
///
/// With the weapon power-up the shot is a three-way fan: left, center
/// (raised), right.
pub fn fire(state: &mut GameState) -> Vec<u32> {
    if state.is_over() {
        return Vec::new();
    }

    let origin = state.player.pos;
    if state.player.has_weapon() {
        let spread = state.tuning.weapon_spread;
        [
            Vec2::new(-spread, 0.0),
            Vec2::new(0.0, -spread),
            Vec2::new(spread, 0.0),
        ]
        .into_iter()
        .map(|offset| state.spawn_projectile(origin + offset))
        .collect()
    } else {
        vec![state.spawn_projectile(origin)]
    }
}
