//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod lifecycle;
pub mod movement;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, circles_overlap, resolve};
pub use lifecycle::prune;
pub use player::{MoveInput, fire, move_player};
pub use spawn::{SpawnReport, spawn_wave};
pub use state::{
    Enemy, EnemyKind, Entity, GameEvent, GamePhase, GameState, Player, PowerUp, PowerUpKind,
    Projectile, Viewport,
};
pub use tick::tick;
