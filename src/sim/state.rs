//! Game state and core simulation types
//!
//! One `GameState` is one play session: entity store, player, score, level,
//! and the seeded RNG that drives spawning.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::fit_span;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player health exhausted; the session is frozen
    GameOver,
}

/// Events reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Terminal transition, fired exactly once per session
    GameOver { score: u64 },
}

/// Screen area the session plays in (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build a viewport, clamping negative or non-finite sizes to zero
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Boss,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Triple-shot fan
    Weapon,
    /// Enemy contact does no damage
    Shield,
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: u32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, kind: EnemyKind, tuning: &Tuning) -> Self {
        let health = match kind {
            EnemyKind::Normal => tuning.normal_enemy_health,
            EnemyKind::Boss => tuning.boss_health,
        };
        Self {
            id,
            pos,
            kind,
            health,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Hit radius; bosses are drawn 2.5x larger and get a matching radius
    pub fn collision_radius(&self, tuning: &Tuning) -> f32 {
        match self.kind {
            EnemyKind::Normal => tuning.enemy_size / 2.0,
            EnemyKind::Boss => tuning.enemy_size * tuning.boss_radius_factor,
        }
    }

    /// Downward distance per tick
    pub fn speed(&self, tuning: &Tuning) -> f32 {
        match self.kind {
            EnemyKind::Normal => tuning.enemy_speed,
            EnemyKind::Boss => tuning.enemy_speed * tuning.boss_speed_factor,
        }
    }

    /// Score awarded when destroyed by projectiles
    pub fn kill_score(&self, tuning: &Tuning) -> u64 {
        match self.kind {
            EnemyKind::Normal => tuning.normal_kill_score,
            EnemyKind::Boss => tuning.boss_kill_score,
        }
    }
}

/// A collectible power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

/// Any transient object in the entity store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Projectile(Projectile),
    Enemy(Enemy),
    PowerUp(PowerUp),
}

impl Entity {
    pub fn id(&self) -> u32 {
        match self {
            Entity::Projectile(p) => p.id,
            Entity::Enemy(e) => e.id,
            Entity::PowerUp(p) => p.id,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Entity::Projectile(p) => p.pos,
            Entity::Enemy(e) => e.pos,
            Entity::PowerUp(p) => p.pos,
        }
    }

    pub fn pos_mut(&mut self) -> &mut Vec2 {
        match self {
            Entity::Projectile(p) => &mut p.pos,
            Entity::Enemy(e) => &mut e.pos,
            Entity::PowerUp(p) => &mut p.pos,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub health: u32,
    /// Active power-up, if any
    pub power_up: Option<PowerUpKind>,
    /// Ticks until the active power-up expires
    pub power_up_ticks: u32,
}

impl Player {
    /// Fresh ship centered horizontally, near the bottom edge
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        let mut player = Self {
            pos: Vec2::new(
                viewport.width / 2.0,
                viewport.height - tuning.player_start_offset_y,
            ),
            size: tuning.player_size,
            health: tuning.player_start_health,
            power_up: None,
            power_up_ticks: 0,
        };
        player.clamp_to(viewport);
        player
    }

    /// Keep the ship's bounding box on screen
    pub fn clamp_to(&mut self, viewport: Viewport) {
        self.pos.x = self.pos.x.clamp(0.0, fit_span(viewport.width, self.size));
        self.pos.y = self.pos.y.clamp(0.0, fit_span(viewport.height, self.size));
    }

    pub fn is_shielded(&self) -> bool {
        self.power_up == Some(PowerUpKind::Shield)
    }

    pub fn has_weapon(&self) -> bool {
        self.power_up == Some(PowerUpKind::Weapon)
    }

    /// Activate a power-up, overwriting any remaining duration
    pub fn collect(&mut self, kind: PowerUpKind, duration_ticks: u32) {
        self.power_up = Some(kind);
        self.power_up_ticks = duration_ticks;
    }

    /// Count down the active power-up by one tick
    pub fn tick_power_up(&mut self) {
        if self.power_up_ticks > 0 {
            self.power_up_ticks -= 1;
        }
        if self.power_up_ticks == 0 {
            self.power_up = None;
        }
    }

    /// Whole seconds left on the active power-up (for the HUD)
    pub fn power_up_seconds(&self, ticks_per_second: u32) -> u32 {
        self.power_up_ticks.div_ceil(ticks_per_second.max(1))
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG
    pub rng: Pcg32,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Play area
    pub viewport: Viewport,
    /// Live projectiles, enemies and power-ups (ascending id)
    pub entities: Vec<Entity>,
    pub player: Player,
    /// Score (never decreases)
    pub score: u64,
    /// Current level (starts at 1)
    pub level: u32,
    pub phase: GamePhase,
    /// Physics tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let player = Player::new(viewport, &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            entities: Vec::new(),
            player,
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Append a projectile at `pos`
    pub fn spawn_projectile(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity::Projectile(Projectile { id, pos }));
        id
    }

    /// Append an enemy of `kind` at `pos`
    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        let enemy = Enemy::new(id, pos, kind, &self.tuning);
        self.entities.push(Entity::Enemy(enemy));
        id
    }

    /// Append a power-up of `kind` at `pos`
    pub fn spawn_power_up(&mut self, kind: PowerUpKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity::PowerUp(PowerUp { id, pos, kind }));
        id
    }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Projectile(p) => Some(p),
            _ => None,
        })
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Enemy(enemy) => Some(enemy),
            _ => None,
        })
    }

    pub fn power_ups(&self) -> impl Iterator<Item = &PowerUp> {
        self.entities.iter().filter_map(|e| match e {
            Entity::PowerUp(p) => Some(p),
            _ => None,
        })
    }

    /// Resize the play area; the ship is pulled back on screen
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.player.clamp_to(viewport);
    }
}
