//! Application flow: menu → play → game over
//!
//! Owns the current session and its timers, and the persisted high score.
//! The browser host forwards frames, keys and button clicks here and reads
//! back what to show.

use crate::consts::TICKS_PER_SECOND;
use crate::highscores::HighScore;
use crate::platform::input::HeldKeys;
use crate::platform::storage::KeyValueStore;
use crate::platform::time::Timers;
use crate::sim::{self, GameEvent, GameState, PowerUpKind, Viewport};
use crate::tuning::Tuning;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver { score: u64 },
}

/// Values shown in the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    pub health: u32,
    /// Active power-up and its remaining whole seconds
    pub power_up: Option<(PowerUpKind, u32)>,
    pub high_score: u64,
}

/// Top-level game application
pub struct App<S: KeyValueStore> {
    screen: Screen,
    session: Option<GameState>,
    timers: Timers,
    tuning: Tuning,
    viewport: Viewport,
    high_score: HighScore,
    store: S,
}

impl<S: KeyValueStore> App<S> {
    /// Create the app on the menu screen, reading the stored high score
    pub fn new(store: S, tuning: Tuning, viewport: Viewport) -> Self {
        let high_score = HighScore::load_from(&store);
        log::info!("High score: {}", high_score.best());
        Self {
            screen: Screen::Menu,
            session: None,
            timers: Timers::new(&tuning),
            tuning,
            viewport,
            high_score,
            store,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The live (or just finished) session
    pub fn session(&self) -> Option<&GameState> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameState> {
        self.session.as_mut()
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    /// HUD values for the current session
    pub fn hud(&self) -> Option<Hud> {
        let session = self.session.as_ref()?;
        let player = &session.player;
        Some(Hud {
            score: session.score,
            level: session.level,
            health: player.health,
            power_up: player
                .power_up
                .map(|kind| (kind, player.power_up_seconds(TICKS_PER_SECOND))),
            high_score: self.high_score.best().max(session.score),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Begin a fresh session, replacing any previous one
    pub fn start(&mut self, seed: u64) {
        self.session = Some(GameState::new(seed, self.viewport, self.tuning.clone()));
        self.timers = Timers::new(&self.tuning);
        self.screen = Screen::Playing;
        log::info!("Session started with seed {}", seed);
    }

    /// Play again from the game over screen
    pub fn restart(&mut self, seed: u64) {
        self.start(seed);
    }

    /// Drop the session and return to the menu
    pub fn main_menu(&mut self) {
        self.session = None;
        self.timers.reset();
        self.screen = Screen::Menu;
    }

    /// Resize the play area (host window resize)
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if let Some(session) = self.session.as_mut() {
            session.set_viewport(self.viewport);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Fire key pressed. Returns how many projectiles were spawned.
    pub fn fire(&mut self) -> usize {
        if self.screen != Screen::Playing {
            return 0;
        }
        self.session
            .as_mut()
            .map(|s| sim::fire(s).len())
            .unwrap_or(0)
    }

    /// Advance by one frame of wall-clock time.
    ///
    /// Timers fire in a fixed order within a frame: spawner, player movement,
    /// physics. Returns the game over event on the frame the session ends.
    pub fn update(&mut self, dt_ms: f64, keys: &HeldKeys) -> Option<GameEvent> {
        if self.screen != Screen::Playing {
            return None;
        }
        let session = self.session.as_mut()?;
        let firings = self.timers.advance(dt_ms);

        for _ in 0..firings.spawn {
            sim::spawn_wave(session);
        }

        let input = keys.move_input();
        for _ in 0..firings.movement {
            sim::move_player(session, &input);
        }

        let mut event = None;
        for _ in 0..firings.physics {
            event = sim::tick(session);
            if event.is_some() {
                break;
            }
        }

        // Persist as soon as the live score beats the best
        if self.high_score.record(session.score) && !self.high_score.save_to(&mut self.store) {
            log::warn!("High score {} could not be saved", self.high_score.best());
        }

        if let Some(GameEvent::GameOver { score }) = event {
            self.finish(score);
        }
        event
    }

    fn finish(&mut self, score: u64) {
        self.screen = Screen::GameOver { score };
        self.timers.reset();
        log::info!("Final score {} (best {})", score, self.high_score.best());
    }
}
