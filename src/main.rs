//! Space Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use space_shooter::platform::{HeldKeys, LocalStore};
    use space_shooter::renderer::{RenderState, build_scene};
    use space_shooter::sim::{GameEvent, PowerUpKind, Viewport};
    use space_shooter::{App, Screen, Tuning};

    /// Game instance holding all state
    struct Game {
        app: App<LocalStore>,
        keys: HeldKeys,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        last_time: f64,
        /// Last screen pushed to the DOM
        shown: Option<Screen>,
    }

    impl Game {
        fn new(app: App<LocalStore>, canvas: HtmlCanvasElement) -> Self {
            Self {
                app,
                keys: HeldKeys::new(),
                render_state: None,
                canvas,
                last_time: 0.0,
                shown: None,
            }
        }

        /// Match the canvas backing store and the play area to the CSS size
        fn fit_canvas(&mut self) {
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let client_w = self.canvas.client_width().max(1);
            let client_h = self.canvas.client_height().max(1);
            let width = (client_w as f64 * dpr) as u32;
            let height = (client_h as f64 * dpr) as u32;

            if (self.canvas.width(), self.canvas.height()) != (width, height) {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                if let Some(ref mut render_state) = self.render_state {
                    render_state.resize(width, height);
                }
            }
            // Gameplay runs in CSS pixels
            let viewport = self.app.viewport();
            if viewport != Viewport::new(client_w as f32, client_h as f32) {
                self.app.set_viewport(client_w as f32, client_h as f32);
            }
        }

        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            if let Some(GameEvent::GameOver { score }) = self.app.update(dt, &self.keys) {
                log::info!("Game over with {} points", score);
                self.keys.clear();
            }
        }

        fn render(&mut self) {
            let Some(session) = self.app.session() else {
                return;
            };
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0) as f32;
            let mut vertices = build_scene(session);
            for v in &mut vertices {
                v.position[0] *= dpr;
                v.position[1] *= dpr;
            }

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements and screen overlays in the DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let screen = self.app.screen();
            if self.shown != Some(screen) {
                show_screen(&document, screen, self.app.high_score());
                self.shown = Some(screen);
            }

            let Some(hud) = self.app.hud() else {
                return;
            };
            set_value(&document, "#hud-score .hud-value", &hud.score.to_string());
            set_value(&document, "#hud-level .hud-value", &hud.level.to_string());
            set_value(&document, "#hud-health .hud-value", &hud.health.to_string());
            set_value(&document, "#hud-best .hud-value", &hud.high_score.to_string());

            if let Some(el) = document.get_element_by_id("hud-powerup") {
                match hud.power_up {
                    Some((kind, seconds)) => {
                        let _ = el.set_attribute("class", "hud-item");
                        let name = match kind {
                            PowerUpKind::Weapon => "Triple Shot",
                            PowerUpKind::Shield => "Shield",
                        };
                        set_value(
                            &document,
                            "#hud-powerup .hud-value",
                            &format!("{} {}s", name, seconds),
                        );
                    }
                    None => {
                        let _ = el.set_attribute("class", "hud-item hidden");
                    }
                }
            }
        }
    }

    fn set_value(document: &Document, selector: &str, text: &str) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    /// Toggle overlays for the current screen
    fn show_screen(document: &Document, screen: Screen, high_score: u64) {
        set_visible(document, "menu", screen == Screen::Menu);
        set_visible(document, "hud", screen != Screen::Menu);
        set_visible(document, "game-over", matches!(screen, Screen::GameOver { .. }));

        if let Some(el) = document.get_element_by_id("menu-best") {
            el.set_text_content(Some(&high_score.to_string()));
        }
        if let Screen::GameOver { score } = screen {
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("final-best") {
                el.set_text_content(Some(&high_score.to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Space Shooter starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        set_visible(&document, "loading", false);

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let store = LocalStore::open();
        let tuning = Tuning::load();
        let viewport = Viewport::new(canvas.client_width() as f32, canvas.client_height() as f32);
        let app = App::new(store, tuning, viewport);

        let game = Rc::new(RefCell::new(Game::new(app, canvas.clone())));
        game.borrow_mut().fit_canvas();

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::HighPerformance,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let (w, h) = (canvas.width(), canvas.height());
                        game.borrow_mut().render_state =
                            RenderState::new(surface, &adapter, w, h).await;
                    }
                    Err(e) => log::error!("Failed to get adapter: {:?}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {:?}", e),
        }

        setup_keyboard(game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Space Shooter running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: track held keys, fire on every press (repeats included)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.app.screen() != Screen::Playing {
                    return;
                }
                let key = event.key();
                if key.starts_with("Arrow") || key == " " {
                    event.prevent_default();
                }
                if g.keys.key_down(&key) {
                    g.app.fire();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let bind = |id: &str, action: fn(&mut Game)| {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                return;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                action(&mut game.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        };

        bind("start-btn", |g| {
            g.keys.clear();
            g.app.start(js_sys::Date::now() as u64);
        });
        bind("restart-btn", |g| {
            g.keys.clear();
            g.app.restart(js_sys::Date::now() as u64);
        });
        bind("menu-btn", |g| {
            g.keys.clear();
            g.app.main_menu();
        });
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.fit_canvas();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless run: a scripted pilot plays one seeded session
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use space_shooter::platform::{HeldKeys, MemoryStore};
    use space_shooter::sim::{GameEvent, GameState, Viewport};
    use space_shooter::{App, Tuning};

    const FRAME_MS: f64 = 16.0;
    const MAX_FRAMES: u32 = 60 * 180;
    const FIRE_EVERY: u32 = 8;

    /// Steer under the lowest living enemy
    fn steer(session: &GameState) -> HeldKeys {
        let mut keys = HeldKeys::new();
        let target = session
            .enemies()
            .filter(|e| e.is_alive())
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        if let Some(enemy) = target {
            let dx = enemy.pos.x - session.player.pos.x;
            if dx < -4.0 {
                keys.key_down("ArrowLeft");
            } else if dx > 4.0 {
                keys.key_down("ArrowRight");
            }
        }
        keys
    }

    pub fn run(seed: u64) {
        let mut app = App::new(MemoryStore::new(), Tuning::default(), Viewport::new(800.0, 600.0));
        app.start(seed);

        for frame in 0..MAX_FRAMES {
            let Some(keys) = app.session().map(steer) else {
                break;
            };
            if frame % FIRE_EVERY == 0 {
                app.fire();
            }
            if let Some(GameEvent::GameOver { score }) = app.update(FRAME_MS, &keys) {
                log::info!("Pilot lost after {} frames with {} points", frame + 1, score);
                return;
            }
        }

        if let Some(hud) = app.hud() {
            log::info!(
                "Pilot survived: score {}, level {}, health {}",
                hud.score,
                hud.level,
                hud.health
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Space Shooter (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
