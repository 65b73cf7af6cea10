//! Sweater Spots entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sweater_spots::Settings;
    use sweater_spots::audio::{AudioManager, SoundEffect};
    use sweater_spots::platform::PointerEvent;
    use sweater_spots::renderer::{AnimationPhase, CanvasSurface, render_frame};
    use sweater_spots::sim::Game;

    /// Game instance holding all state
    struct App {
        game: Game,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        audio: AudioManager,
        phase: AnimationPhase,
        settings: Settings,
        last_time: f64,
    }

    impl App {
        /// Advance the simulation by the time since the previous frame
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                Duration::from_secs_f64(((time - self.last_time) / 1000.0).max(0.0))
            } else {
                Duration::ZERO
            };
            self.last_time = time;

            self.game.tick(self.settings.clamp_frame(dt));
            self.play_events();
        }

        /// Render the current frame
        fn render(&mut self) {
            render_frame(
                &mut self.surface,
                self.game.state(),
                self.game.layout(),
                &mut self.phase,
            );
        }

        fn pointer(&mut self, event: PointerEvent) {
            let rect = self.canvas.get_bounding_client_rect();
            let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
            self.game.pointer(event.surface_point(origin));
            self.play_events();
        }

        fn play_events(&mut self) {
            for event in self.game.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sweater Spots starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the window
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let Some(surface) = CanvasSurface::new(canvas.clone(), "") else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, width as f32, height as f32),
            surface,
            canvas: canvas.clone(),
            audio: AudioManager::new(settings.effective_volume()),
            phase: AnimationPhase::default(),
            settings,
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Sweater Spots running!");
    }

    fn first_touch(event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                app.borrow_mut().pointer(PointerEvent::MouseMove(client));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(client) = first_touch(&event) {
                    app.borrow_mut().pointer(PointerEvent::TouchMove(client));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(client) = first_touch(&event) {
                    app.borrow_mut().pointer(PointerEvent::TouchStart(client));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "r" | "R" => {
                        a.game.reset();
                        log::info!("Game reset");
                    }
                    "m" | "M" => {
                        let muted = a.settings.toggle_mute();
                        let volume = a.settings.effective_volume();
                        a.audio.set_volume(volume);
                        a.settings.save();
                        log::info!("Sound {}", if muted { "muted" } else { "on" });
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sweater Spots (native) starting...");
    log::info!("Native mode is a headless autoplay - run with `trunk serve` for the web version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = sweater_spots::Settings::load_from(path.as_deref());
    autoplay(&settings, 180);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Sweep a virtual pointer over the garment for `seconds` of game time
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(settings: &sweater_spots::Settings, seconds: u64) {
    use std::time::Duration;

    use glam::Vec2;
    use sweater_spots::platform::PointerEvent;
    use sweater_spots::sim::{Game, GameEvent};

    const FRAME: Duration = Duration::from_millis(16);

    let seed = settings.seed.unwrap_or(0x5eed);
    let mut game = Game::new(seed, 1280.0, 720.0);
    let region = game.layout().spawn_region;
    let frames = seconds * 1000 / FRAME.as_millis() as u64;
    let mut pops = 0u64;

    for frame in 0..frames {
        game.tick(settings.clamp_frame(FRAME));

        // Lissajous sweep covering the spawn region
        let t = frame as f32 * 0.05;
        let sweep = Vec2::new(0.5 + 0.5 * (t * 1.3).sin(), 0.5 + 0.5 * (t * 0.7).sin());
        let event = PointerEvent::MouseMove(region.lerp(sweep) + Vec2::splat(10.0));
        game.pointer(event.surface_point(Vec2::ZERO));

        for event in game.drain_events() {
            match event {
                GameEvent::SpotRemoved { .. } => pops += 1,
                GameEvent::LevelCleared { level } => {
                    println!("{:>6.1}s  level {} cleared", frame as f32 * 0.016, level)
                }
                GameEvent::LevelStarted { level } => {
                    println!("{:>6.1}s  level {} started", frame as f32 * 0.016, level)
                }
            }
        }
    }

    let state = game.state();
    println!(
        "\nAfter {}s: level {}, {} cleared this level, {} spots on the sweater, {} pops",
        seconds,
        state.level(),
        state.cleared,
        state.spots.len(),
        pops
    );
}
