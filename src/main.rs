//! Dino Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use dino_dodge::consts::*;
    use dino_dodge::platform::FrameRecorder;
    use dino_dodge::renderer::{Palette, RenderState, Viewport, build_frame};
    use dino_dodge::{Game, Settings, Tuning};

    /// Browser shell around a [`Game`]
    struct App {
        game: Game,
        engine: FrameRecorder,
        render_state: Option<RenderState>,
        overlay: Option<CanvasRenderingContext2d>,
        viewport: Viewport,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(seed: u64, width: u32, height: u32) -> Self {
            Self {
                game: Game::new(seed, Tuning::default(), Settings::load()),
                engine: FrameRecorder::new(),
                render_state: None,
                overlay: None,
                viewport: Viewport::fit(width, height),
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.game.update(&self.engine);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            self.game.draw(&mut self.engine);
            let commands = self.engine.take_commands();
            let palette = Palette::for_settings(self.game.settings.high_contrast);
            let frame = build_frame(&commands, &palette);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&frame.vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = (render_state.config.width, render_state.config.height);
                        render_state.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if let Some(ref ctx) = self.overlay {
                let vp = self.viewport;
                ctx.clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                for text in &frame.texts {
                    let pos = vp.to_surface(text.pos);
                    ctx.set_font(&format!("{}px sans-serif", text.size * vp.scale));
                    ctx.set_fill_style_str(text.color.css());
                    let _ = ctx.fill_text(&text.content, pos.x as f64, pos.y as f64);
                }
                if self.game.settings.show_fps {
                    ctx.set_text_align("left");
                    ctx.set_font(&format!("{}px monospace", 14.0 * vp.scale));
                    ctx.set_fill_style_str("white");
                    let corner = vp.to_surface(glam::Vec2::new(8.0, 12.0));
                    let _ = ctx.fill_text(
                        &format!("{} fps", self.fps),
                        corner.x as f64,
                        corner.y as f64,
                    );
                }
            }
        }
    }

    fn overlay_context(
        document: &web_sys::Document,
        width: u32,
        height: u32,
    ) -> Option<CanvasRenderingContext2d> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("overlay")?
            .dyn_into()
            .ok()?;
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger already set: {}", e).into());
        }

        log::info!("Dino Dodge starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, width, height)));
        log::info!("Game initialized with seed: {}", seed);

        app.borrow_mut().overlay = overlay_context(&document, width, height);
        if app.borrow().overlay.is_none() {
            log::warn!("No #overlay canvas, text will not be shown");
        }

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(app.clone())?;
        request_animation_frame(app);

        log::info!("Dino Dodge running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().engine.keyboard.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().engine.keyboard.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur (click outside) drops held keys so the dino stops
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().engine.keyboard.release_all();
                log::debug!("Released keys (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt, time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dino Dodge (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = load_tuning();
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    headless_demo(seed, tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Wave table from the file named by `DINO_DODGE_TUNING`, falling back to
/// the built-in table
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> dino_dodge::Tuning {
    use dino_dodge::Tuning;

    let Ok(path) = std::env::var("DINO_DODGE_TUNING") else {
        return Tuning::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(tuning) => {
            log::info!("Loaded {} waves from {}", tuning.wave_count(), path);
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

/// Play one scripted run with a recording engine and report the outcome
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(seed: u64, tuning: dino_dodge::Tuning) {
    use dino_dodge::platform::{FrameRecorder, LogicalKey};
    use dino_dodge::renderer::{Palette, build_frame};
    use dino_dodge::sim::GamePhase;
    use dino_dodge::{Game, Settings};

    const MAX_TICKS: u32 = 60 * 60 * 5;

    let mut game = Game::new(seed, tuning, Settings::load());
    let mut engine = FrameRecorder::new();
    let palette = Palette::for_settings(game.settings.high_contrast);

    engine.keyboard.press(LogicalKey::Start);
    game.frame(&mut engine);
    engine.keyboard.release(LogicalKey::Start);

    let mut ticks = 0;
    let mut vertices = 0;
    while game.state.is_running && ticks < MAX_TICKS {
        // Sweep back and forth across the ground, hopping now and then
        let heading_right = (ticks / 100) % 2 == 0;
        if heading_right {
            engine.keyboard.press(LogicalKey::Right);
            engine.keyboard.release(LogicalKey::Left);
        } else {
            engine.keyboard.press(LogicalKey::Left);
            engine.keyboard.release(LogicalKey::Right);
        }
        if ticks % 45 == 0 {
            engine.keyboard.press(LogicalKey::Jump);
        } else {
            engine.keyboard.release(LogicalKey::Jump);
        }

        game.frame(&mut engine);
        vertices = build_frame(&engine.take_commands(), &palette).vertices.len();
        ticks += 1;
    }

    let state = &game.state;
    let outcome = match state.phase {
        GamePhase::Won => "survived",
        GamePhase::Lost => "died",
        _ => "timed out",
    };
    log::info!("Last frame had {} vertices", vertices);
    println!(
        "Seed {}: {} after {} ticks on wave {}/{} with score {} and {} lives",
        seed,
        outcome,
        ticks,
        (state.wave_index + 1).min(state.wave_count()),
        state.wave_count(),
        state.score,
        state.lives,
    );
}
