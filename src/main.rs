//! Tiny Platformer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use tiny_platformer::renderer::{RenderState, scene};
    use tiny_platformer::sim::{GameState, InputEvent, InputSource, InputState, tick};
    use tiny_platformer::{Tuning, clamp_viewport};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(viewport: (u32, u32), tuning: &Tuning) -> Self {
            Self {
                state: GameState::with_tuning(viewport, tuning),
                input: InputState::new(),
                render_state: None,
            }
        }

        /// Single entry point for every input source
        fn handle_input(&mut self, source: InputSource, key: &str, pressed: bool) {
            let event = InputEvent::new(source, key, pressed);
            if let Some(action) = self.input.apply(&event) {
                log::trace!("{:?} {:?} -> {}", source, action, pressed);
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.state.set_viewport(width, height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }

        /// Advance the simulation one frame
        fn update(&mut self) {
            tick(&mut self.state, &self.input);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene::build(&self.state, &self.input);
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
    }

    /// Canvas size for the current window, capped at 800x600
    fn viewport_size(window: &web_sys::Window) -> (u32, u32) {
        let inner = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        clamp_viewport(inner(window.inner_width()), inner(window.inner_height()))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tiny Platformer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = Tuning::load();
        let game = Rc::new(RefCell::new(Game::new((width, height), &tuning)));

        // Initialize WebGPU (WebGL fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_touch_buttons(&document, game.clone());
        setup_inventory(&document);
        setup_resize(canvas, game.clone());
        setup_blur(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Tiny Platformer running at {}x{}", width, height);
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut()
                    .handle_input(InputSource::Keyboard, &event.key(), pressed);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen d-pad and action buttons. Each carries its key in `data-key`.
    fn setup_touch_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let Ok(buttons) = document.query_selector_all(".d-btn, .action-btn") else {
            return;
        };

        for i in 0..buttons.length() {
            let Some(btn) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(key) = btn.get_attribute("data-key") else {
                log::warn!("Touch button without data-key");
                continue;
            };

            // Touch (mobile); prevent the synthetic mouse events that follow
            for (event_name, pressed) in [("touchstart", true), ("touchend", false)] {
                let game = game.clone();
                let key = key.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut()
                        .handle_input(InputSource::Touch, &key, pressed);
                });
                let _ = btn
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            // Mouse (desktop debugging); leaving the button counts as release
            for (event_name, pressed) in
                [("mousedown", true), ("mouseup", false), ("mouseleave", false)]
            {
                let game = game.clone();
                let key = key.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut()
                        .handle_input(InputSource::Mouse, &key, pressed);
                });
                let _ = btn
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Inventory modal open/close buttons
    fn setup_inventory(document: &Document) {
        let Some(modal) = document.get_element_by_id("inventory-modal") else {
            return;
        };

        for (button_id, hidden) in [("inventory-btn", false), ("close-inv", true)] {
            let Some(btn) = document.get_element_by_id(button_id) else {
                continue;
            };
            let modal = modal.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let classes = modal.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
            log::debug!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Release everything when focus leaves, so no key stays stuck down
    fn setup_blur(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().input.release_all();
            log::debug!("Window blur, inputs released");
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tiny Platformer (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run a scripted session without a renderer and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use tiny_platformer::sim::{Action, GameEvent, GameState, InputState, tick};
    use tiny_platformer::{Tuning, consts};

    let tuning = Tuning::load();
    let mut state = GameState::with_tuning(
        (consts::MAX_VIEWPORT_WIDTH, consts::MAX_VIEWPORT_HEIGHT),
        &tuning,
    );
    let mut input = InputState::new();
    input.set(Action::Right, true);

    // Run right, hopping every second, until the player falls off the far end
    for frame in 0..600u32 {
        input.set(Action::Jump, frame % 60 == 0);
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::Landed(i) => log::info!("frame {}: landed on platform {}", frame, i),
                other => log::info!("frame {}: {:?}", frame, other),
            }
        }
        if state.events.contains(&GameEvent::Respawned) {
            break;
        }
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }
}
