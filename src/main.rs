//! Blastgrid entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use blastgrid::renderer::{self, canvas::CanvasRenderer};
    use blastgrid::sim::{GameState, fire_at, tick};

    /// Keys the game consumes; default browser actions are suppressed
    const GAME_KEYS: [&str; 9] = [
        "w",
        "a",
        "s",
        "d",
        "arrowup",
        "arrowdown",
        "arrowleft",
        "arrowright",
        " ",
    ];

    /// Game instance owned by the frame loop
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Blastgrid starting...");

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        fit_canvas_to_container(&canvas);
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let seed = js_sys::Date::now() as u64;
        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, width, height),
            renderer,
        }));

        log::info!("Game initialized with seed: {seed} ({width}x{height})");

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Blastgrid running!");
    }

    /// Size the canvas to its container, if one exists.
    fn fit_canvas_to_container(canvas: &HtmlCanvasElement) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(container) = document.get_element_by_id("gameContainer") {
            if let Ok(container) = container.dyn_into::<HtmlElement>() {
                let rect = container.get_bounding_client_rect();
                canvas.set_width(rect.width() as u32);
                canvas.set_height(rect.height() as u32);
            }
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key().to_lowercase();
                if GAME_KEYS.contains(&key.as_str()) {
                    event.prevent_default();
                }
                game.borrow_mut().state.input.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().state.input.key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click to fire, translated into canvas-local coordinates
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                fire_at(&mut game.borrow_mut().state, Vec2::new(x, y));
                log::debug!("fire at ({x:.0}, {y:.0})");
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window resize: refit the canvas and re-clamp the player
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                fit_canvas_to_container(&canvas_clone);
                let width = canvas_clone.width() as f32;
                let height = canvas_clone.height() as f32;
                game.borrow_mut().state.resize(width, height);
                log::info!("Canvas resized to {width}x{height}");
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            tick(&mut g.state);
            let cmds = renderer::draw_frame(&g.state, time);
            g.renderer.submit(&cmds);
        }

        request_animation_frame(game);
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
    log::info!("Blastgrid (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    // Headless smoke run of the simulation
    println!("\nRunning headless simulation...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use blastgrid::sim::{GameState, fire_at, tick};
    use glam::Vec2;

    let mut state = GameState::new(42, 800.0, 600.0);
    let target = state.player.pos + Vec2::new(10.0, 0.0);
    fire_at(&mut state, target);
    assert_eq!(state.projectiles.len(), 1);

    for _ in 0..120 {
        tick(&mut state);
    }
    assert!(state.projectiles.is_empty(), "projectile should expire");
    assert!(state.particles.is_empty(), "particles should expire");
    println!("✓ Headless simulation ok!");
}
