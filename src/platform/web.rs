//! Browser glue: mount a game on a canvas element
//!
//! Listeners only write input flags or record a pending resize; the
//! animation-frame callback is the single place the game is advanced.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, KeyboardEvent, Window};

use crate::game::Game;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

type FrameCallback = Closure<dyn FnMut(f64)>;
type Listener = Closure<dyn FnMut(Event)>;
type PendingResize = Rc<Cell<Option<(f32, f32)>>>;

/// Everything that must be released on teardown
struct Mounted {
    window: Window,
    game: Rc<RefCell<Game>>,
    surface: Rc<RefCell<CanvasSurface>>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    listeners: Vec<(&'static str, Listener)>,
}

impl Mounted {
    fn listen(
        &mut self,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let listener = Listener::new(handler);
        self.window
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push((event, listener));
        Ok(())
    }

    fn wire_input(&mut self) -> Result<(), JsValue> {
        let input = self.game.borrow().input();
        self.listen("keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                if input.dom_key_down(&event.key(), event.repeat()) {
                    event.prevent_default();
                }
            }
        })?;

        let input = self.game.borrow().input();
        self.listen("keyup", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                input.dom_key_up(&event.key());
            }
        })?;

        // Key-ups are lost while the page is unfocused
        let input = self.game.borrow().input();
        self.listen("blur", move |_event| input.release_all())?;
        Ok(())
    }

    fn wire_resize(&mut self, pending: PendingResize) -> Result<(), JsValue> {
        let surface = self.surface.clone();
        self.listen("resize", move |_event| {
            pending.set(Some(surface.borrow().fit_to_client()));
        })
    }

    fn start_loop(&mut self, pending: PendingResize) -> Result<(), JsValue> {
        let window = self.window.clone();
        let game = self.game.clone();
        let surface = self.surface.clone();
        let frame = self.frame.clone();
        let frame_id = self.frame_id.clone();

        let callback = FrameCallback::new(move |time: f64| {
            frame_id.set(None);
            if let Some((width, height)) = pending.take() {
                game.borrow_mut().resize(width, height);
            }
            let running = game.borrow_mut().frame(time, &mut *surface.borrow_mut());
            if !running {
                return;
            }
            if let Err(e) = schedule(&window, &frame, &frame_id) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        });
        *self.frame.borrow_mut() = Some(callback);

        schedule(&self.window, &self.frame, &self.frame_id)
    }

    fn teardown(self) {
        self.game.borrow_mut().dispose();
        if let Some(id) = self.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        // Dropping the callback also breaks its reference to itself
        self.frame.borrow_mut().take();
        for (event, listener) in &self.listeners {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                log::warn!("removeEventListener({}) failed: {:?}", event, e);
            }
        }
    }
}

fn schedule(
    window: &Window,
    frame: &RefCell<Option<FrameCallback>>,
    frame_id: &Cell<Option<i32>>,
) -> Result<(), JsValue> {
    if let Some(callback) = frame.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        frame_id.set(Some(id));
    }
    Ok(())
}

fn wire(mounted: &mut Mounted, pending: PendingResize) -> Result<(), JsValue> {
    mounted.wire_input()?;
    mounted.wire_resize(pending.clone())?;
    mounted.start_loop(pending)
}

/// A mounted game. Call `dispose()` when the host component unmounts.
#[wasm_bindgen]
pub struct GameHandle {
    mounted: RefCell<Option<Mounted>>,
}

#[wasm_bindgen]
impl GameHandle {
    /// Stop the frame loop and detach every listener. Idempotent.
    pub fn dispose(&self) {
        if let Some(mounted) = self.mounted.borrow_mut().take() {
            mounted.teardown();
        }
    }

    /// Current phase name, for host-side debugging
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> Option<String> {
        self.mounted
            .borrow()
            .as_ref()
            .map(|m| format!("{:?}", m.game.borrow().state().phase))
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Mount a game on the canvas with id `canvas_id`.
///
/// `config_json` configures this instance only; without it (or if it does
/// not parse) the defaults are used.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, config_json: Option<String>) -> Result<GameHandle, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
        .dyn_into()?;

    let settings = Settings::from_props(config_json.as_deref());

    let surface = CanvasSurface::new(canvas)?;
    let (width, height) = surface.fit_to_client();
    let game = Game::new(settings, width, height);

    let mut mounted = Mounted {
        window,
        game: Rc::new(RefCell::new(game)),
        surface: Rc::new(RefCell::new(surface)),
        frame: Rc::new(RefCell::new(None)),
        frame_id: Rc::new(Cell::new(None)),
        listeners: Vec::new(),
    };

    let pending: PendingResize = Rc::new(Cell::new(None));
    if let Err(e) = wire(&mut mounted, pending) {
        log::error!("Mount failed: {:?}", e);
        mounted.teardown();
        return Err(e);
    }

    log::info!("Brick breaker mounted on #{} ({}x{})", canvas_id, width, height);
    Ok(GameHandle {
        mounted: RefCell::new(Some(mounted)),
    })
}
