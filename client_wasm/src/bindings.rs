//! Exported entry points

use std::cell::RefCell;
use std::rc::Rc;

use game_core::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasSurface;
use crate::frame::{request_frame, Running};
use crate::input::{attach_pointer, PointerListener};
use crate::session::{Session, SessionSlot};

thread_local! {
    // The game attached to this page, for the exported bindings
    static SESSION: RefCell<SessionSlot<PointerListener>> = RefCell::new(SessionSlot::new());
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))
}

/// Start a game on the canvas with the given id. The canvas's own size is
/// the play surface.
#[wasm_bindgen]
pub fn start_game(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second start on the same page finds the logger already installed
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialized");
    }

    stop_game();

    let canvas = find_canvas(canvas_id)?;
    let mut surface = CanvasSurface::from_canvas(&canvas)?;

    let config = Config::with_surface(canvas.width() as f32, canvas.height() as f32);
    let sim = Simulation::new(config, GameRng::from_entropy())
        .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e)))?;
    let listener = attach_pointer(&canvas, sim.pointer())?;

    let game = GameLoop::new(sim);
    let session = Session::new(game.stop_handle(), listener);
    SESSION.with(|slot| slot.borrow_mut().replace(session));

    game.start(&mut surface);
    if let Err(e) = request_frame(Rc::new(RefCell::new(Running { game, surface }))) {
        stop_game();
        return Err(e);
    }

    log::info!(
        "Pong running on '{}' ({}x{})",
        canvas_id,
        canvas.width(),
        canvas.height()
    );
    Ok(())
}

/// Stop the running game after its current tick and remove its listeners
#[wasm_bindgen]
pub fn stop_game() {
    if SESSION.with(|slot| slot.borrow_mut().end()) {
        log::info!("Pong stopped");
    }
}

/// Forget the current game if its loop has already ended on its own
pub(crate) fn release_stopped() {
    SESSION.with(|slot| slot.borrow_mut().release_if_stopped());
}
