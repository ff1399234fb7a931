//! requestAnimationFrame driver
//!
//! Each callback runs exactly one tick and schedules the next callback only
//! after that tick has finished, so ticks never overlap.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{GameLoop, LoopControl};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::canvas::CanvasSurface;

pub struct Running {
    pub game: GameLoop,
    pub surface: CanvasSurface,
}

pub fn request_frame(running: Rc<RefCell<Running>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let callback = Closure::once_into_js(move |_time: f64| run_frame(running));
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

fn run_frame(running: Rc<RefCell<Running>>) {
    let control = {
        let mut state = running.borrow_mut();
        let Running { game, surface } = &mut *state;
        game.tick(surface)
    };

    if control == LoopControl::Stop {
        return;
    }
    if let Err(e) = request_frame(Rc::clone(&running)) {
        log::error!("Cannot schedule next frame, stopping: {:?}", e);
        running.borrow().game.stop_handle().stop();
        crate::bindings::release_stopped();
    }
}
