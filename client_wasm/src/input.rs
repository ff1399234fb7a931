//! Mouse input handling

use std::sync::Arc;

use game_core::systems::surface_local_y;
use game_core::PointerSlot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::session::Detach;

/// A `mousemove` listener on a canvas, removed again on detach or drop
pub struct PointerListener {
    canvas: HtmlCanvasElement,
    closure: Option<Closure<dyn FnMut(MouseEvent)>>,
}

/// Forward every mousemove over the canvas into the pointer slot. The
/// listener only records the position; the next tick applies it.
pub fn attach_pointer(
    canvas: &HtmlCanvasElement,
    pointer: Arc<PointerSlot>,
) -> Result<PointerListener, JsValue> {
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        pointer.store(surface_local_y(event.client_y() as f32, rect.top() as f32));
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;

    Ok(PointerListener {
        canvas: canvas.clone(),
        closure: Some(closure),
    })
}

impl Detach for PointerListener {
    fn detach(&mut self) {
        let Some(closure) = self.closure.take() else {
            return;
        };
        if let Err(e) = self
            .canvas
            .remove_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove mousemove listener: {:?}", e);
        }
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        // A dropped Closure must never stay registered
        self.detach();
    }
}
