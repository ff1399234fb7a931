//! Canvas 2D drawing target

use game_core::{Aabb, LineStyle, Surface};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: Aabb, color: &str) {
        let size = rect.size();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        // Dash and stroke settings are scoped to this line
        self.ctx.save();

        self.ctx.set_stroke_style_str(style.color);
        self.ctx.set_line_width(style.width as f64);
        let dash: js_sys::Array = style
            .dash
            .iter()
            .map(|&len| JsValue::from_f64(len as f64))
            .collect();
        if let Err(e) = self.ctx.set_line_dash(&dash) {
            log::warn!("Failed to set line dash: {:?}", e);
        }

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();

        self.ctx.restore();
    }
}
