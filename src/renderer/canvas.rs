//! Canvas 2D backend (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCommand, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2D canvas context not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the element's layout box; returns the new size
    pub fn fit_to_client(&self) -> (f32, f32) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        (width as f32, height as f32)
    }

    fn execute(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { color } => {
                let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
                ctx.clear_rect(0.0, 0.0, w, h);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, w, h);
            }
            DrawCommand::Rect { pos, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Text {
                text,
                pos,
                color,
                font,
            } => {
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn draw(&mut self, command: &DrawCommand) {
        if let Err(e) = self.execute(command) {
            log::warn!("Canvas draw failed: {:?}", e);
        }
    }
}
