//! Canvas 2D submission
//!
//! Executes a composed frame against the browser's 2D context. All state
//! lives in the command list; this layer only translates primitives into
//! context calls.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::DrawCmd;

/// Wraps the 2D context of the game canvas.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Submit one frame's primitives in list order (back to front).
    pub fn submit(&self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            match cmd {
                DrawCmd::FillRect { x, y, w, h, color } => {
                    self.ctx.set_fill_style_str(&color.to_string());
                    self.ctx
                        .fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                DrawCmd::StrokeRect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    line_width,
                } => {
                    self.ctx.set_stroke_style_str(&color.to_string());
                    self.ctx.set_line_width(*line_width as f64);
                    self.ctx
                        .stroke_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                DrawCmd::FillCircle {
                    x,
                    y,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.to_string());
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU);
                    self.ctx.fill();
                }
                DrawCmd::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    line_width,
                } => {
                    self.ctx.set_stroke_style_str(&color.to_string());
                    self.ctx.set_line_width(*line_width as f64);
                    self.ctx.begin_path();
                    self.ctx.move_to(*x1 as f64, *y1 as f64);
                    self.ctx.line_to(*x2 as f64, *y2 as f64);
                    self.ctx.stroke();
                }
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    color,
                    font,
                } => {
                    self.ctx.set_fill_style_str(&color.to_string());
                    self.ctx.set_font(font);
                    let _ = self.ctx.fill_text(text, *x as f64, *y as f64);
                }
            }
        }
    }
}
