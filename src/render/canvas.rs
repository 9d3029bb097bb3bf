//! Browser backend over `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Glow, Surface};
use crate::error::{FieldError, Result};
use crate::theme::Rgba;

pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Acquire the 2D context of a canvas
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FieldError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| FieldError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::SurfaceUnavailable("context is not 2d".into()))?;
        Ok(Self { canvas, ctx })
    }

    fn try_fill_glow(&self, glow: &Glow) -> std::result::Result<(), wasm_bindgen::JsValue> {
        let (x, y, r) = (glow.x as f64, glow.y as f64, glow.radius as f64);
        let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
        for stop in &glow.stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

impl Surface for Canvas2dSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_glow(&mut self, glow: &Glow) {
        // A rejected gradient or arc only loses this disc for this frame
        if let Err(e) = self.try_fill_glow(glow) {
            trace!(?e, "Glow skipped");
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
    }
}
