use std::f64::consts::TAU;

use drift_core::{CompositeMode, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context. Individual draw errors are
/// swallowed; the drawing contract assumes the surface always succeeds.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        let op = match mode {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        };
        let _ = self.ctx.set_global_composite_operation(op);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}
