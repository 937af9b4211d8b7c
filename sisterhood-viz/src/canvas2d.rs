//! 2D Canvas drawing surface
//!
//! Implements the field's [`Surface`] over an HTML canvas.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use sisterhood_field::{Point, Rgba, Surface};

/// Drawing surface backed by a `<canvas>` element
pub struct Canvas2DSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2DSurface {
    /// Create surface from canvas element
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or("2d context not available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx })
    }

    fn set_stroke(&self, color: Rgba, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
    }
}

impl Surface for Canvas2DSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        // arc only fails for negative radii
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.set_stroke(color, line_width);
        self.ctx.stroke();
    }

    fn stroke_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        color: Rgba,
        line_width: f64,
    ) {
        self.ctx.begin_path();
        self.ctx
            .ellipse(
                center.x,
                center.y,
                radius_x,
                radius_y,
                rotation,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.set_stroke(color, line_width);
        self.ctx.stroke();
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, line_width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.set_stroke(color, line_width);
        self.ctx.stroke();
    }
}
