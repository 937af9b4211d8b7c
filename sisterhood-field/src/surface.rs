//! Drawing surface abstraction
//!
//! The field never talks to a canvas directly. It draws through [`Surface`],
//! which the browser binding implements over `CanvasRenderingContext2d` and
//! which [`Recorder`] implements by capturing commands for tests and for
//! headless export.

use serde::Serialize;

use crate::geometry::Point;
use crate::palette::Rgba;

/// The 2D drawing primitives the field needs
pub trait Surface {
    /// Resize the backing raster to `width × height` pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface
    fn clear(&mut self);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Stroke a straight line segment
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64);

    /// Stroke an ellipse rotated by `rotation` radians about its center
    fn stroke_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        color: Rgba,
        line_width: f64,
    );

    /// Stroke a closed polygon through `points`
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, line_width: f64);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        line_width: f64,
    },
    Ellipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        color: Rgba,
        line_width: f64,
    },
    Polygon {
        points: Vec<Point>,
        color: Rgba,
        line_width: f64,
    },
}

/// Surface that records every call since the last clear
///
/// Only the current frame is kept: [`Surface::clear`] drops earlier commands,
/// mirroring what a real raster would show.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current surface width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current surface height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Commands drawn since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface has been cleared
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recorded lines in the current frame
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for Recorder {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
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
        self.commands.push(DrawCommand::Ellipse {
            center,
            radius_x,
            radius_y,
            rotation,
            color,
            line_width,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            line_width,
        });
    }
}
