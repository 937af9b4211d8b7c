//! Points and polygon outlines
//!
//! Shape vertices are placed trigonometrically from the shape's size each
//! frame rather than stored.

use std::f64::consts::TAU;

use serde::Serialize;

/// sin(60°), half the width of a unit equilateral triangle
const SIN_60: f64 = 0.866;

/// A point on the drawing surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate about the origin by `angle` radians, then translate by `offset`
    pub fn rotate_translate(&self, angle: f64, offset: Point) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point {
            x: self.x * cos - self.y * sin + offset.x,
            y: self.x * sin + self.y * cos + offset.y,
        }
    }
}

/// The three outline kinds a shape can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Triangle,
    Square,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Hexagon];

    /// Number of vertices in the outline
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Square => 4,
            ShapeKind::Hexagon => 6,
        }
    }

    /// Fill `out` with the outline of this kind, sized `size`, rotated by
    /// `rotation` and centered on `center`.
    ///
    /// `out` is cleared first so callers can reuse one buffer across shapes.
    pub fn outline_into(self, size: f64, center: Point, rotation: f64, out: &mut Vec<Point>) {
        out.clear();
        let place = |p: Point| p.rotate_translate(rotation, center);

        match self {
            ShapeKind::Triangle => {
                out.push(place(Point::new(0.0, -size)));
                out.push(place(Point::new(size * SIN_60, size * 0.5)));
                out.push(place(Point::new(-size * SIN_60, size * 0.5)));
            }
            ShapeKind::Square => {
                let half = size / 2.0;
                out.push(place(Point::new(-half, -half)));
                out.push(place(Point::new(half, -half)));
                out.push(place(Point::new(half, half)));
                out.push(place(Point::new(-half, half)));
            }
            ShapeKind::Hexagon => {
                for i in 0..6 {
                    let angle = (i as f64 / 6.0) * TAU;
                    out.push(place(Point::new(angle.cos() * size, angle.sin() * size)));
                }
            }
        }
    }
}
