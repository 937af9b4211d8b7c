//! The particle field: generation on resize, motion and drawing per tick
//!
//! A [`ParticleField`] owns its drawing surface and random source. The
//! host calls [`ParticleField::resize`] on load and on every viewport resize,
//! and [`ParticleField::tick`] once per animation frame.

use rand::Rng;

use crate::config::{FieldConfig, FieldCounts};
use crate::entities::{Node, OrbitRing, Shape, Star};
use crate::geometry::Point;
use crate::palette::{StarBand, colors};
use crate::surface::Surface;

/// Peak opacity of a link between two touching nodes
const LINK_ALPHA: f64 = 0.12;
const LINK_WIDTH: f64 = 0.6;
const RING_OUTER_WIDTH: f64 = 0.7;
const RING_INNER_WIDTH: f64 = 0.5;
const SHAPE_WIDTH: f64 = 0.8;
const SHAPE_ALPHA: f64 = 0.1;

/// Opacity of the link between two nodes `distance` apart, or `None` if they
/// are too far apart to be linked
///
/// Falls linearly from 0.12 at distance 0 towards 0 as the distance nears
/// `max_distance`; nodes exactly `max_distance` apart are not linked.
pub fn link_alpha(distance: f64, max_distance: f64) -> Option<f64> {
    if distance < max_distance {
        Some(LINK_ALPHA * (1.0 - distance / max_distance))
    } else {
        None
    }
}

/// Animated background of stars, linked nodes, orbit rings and shapes
pub struct ParticleField<S, R> {
    surface: S,
    rng: R,
    config: FieldConfig,
    width: f64,
    height: f64,
    /// Time counter, advanced by `config.time_step` per tick
    time: f64,
    stars: Vec<Star>,
    nodes: Vec<Node>,
    rings: Vec<OrbitRing>,
    shapes: Vec<Shape>,
    /// Scratch buffer for polygon outlines
    outline: Vec<Point>,
}

impl<S: Surface, R: Rng> ParticleField<S, R> {
    /// Create an empty field with the default configuration
    ///
    /// Nothing is generated until the first [`resize`](Self::resize).
    pub fn new(surface: S, rng: R) -> Self {
        Self::with_config(surface, rng, FieldConfig::default())
    }

    /// Create an empty field with a custom configuration
    pub fn with_config(surface: S, rng: R, config: FieldConfig) -> Self {
        Self {
            surface,
            rng,
            config,
            width: 0.0,
            height: 0.0,
            time: 0.0,
            stars: Vec::new(),
            nodes: Vec::new(),
            rings: Vec::new(),
            shapes: Vec::new(),
            outline: Vec::with_capacity(6),
        }
    }

    /// Resize the surface and regenerate every collection from scratch
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.width = f64::from(width);
        self.height = f64::from(height);

        let counts = self.config.counts(width, height);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;

        self.stars.clear();
        self.stars
            .extend((0..counts.stars).map(|_| Star::random(rng, w, h)));
        self.nodes.clear();
        self.nodes
            .extend((0..counts.nodes).map(|_| Node::random(rng, w, h)));
        self.rings.clear();
        self.rings
            .extend((0..counts.rings).map(|_| OrbitRing::random(rng, w, h)));
        self.shapes.clear();
        self.shapes
            .extend((0..counts.shapes).map(|_| Shape::random(rng, w, h)));

        tracing::debug!(width, height, %counts, "regenerated particle field");
    }

    /// Advance one frame: move everything and redraw the whole surface
    pub fn tick(&mut self) {
        self.surface.clear();
        self.draw_stars();
        self.move_nodes();
        self.draw_links();
        self.draw_rings();
        self.draw_shapes();
        self.draw_node_dots();
        self.time += self.config.time_step;
    }

    fn draw_stars(&mut self) {
        let t = self.time;
        for star in &self.stars {
            let center = star.position_at(t, self.width, self.height);
            let color = StarBand::from_tint(star.tint).color(star.twinkle_at(t));
            self.surface.fill_circle(center, star.radius(), color);
        }
    }

    fn move_nodes(&mut self) {
        let margin = self.config.wrap_margin;
        for node in &mut self.nodes {
            node.advance(self.width, self.height, margin);
        }
    }

    /// Link every pair of nodes closer than the link distance
    ///
    /// Plain O(n²) scan; node count is bounded by the area divisor.
    fn draw_links(&mut self) {
        let max = self.config.link_distance;
        for (i, a) in self.nodes.iter().enumerate() {
            let a = a.position();
            for b in &self.nodes[i + 1..] {
                let b = b.position();
                if let Some(alpha) = link_alpha(a.distance(&b), max) {
                    self.surface
                        .stroke_line(a, b, colors::MAGENTA.with_alpha(alpha), LINK_WIDTH);
                }
            }
        }
    }

    fn draw_rings(&mut self) {
        let t = self.time;
        for ring in &mut self.rings {
            ring.rotation += ring.rotation_speed;
            let pulse = ring.pulse_at(t);
            let center = ring.center();

            self.surface.stroke_ellipse(
                center,
                ring.radius,
                ring.radius * 0.6,
                ring.rotation,
                colors::MAGENTA.with_alpha(0.08 * pulse),
                RING_OUTER_WIDTH,
            );
            self.surface.stroke_ellipse(
                center,
                ring.radius * 0.6,
                ring.radius * 0.4,
                ring.rotation,
                colors::BLUSH.with_alpha(0.06 * pulse),
                RING_INNER_WIDTH,
            );
        }
    }

    fn draw_shapes(&mut self) {
        let color = colors::BLUSH.with_alpha(SHAPE_ALPHA);
        for shape in &mut self.shapes {
            shape.rotation += shape.rotation_speed;
            shape
                .kind
                .outline_into(shape.size, shape.center(), shape.rotation, &mut self.outline);
            self.surface
                .stroke_polygon(&self.outline, color, SHAPE_WIDTH);
        }
    }

    /// Dots go last so they sit on top of their links
    fn draw_node_dots(&mut self) {
        let t = self.time;
        for node in &self.nodes {
            let pulse = node.pulse_at(t);
            self.surface.fill_circle(
                node.position(),
                0.8 + pulse * 0.6,
                colors::BLUSH.with_alpha(0.15 + 0.1 * pulse),
            );
        }
    }
}

impl<S, R> ParticleField<S, R> {
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Current surface width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current surface height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current time counter
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn rings(&self) -> &[OrbitRing] {
        &self.rings
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Size of each collection
    pub fn counts(&self) -> FieldCounts {
        FieldCounts {
            stars: self.stars.len(),
            nodes: self.nodes.len(),
            rings: self.rings.len(),
            shapes: self.shapes.len(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tear the field down, handing back the surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}
