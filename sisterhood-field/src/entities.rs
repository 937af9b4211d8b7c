//! The four kinds of decorative objects in the field
//!
//! Each type has a `random` constructor that draws its fields, in
//! declaration order, from an injected random source.

use std::f64::consts::TAU;

use rand::Rng;

use crate::geometry::{Point, ShapeKind};

/// Uniform sample in `[low, low + span)`
fn uniform<R: Rng>(rng: &mut R, low: f64, span: f64) -> f64 {
    low + rng.r#gen::<f64>() * span
}

/// Uniform sample in `[-half_span, half_span)`
fn centered<R: Rng>(rng: &mut R, half_span: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * 2.0 * half_span
}

/// A twinkling background star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// 0 is nearest (largest, most parallax), 1 is farthest
    pub depth: f64,
    /// Selects the color band
    pub tint: f64,
    pub phase: f64,
    pub twinkle_speed: f64,
}

impl Star {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: uniform(rng, 0.0, width),
            y: uniform(rng, 0.0, height),
            depth: rng.r#gen(),
            tint: rng.r#gen(),
            phase: uniform(rng, 0.0, TAU),
            twinkle_speed: uniform(rng, 0.002, 0.003),
        }
    }

    /// Draw radius: nearer stars are bigger
    pub fn radius(&self) -> f64 {
        0.6 + (1.0 - self.depth) * 1.2
    }

    /// Parallax-shifted position at time `t`, wrapped once across each edge
    pub fn position_at(&self, t: f64, width: f64, height: f64) -> Point {
        let parallax = (1.0 - self.depth) * 0.3;
        let mut x = self.x + (t * 0.0004).cos() * parallax * 8.0;
        let mut y = self.y + (t * 0.0003).sin() * parallax * 8.0;

        if x < 0.0 {
            x += width;
        }
        if x > width {
            x -= width;
        }
        if y < 0.0 {
            y += height;
        }
        if y > height {
            y -= height;
        }
        Point::new(x, y)
    }

    /// Twinkle intensity in `[-0.2, 1.0]`
    pub fn twinkle_at(&self, t: f64) -> f64 {
        0.4 + 0.6 * (t * self.twinkle_speed + self.phase).sin()
    }
}

/// A drifting node, linked to its neighbors
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub phase: f64,
    pub pulse_speed: f64,
}

impl Node {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: uniform(rng, 0.0, width),
            y: uniform(rng, 0.0, height),
            vx: centered(rng, 0.04),
            vy: centered(rng, 0.04),
            phase: uniform(rng, 0.0, TAU),
            pulse_speed: uniform(rng, 0.001, 0.002),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Integrate one step and teleport across any edge crossed by more than
    /// `margin`
    pub fn advance(&mut self, width: f64, height: f64, margin: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < -margin {
            self.x = width + margin;
        }
        if self.x > width + margin {
            self.x = -margin;
        }
        if self.y < -margin {
            self.y = height + margin;
        }
        if self.y > height + margin {
            self.y = -margin;
        }
    }

    /// Pulse value in `[0.4, 1.0]`
    pub fn pulse_at(&self, t: f64) -> f64 {
        0.7 + 0.3 * (t * self.pulse_speed + self.phase).sin()
    }
}

/// A slowly rotating pair of concentric ellipses
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRing {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub phase: f64,
}

impl OrbitRing {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            cx: uniform(rng, 0.0, width),
            cy: uniform(rng, 0.0, height),
            radius: uniform(rng, 30.0, 220.0),
            rotation: uniform(rng, 0.0, TAU),
            rotation_speed: centered(rng, 0.0002),
            phase: uniform(rng, 0.0, TAU),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Opacity multiplier in `[0.7, 1.0]`
    pub fn pulse_at(&self, t: f64) -> f64 {
        0.85 + 0.15 * (t * 0.0015 + self.phase).sin()
    }
}

/// A polygon outline spinning in place
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: uniform(rng, 0.0, width),
            y: uniform(rng, 0.0, height),
            size: uniform(rng, 8.0, 16.0),
            rotation: uniform(rng, 0.0, TAU),
            rotation_speed: centered(rng, 0.0001),
            kind: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn random_fields_stay_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let star = Star::random(&mut rng, 800.0, 600.0);
            assert!((0.0..800.0).contains(&star.x));
            assert!((0.0..600.0).contains(&star.y));
            assert!((0.0..1.0).contains(&star.depth));
            assert!((0.002..0.005).contains(&star.twinkle_speed));

            let node = Node::random(&mut rng, 800.0, 600.0);
            assert!((-0.04..=0.04).contains(&node.vx));
            assert!((-0.04..=0.04).contains(&node.vy));
            assert!((0.001..0.003).contains(&node.pulse_speed));

            let ring = OrbitRing::random(&mut rng, 800.0, 600.0);
            assert!((30.0..250.0).contains(&ring.radius));
            assert!(ring.rotation_speed.abs() <= 0.0002);

            let shape = Shape::random(&mut rng, 800.0, 600.0);
            assert!((8.0..24.0).contains(&shape.size));
            assert!(shape.rotation_speed.abs() <= 0.0001);
        }
    }

    #[test]
    fn every_shape_kind_is_generated() {
        let mut rng = rng();
        let kinds: Vec<ShapeKind> = (0..200)
            .map(|_| Shape::random(&mut rng, 100.0, 100.0).kind)
            .collect();
        for kind in ShapeKind::ALL {
            assert!(kinds.contains(&kind), "{kind:?} never generated");
        }
    }

    #[test]
    fn nearer_stars_are_bigger() {
        let mut near = Star::random(&mut rng(), 10.0, 10.0);
        let mut far = near.clone();
        near.depth = 0.1;
        far.depth = 0.9;
        assert!(near.radius() > far.radius());
    }

    #[test]
    fn star_wraps_across_left_edge() {
        let star = Star {
            x: 0.5,
            y: 50.0,
            depth: 0.0,
            tint: 0.0,
            phase: 0.0,
            twinkle_speed: 0.003,
        };
        // cos(t * 0.0004) == -1 pushes the star 2.4px left
        let t = std::f64::consts::PI / 0.0004;
        let p = star.position_at(t, 100.0, 100.0);
        assert!(p.x > 90.0 && p.x <= 100.0, "x = {}", p.x);
    }

    #[test]
    fn star_wraps_across_right_and_bottom_edges() {
        let mut star = Star {
            x: 99.5,
            y: 50.0,
            depth: 0.0,
            tint: 0.0,
            phase: 0.0,
            twinkle_speed: 0.003,
        };
        // At t = 0 the star is pushed 2.4px right
        let p = star.position_at(0.0, 100.0, 100.0);
        assert!((p.x - 1.9).abs() < 1e-9, "x = {}", p.x);
        assert_eq!(p.y, 50.0);

        // sin(t * 0.0003) == 1 pushes the star 2.4px down
        star.x = 50.0;
        star.y = 99.5;
        let t = std::f64::consts::FRAC_PI_2 / 0.0003;
        let p = star.position_at(t, 100.0, 100.0);
        assert!((p.y - 1.9).abs() < 1e-9, "y = {}", p.y);
        assert!((0.0..=100.0).contains(&p.x));
    }

    #[test]
    fn twinkle_swings_around_its_midpoint() {
        let star = Star {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
            tint: 0.0,
            phase: std::f64::consts::FRAC_PI_2,
            twinkle_speed: 0.003,
        };
        assert!((star.twinkle_at(0.0) - 1.0).abs() < 1e-12);
        let trough = std::f64::consts::PI / 0.003;
        assert!((star.twinkle_at(trough) + 0.2).abs() < 1e-9);
    }

    #[test]
    fn node_wraps_to_opposite_edge() {
        let mut node = Node {
            x: -9.99,
            y: 50.0,
            vx: -0.04,
            vy: 0.0,
            phase: 0.0,
            pulse_speed: 0.001,
        };
        node.advance(200.0, 100.0, 10.0);
        assert_eq!(node.x, 210.0);

        node.vx = 0.04;
        node.y = 110.0;
        node.vy = 0.04;
        node.advance(200.0, 100.0, 10.0);
        assert_eq!(node.x, -10.0);
        assert_eq!(node.y, -10.0);
    }

    #[test]
    fn pulses_stay_in_bounds() {
        let mut rng = rng();
        let node = Node::random(&mut rng, 10.0, 10.0);
        let ring = OrbitRing::random(&mut rng, 10.0, 10.0);
        for step in 0..2000 {
            let t = step as f64 * 0.5;
            assert!((0.4 - 1e-12..=1.0 + 1e-12).contains(&node.pulse_at(t)));
            assert!((0.7 - 1e-12..=1.0 + 1e-12).contains(&ring.pulse_at(t)));
        }
    }
}
