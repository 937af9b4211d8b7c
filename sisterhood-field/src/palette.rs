//! Color types and the fixed palette of the background field
//!
//! All drawing goes through [`Rgba`], which renders to the CSS
//! `rgba(r, g, b, a)` syntax understood by both the 2D canvas and SVG.

use std::fmt;

use serde::Serialize;

/// An RGB color with fractional alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`
    pub a: f64,
}

impl Rgba {
    /// Create a color from channels and alpha
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Palette constants (alpha left at 1.0, set per draw)
pub mod colors {
    use super::Rgba;

    /// Near-white (#FFF8FB)
    pub const BLUSH: Rgba = Rgba::new(255, 248, 251, 1.0);

    /// Magenta (#FF0079)
    pub const MAGENTA: Rgba = Rgba::new(255, 0, 121, 1.0);

    /// Cyan (#00FFFF)
    pub const CYAN: Rgba = Rgba::new(0, 255, 255, 1.0);
}

/// One of the three star color bands, selected by tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarBand {
    Blush,
    Magenta,
    Cyan,
}

impl StarBand {
    /// Band for a tint value in `[0, 1)`
    pub fn from_tint(tint: f64) -> Self {
        if tint < 0.65 {
            StarBand::Blush
        } else if tint < 0.85 {
            StarBand::Magenta
        } else {
            StarBand::Cyan
        }
    }

    /// Fill color for this band at the given twinkle intensity
    pub fn color(self, twinkle: f64) -> Rgba {
        match self {
            StarBand::Blush => colors::BLUSH.with_alpha(0.12 + 0.18 * twinkle),
            StarBand::Magenta => colors::MAGENTA.with_alpha(0.1 + 0.15 * twinkle),
            StarBand::Cyan => colors::CYAN.with_alpha(0.08 + 0.12 * twinkle),
        }
    }
}
