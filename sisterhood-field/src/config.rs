//! Tunables for the particle field
//!
//! Defaults reproduce the site's background exactly. Every field is optional
//! when deserializing, so a config file only needs the values it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`FieldConfig::validate`]
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// An area divisor was zero
    #[error("area divisor for {0} must be greater than zero")]
    ZeroDivisor(&'static str),

    /// Link distance was zero, negative or not finite
    #[error("link distance must be a positive finite number, got {0}")]
    InvalidLinkDistance(f64),

    /// Wrap margin was negative or not finite
    #[error("wrap margin must be a non-negative finite number, got {0}")]
    InvalidWrapMargin(f64),

    /// Time step was zero, negative or not finite
    #[error("time step must be a positive finite number, got {0}")]
    InvalidTimeStep(f64),
}

/// Configuration for the particle field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Viewport area (px²) per star
    pub star_area: u64,
    /// Viewport area (px²) per node
    pub node_area: u64,
    /// Viewport area (px²) per orbit ring
    pub ring_area: u64,
    /// Viewport area (px²) per shape
    pub shape_area: u64,
    /// Nodes closer than this are linked
    pub link_distance: f64,
    /// How far a node may drift past an edge before it wraps
    pub wrap_margin: f64,
    /// Time added per tick
    pub time_step: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_area: 14_000,
            node_area: 8_000,
            ring_area: 90_000,
            shape_area: 200_000,
            link_distance: 170.0,
            wrap_margin: 10.0,
            time_step: 0.5,
        }
    }
}

impl FieldConfig {
    /// Check that every value can drive a field
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, area) in [
            ("stars", self.star_area),
            ("nodes", self.node_area),
            ("rings", self.ring_area),
            ("shapes", self.shape_area),
        ] {
            if area == 0 {
                return Err(ConfigError::ZeroDivisor(name));
            }
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return Err(ConfigError::InvalidLinkDistance(self.link_distance));
        }
        if !(self.wrap_margin.is_finite() && self.wrap_margin >= 0.0) {
            return Err(ConfigError::InvalidWrapMargin(self.wrap_margin));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.time_step));
        }
        Ok(())
    }

    /// Object counts for a viewport of the given size
    pub fn counts(&self, width: u32, height: u32) -> FieldCounts {
        let area = u64::from(width) * u64::from(height);
        FieldCounts {
            stars: (area / self.star_area.max(1)) as usize,
            nodes: (area / self.node_area.max(1)) as usize,
            rings: (area / self.ring_area.max(1)) as usize,
            shapes: (area / self.shape_area.max(1)) as usize,
        }
    }
}

/// Number of objects in each collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldCounts {
    pub stars: usize,
    pub nodes: usize,
    pub rings: usize,
    pub shapes: usize,
}

impl FieldCounts {
    /// Total objects across all collections
    pub fn total(&self) -> usize {
        self.stars + self.nodes + self.rings + self.shapes
    }
}

impl std::fmt::Display for FieldCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stars={} nodes={} rings={} shapes={}",
            self.stars, self.nodes, self.rings, self.shapes
        )
    }
}
