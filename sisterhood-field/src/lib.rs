//! Decorative particle field renderer
//!
//! Draws a continuously animated background of twinkling stars, drifting
//! linked nodes, rotating orbit rings and spinning polygon outlines. The
//! crate is platform independent: drawing goes through [`Surface`], timing
//! through [`FrameSource`], and randomness through any [`rand::Rng`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sisterhood_field::{FixedFrames, ParticleField, Recorder, run};
//!
//! let mut field = ParticleField::new(Recorder::new(), StdRng::seed_from_u64(1));
//! field.resize(1024, 768);
//! run(&mut field, &mut FixedFrames::new(3));
//! assert_eq!(field.counts().nodes, 98);
//! ```

pub mod config;
pub mod entities;
pub mod field;
pub mod frame;
pub mod geometry;
pub mod palette;
pub mod surface;

pub use config::{ConfigError, FieldConfig, FieldCounts};
pub use field::{ParticleField, link_alpha};
pub use frame::{FixedFrames, FrameSource, run};
pub use geometry::{Point, ShapeKind};
pub use palette::Rgba;
pub use surface::{DrawCommand, Recorder, Surface};
