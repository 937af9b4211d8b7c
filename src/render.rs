//! Headless rendering of the particle field

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use sisterhood_field::{FieldConfig, FixedFrames, ParticleField, Recorder, run};

/// What to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Ticks to run; the last one is kept
    pub frames: u64,
    /// Seed for the layout, so the same options always give the same frame
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frames: 1,
            seed: 0,
        }
    }
}

/// A headless field recording into memory
pub type HeadlessField = ParticleField<Recorder, ChaCha8Rng>;

/// Build a seeded field sized to the options, without ticking it
pub fn build_field(config: FieldConfig, options: &RenderOptions) -> HeadlessField {
    let mut field = ParticleField::with_config(
        Recorder::new(),
        ChaCha8Rng::seed_from_u64(options.seed),
        config,
    );
    field.resize(options.width, options.height);
    field
}

/// Run the field for `options.frames` ticks and return the last frame
pub fn render_frame(config: FieldConfig, options: &RenderOptions) -> Recorder {
    let mut field = build_field(config, options);
    let ticks = run(&mut field, &mut FixedFrames::new(options.frames));
    tracing::info!(
        ticks,
        width = options.width,
        height = options.height,
        counts = %field.counts(),
        "rendered frame"
    );
    field.into_surface()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sisterhood_field::DrawCommand;

    #[test]
    fn same_options_same_frame() {
        let options = RenderOptions {
            width: 640,
            height: 480,
            frames: 5,
            seed: 99,
        };
        let a = render_frame(FieldConfig::default(), &options);
        let b = render_frame(FieldConfig::default(), &options);
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn different_seeds_differ() {
        let a = render_frame(FieldConfig::default(), &RenderOptions::default());
        let b = render_frame(
            FieldConfig::default(),
            &RenderOptions {
                seed: 1,
                ..Default::default()
            },
        );
        assert_ne!(a.commands(), b.commands());
    }

    #[test]
    fn zero_frames_records_nothing() {
        let frame = render_frame(
            FieldConfig::default(),
            &RenderOptions {
                frames: 0,
                ..Default::default()
            },
        );
        assert!(frame.commands().is_empty());
        assert_eq!(frame.width(), 1280);
    }

    #[test]
    fn last_frame_is_kept() {
        let frame = render_frame(
            FieldConfig::default(),
            &RenderOptions {
                frames: 3,
                ..Default::default()
            },
        );
        assert_eq!(frame.frames(), 3);
        assert_eq!(frame.commands()[0], DrawCommand::Clear);
        assert_eq!(
            frame
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Clear))
                .count(),
            1
        );
    }

    #[test]
    fn build_field_is_sized_but_untouched() {
        let field = build_field(FieldConfig::default(), &RenderOptions::default());
        assert_eq!(field.time(), 0.0);
        assert_eq!(field.counts().nodes, 115);
    }
}
