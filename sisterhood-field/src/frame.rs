//! Frame scheduling
//!
//! A [`FrameSource`] decides when the next tick happens. The browser binding
//! schedules ticks from `requestAnimationFrame` callbacks; everything else
//! (the CLI, tests) drives the field synchronously through [`run`].

use rand::Rng;

use crate::field::ParticleField;
use crate::surface::Surface;

/// Something that hands out animation frames
pub trait FrameSource {
    /// Wait for the next frame. Returns `false` once the source has stopped.
    fn next_frame(&mut self) -> bool;
}

/// Yields a fixed number of frames, then stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    /// Frames not yet handed out
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Tick `field` once per frame until `frames` stops. Returns the tick count.
pub fn run<S, R, F>(field: &mut ParticleField<S, R>, frames: &mut F) -> u64
where
    S: Surface,
    R: Rng,
    F: FrameSource + ?Sized,
{
    let mut ticks = 0;
    while frames.next_frame() {
        field.tick();
        ticks += 1;
    }
    tracing::debug!(ticks, time = field.time(), "frame source stopped");
    ticks
}
