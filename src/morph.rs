//! Morph sequencer: a timed series of blends from a source to a target image
//!
//! The target is rescaled to the source's size once, then frame `i` of
//! `steps + 1` is `blend(source, target, (steps - i) / steps)`. Frames are
//! produced lazily, so the sequence can be driven as an iterator, played into
//! a [`FrameSink`], or stopped between frames with a cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, warn};

use crate::error::TransformError;
use crate::raster::Image;
use crate::sink::FrameSink;
use crate::transforms::scale;
use crate::Result;

/// Pause between morph frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(500);

/// One frame of a morph sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphFrame {
    /// Step index, `0..=steps`
    pub step: u32,
    /// Weight of the source image in this frame, from 1.0 down to 0.0
    pub weight: f64,
    pub image: Image,
}

/// Lazy sequence of blended frames from `source` toward `target`.
#[derive(Debug, Clone)]
pub struct Morph {
    source: Image,
    target: Image,
    steps: u32,
    next_step: u32,
}

impl Morph {
    /// Prepare a morph in `steps` steps (`steps + 1` frames).
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] if `steps` is zero.
    pub fn new(source: &Image, target: &Image, steps: u32) -> Result<Self> {
        if steps == 0 {
            return Err(TransformError::invalid("morph", "steps must be at least 1"));
        }
        let target = scale(target, source.width(), source.height())?;
        debug!(
            "morph prepared: {}x{} in {} steps",
            source.width(),
            source.height(),
            steps
        );
        Ok(Self { source: source.clone(), target, steps, next_step: 0 })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Total number of frames, `steps + 1`.
    pub fn frame_count(&self) -> usize {
        self.steps as usize + 1
    }

    /// The target after rescaling to the source's dimensions.
    pub fn target(&self) -> &Image {
        &self.target
    }

    /// Source weight at `step`: `(steps - step) / steps`.
    pub fn weight(&self, step: u32) -> f64 {
        (self.steps - step.min(self.steps)) as f64 / self.steps as f64
    }

    /// Compute the frame at `step` without advancing the sequence.
    pub fn frame(&self, step: u32) -> Result<MorphFrame> {
        if step > self.steps {
            return Err(TransformError::invalid(
                "morph",
                format!("step {} is past the last step {}", step, self.steps),
            ));
        }
        Ok(self.blended_frame(step))
    }

    /// Frame at `step`; source and target share dimensions after `new`.
    fn blended_frame(&self, step: u32) -> MorphFrame {
        let weight = self.weight(step);
        let image = self.source.remap(|row, col| {
            self.source.pixel(row, col).blend(self.target.pixel(row, col), weight)
        });
        MorphFrame { step, weight, image }
    }

    /// Show every remaining frame on `sink`, pausing `delay` after each.
    ///
    /// The sink is configured with the source dimensions first. Returns the
    /// number of frames shown.
    pub fn play<S: FrameSink + ?Sized>(self, sink: &mut S, delay: Duration) -> Result<usize> {
        self.play_until(sink, delay, &AtomicBool::new(false))
    }

    /// Like [`Morph::play`], but checks `cancel` before each frame and stops
    /// early once it is set.
    pub fn play_until<S: FrameSink + ?Sized>(
        self,
        sink: &mut S,
        delay: Duration,
        cancel: &AtomicBool,
    ) -> Result<usize> {
        sink.configure(self.source.height(), self.source.width())?;
        let total = self.frame_count();
        let mut shown = 0;
        let mut frames = self;
        loop {
            if cancel.load(Ordering::Relaxed) {
                warn!("morph cancelled after {} of {} frames", shown, total);
                break;
            }
            let Some(frame) = frames.next() else {
                break;
            };
            debug!("morph frame {} weight {}", frame.step, frame.weight);
            sink.show(&frame.image)?;
            sink.pause(delay)?;
            shown += 1;
        }
        Ok(shown)
    }
}

impl Iterator for Morph {
    type Item = MorphFrame;

    fn next(&mut self) -> Option<MorphFrame> {
        if self.next_step > self.steps {
            return None;
        }
        let frame = self.blended_frame(self.next_step);
        self.next_step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next_step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Morph {}

/// Morph `source` into `target` in `steps` steps, showing each frame on
/// `sink` with the default half-second pacing.
pub fn morph<S: FrameSink + ?Sized>(
    source: &Image,
    target: &Image,
    steps: u32,
    sink: &mut S,
) -> Result<usize> {
    Morph::new(source, target, steps)?.play(sink, DEFAULT_FRAME_DELAY)
}
