//! Off-screen sink that keeps every frame in memory

use std::time::Duration;

use super::{check_frame, check_surface_size, FrameSink};
use crate::raster::Image;
use crate::Result;

/// Records shown frames and requested pauses without drawing or sleeping.
///
/// Useful for headless runs and for asserting on morph output.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    surface: Option<(usize, usize)>,
    frames: Vec<Image>,
    pauses: Vec<Duration>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured `(height, width)`, if any.
    pub fn surface(&self) -> Option<(usize, usize)> {
        self.surface
    }

    /// Frames in the order they were shown.
    pub fn frames(&self) -> &[Image] {
        &self.frames
    }

    /// Pause durations in the order they were requested.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Take ownership of the recorded frames.
    pub fn into_frames(self) -> Vec<Image> {
        self.frames
    }
}

impl FrameSink for BufferSink {
    fn configure(&mut self, height: usize, width: usize) -> Result<()> {
        self.surface = Some(check_surface_size(height, width)?);
        Ok(())
    }

    fn show(&mut self, image: &Image) -> Result<()> {
        check_frame(self.surface, image)?;
        self.frames.push(image.clone());
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Result<()> {
        self.pauses.push(duration);
        Ok(())
    }
}
