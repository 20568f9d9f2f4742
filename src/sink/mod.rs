//! Frame sinks: the display boundary finished images are written to
//!
//! A sink owns a drawing surface sized to the image being shown. The morph
//! sequencer and the CLI only talk to it through [`FrameSink`], so a real
//! terminal, an off-screen buffer or a test double can be swapped freely.

pub mod buffer;
pub mod terminal;

use std::time::Duration;

pub use buffer::BufferSink;
pub use terminal::TerminalSink;

use crate::error::TransformError;
use crate::raster::Image;
use crate::Result;

/// Display surface contract.
pub trait FrameSink {
    /// Establish a surface of `height` rows by `width` columns, row 0 at the top.
    fn configure(&mut self, height: usize, width: usize) -> Result<()>;

    /// Render every pixel of `image`. The whole frame is visible once this returns.
    fn show(&mut self, image: &Image) -> Result<()>;

    /// Block the calling thread for `duration`.
    fn pause(&mut self, duration: Duration) -> Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn configure(&mut self, height: usize, width: usize) -> Result<()> {
        (**self).configure(height, width)
    }

    fn show(&mut self, image: &Image) -> Result<()> {
        (**self).show(image)
    }

    fn pause(&mut self, duration: Duration) -> Result<()> {
        (**self).pause(duration)
    }
}

/// Validate surface dimensions passed to `configure`.
pub(crate) fn check_surface_size(height: usize, width: usize) -> Result<(usize, usize)> {
    if height == 0 || width == 0 {
        return Err(TransformError::invalid(
            "configure",
            format!("surface must be at least 1x1, got {}x{}", width, height),
        ));
    }
    Ok((height, width))
}

/// Check that `image` fits the configured `(height, width)` surface.
pub(crate) fn check_frame(surface: Option<(usize, usize)>, image: &Image) -> Result<()> {
    match surface {
        None => Err(TransformError::invalid("show", "sink has not been configured")),
        Some((h, w)) if (w, h) != image.dimensions() => Err(TransformError::invalid(
            "show",
            format!(
                "frame is {}x{} but the surface is {}x{}",
                image.width(),
                image.height(),
                w,
                h
            ),
        )),
        Some(_) => Ok(()),
    }
}

/// Configure `sink` for `image` and show it once.
pub fn display<S: FrameSink + ?Sized>(sink: &mut S, image: &Image) -> Result<()> {
    sink.configure(image.height(), image.width())?;
    sink.show(image)
}
