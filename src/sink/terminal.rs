//! Terminal sink using 24-bit ANSI colors
//!
//! Each pixel becomes a block of `scale x scale` "half cells": the upper half
//! block character `▀` carries two vertically stacked half cells per text
//! line (foreground = top, background = bottom), which keeps pixels roughly
//! square on typical terminal fonts.

use std::io::Write;
use std::thread;
use std::time::Duration;

use super::{check_frame, check_surface_size, FrameSink};
use crate::pixel::Pixel;
use crate::raster::Image;
use crate::Result;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape sequence selecting the terminal's default background
const ANSI_DEFAULT_BG: &str = "\x1b[49m";

/// Convert a pixel to an ANSI 24-bit background escape sequence.
///
/// # Examples
///
/// ```
/// use pixmorph::pixel::Pixel;
/// use pixmorph::sink::terminal::color_to_ansi_bg;
///
/// assert_eq!(color_to_ansi_bg(Pixel::new(255, 0, 0)), "\x1b[48;2;255;0;0m");
/// ```
pub fn color_to_ansi_bg(p: Pixel) -> String {
    format!("\x1b[48;2;{};{};{}m", p.r, p.g, p.b)
}

/// Convert a pixel to an ANSI 24-bit foreground escape sequence.
pub fn color_to_ansi_fg(p: Pixel) -> String {
    format!("\x1b[38;2;{};{};{}m", p.r, p.g, p.b)
}

/// Number of text lines a frame of `height` rows occupies at `scale`.
pub fn frame_lines(height: usize, scale: usize) -> usize {
    (height * scale).div_ceil(2)
}

/// Render an image to ANSI terminal output.
///
/// Every pixel is repeated `scale` times horizontally and vertically; two
/// vertical half cells share one text line. Row 0 is printed first.
pub fn render_image_ansi(image: &Image, scale: usize) -> String {
    let scale = scale.max(1);
    let virtual_height = image.height() * scale;
    let mut output = String::new();

    for y in (0..virtual_height).step_by(2) {
        let top_row = y / scale;
        let bottom_row = (y + 1 < virtual_height).then(|| (y + 1) / scale);
        for col in 0..image.width() {
            let top = image.pixel(top_row, col);
            let cell = match bottom_row {
                Some(row) => {
                    let bottom = image.pixel(row, col);
                    format!("{}{}▀", color_to_ansi_bg(bottom), color_to_ansi_fg(top))
                }
                // Odd virtual height: the last line only has a top half
                None => format!("{}{}▀", ANSI_DEFAULT_BG, color_to_ansi_fg(top)),
            };
            for _ in 0..scale {
                output.push_str(&cell);
            }
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }

    output
}

/// Frame sink that draws into a terminal (or any `Write`).
///
/// Each frame is assembled in memory and written with a single `write_all`
/// followed by `flush`. From the second frame on, the cursor is first moved
/// back up to the frame origin so the animation redraws in place.
pub struct TerminalSink<W: Write> {
    out: W,
    scale: usize,
    surface: Option<(usize, usize)>,
    frames_shown: usize,
}

impl TerminalSink<std::io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout(scale: usize) -> Self {
        Self::new(std::io::stdout(), scale)
    }
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink; `scale` is the number of half cells per pixel edge.
    pub fn new(out: W, scale: usize) -> Self {
        Self { out, scale: scale.max(1), surface: None, frames_shown: 0 }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn configure(&mut self, height: usize, width: usize) -> Result<()> {
        self.surface = Some(check_surface_size(height, width)?);
        self.frames_shown = 0;
        Ok(())
    }

    fn show(&mut self, image: &Image) -> Result<()> {
        check_frame(self.surface, image)?;

        let mut frame = String::new();
        if self.frames_shown > 0 {
            // Move to column 0 of the first line of the previous frame
            frame.push_str(&format!("\x1b[{}F", frame_lines(image.height(), self.scale)));
        }
        frame.push_str(&render_image_ansi(image, self.scale));

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.frames_shown += 1;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Result<()> {
        thread::sleep(duration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rows() -> Image {
        Image::from_rows(vec![vec![Pixel::new(255, 0, 0)], vec![Pixel::new(0, 0, 255)]]).unwrap()
    }

    #[test]
    fn test_color_to_ansi() {
        assert_eq!(color_to_ansi_bg(Pixel::new(0, 255, 0)), "\x1b[48;2;0;255;0m");
        assert_eq!(color_to_ansi_fg(Pixel::new(1, 2, 3)), "\x1b[38;2;1;2;3m");
    }

    #[test]
    fn test_frame_lines() {
        assert_eq!(frame_lines(2, 1), 1);
        assert_eq!(frame_lines(3, 1), 2);
        assert_eq!(frame_lines(3, 2), 3);
    }

    #[test]
    fn test_render_pairs_rows_top_first() {
        let out = render_image_ansi(&two_rows(), 1);
        assert_eq!(out, "\x1b[48;2;0;0;255m\x1b[38;2;255;0;0m▀\x1b[0m\n");
    }

    #[test]
    fn test_render_odd_height_uses_default_background() {
        let img = Image::filled(1, 1, Pixel::WHITE).unwrap();
        let out = render_image_ansi(&img, 1);
        assert!(out.starts_with(ANSI_DEFAULT_BG));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_render_scale_repeats_cells() {
        let out = render_image_ansi(&two_rows(), 2);
        // 2 rows * 2 = 4 half cells -> 2 lines, each 2 cells wide
        assert_eq!(out.lines().count(), 2);
        assert_eq!(out.matches('▀').count(), 4);
        let first = out.lines().next().unwrap();
        assert!(first.contains("\x1b[48;2;255;0;0m\x1b[38;2;255;0;0m"));
    }

    #[test]
    fn test_show_writes_frame_and_rewinds() {
        let mut sink = TerminalSink::new(Vec::new(), 1);
        sink.configure(2, 1).unwrap();
        sink.show(&two_rows()).unwrap();
        sink.show(&two_rows()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!text.starts_with("\x1b[1F"));
        assert_eq!(text.matches("\x1b[1F").count(), 1);
        assert_eq!(text.matches('▀').count(), 2);
    }

    #[test]
    fn test_show_before_configure_fails() {
        let mut sink = TerminalSink::new(Vec::new(), 1);
        assert!(sink.show(&two_rows()).is_err());
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        assert_eq!(TerminalSink::new(Vec::new(), 0).scale(), 1);
    }
}
