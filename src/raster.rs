//! Row-major pixel grid
//!
//! An [`Image`] is fixed once built: there are no public mutators, and every
//! transform allocates a fresh grid for its output.

use image::RgbImage;

use crate::error::TransformError;
use crate::pixel::Pixel;
use crate::Result;

/// A `height x width` grid of pixels, addressed as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Build an image from a flat row-major pixel buffer.
    ///
    /// Fails when either dimension is zero or the buffer length is not
    /// `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::invalid(
                "image",
                format!("dimensions must be at least 1x1, got {}x{}", width, height),
            ));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            TransformError::invalid("image", format!("{}x{} is too large", width, height))
        })?;
        if pixels.len() != expected {
            return Err(TransformError::invalid(
                "image",
                format!(
                    "{}x{} needs {} pixels, got {}",
                    width,
                    height,
                    expected,
                    pixels.len()
                ),
            ));
        }
        Ok(Self { width, height, pixels })
    }

    /// Build an image from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TransformError::invalid(
                "image",
                format!("row {} has {} pixels, expected {}", i, row.len(), width),
            ));
        }
        Self::from_pixels(width, height, rows.into_iter().flatten().collect())
    }

    /// Build an image by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self::from_pixels(width, height, pixels)
    }

    /// An image where every pixel is `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        Self::from_pixels(width, height, vec![pixel; width.saturating_mul(height)])
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`, in the same order as the `image` crate.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn same_dimensions(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Pixel at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of bounds for {}x{} image",
            row,
            col,
            self.width,
            self.height
        );
        self.pixels[row * self.width + col]
    }

    /// Row slices from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Apply `f` to every pixel, keeping the dimensions.
    pub(crate) fn map<F>(&self, f: F) -> Image
    where
        F: Fn(Pixel) -> Pixel,
    {
        Image {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Same-size image where each cell is `f(row, col)`.
    pub(crate) fn remap<F>(&self, mut f: F) -> Image
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in 0..self.height {
            for col in 0..self.width {
                pixels.push(f(row, col));
            }
        }
        Image { width: self.width, height: self.height, pixels }
    }

    /// Convert from an `image` crate RGB buffer.
    pub fn from_rgb_image(rgb: &RgbImage) -> Result<Self> {
        let (w, h) = rgb.dimensions();
        Self::from_pixels(w as usize, h as usize, rgb.pixels().map(|&p| Pixel::from(p)).collect())
    }

    /// Convert to an `image` crate RGB buffer.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixel(y as usize, x as usize).into()
        })
    }
}
