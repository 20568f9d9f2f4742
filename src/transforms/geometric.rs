//! Geometric transforms: mirroring and nearest-neighbor scaling

use log::debug;

use crate::error::TransformError;
use crate::raster::Image;
use crate::Result;

/// Mirror left-right: output `(row, col)` is input `(row, W-1-col)`.
pub fn flip_horizontal(image: &Image) -> Image {
    let w = image.width();
    image.remap(|row, col| image.pixel(row, w - 1 - col))
}

/// Mirror top-bottom: output `(row, col)` is input `(H-1-row, col)`.
pub fn flip_vertical(image: &Image) -> Image {
    let h = image.height();
    image.remap(|row, col| image.pixel(h - 1 - row, col))
}

/// Nearest-neighbor resize to `new_width x new_height`.
///
/// The source/target ratios are computed first as `f64`; output pixel
/// `(i, j)` then samples source row `trunc(i * H / new_height)` and column
/// `trunc(j * W / new_width)`. Truncation (not rounding) picks the sample.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] if either target dimension
/// is zero.
///
/// # Examples
///
/// ```
/// use pixmorph::pixel::Pixel;
/// use pixmorph::raster::Image;
/// use pixmorph::transforms::scale;
///
/// let img = Image::from_fn(5, 5, |r, c| Pixel::new(r as u8, c as u8, 0)).unwrap();
/// let small = scale(&img, 3, 2).unwrap();
/// assert_eq!(small.dimensions(), (3, 2));
/// assert_eq!(small.pixel(1, 2), Pixel::new(2, 3, 0));
/// ```
pub fn scale(image: &Image, new_width: usize, new_height: usize) -> Result<Image> {
    if new_width == 0 || new_height == 0 {
        return Err(TransformError::invalid(
            "scale",
            format!("target size must be at least 1x1, got {}x{}", new_width, new_height),
        ));
    }

    let (w, h) = image.dimensions();
    let row_ratio = h as f64 / new_height as f64;
    let col_ratio = w as f64 / new_width as f64;
    debug!(
        "scale {}x{} -> {}x{} (row ratio {}, col ratio {})",
        w, h, new_width, new_height, row_ratio, col_ratio
    );

    Image::from_fn(new_width, new_height, |i, j| {
        image.pixel(source_index(i, row_ratio, h), source_index(j, col_ratio, w))
    })
}

/// Source index for output index `i`, clamped into `0..len`.
#[inline]
fn source_index(i: usize, ratio: f64, len: usize) -> usize {
    ((i as f64 * ratio) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn sample() -> Image {
        Image::from_rows(vec![
            vec![Pixel::new(0, 0, 0), Pixel::new(255, 255, 255)],
            vec![Pixel::new(10, 20, 30), Pixel::new(200, 100, 50)],
        ])
        .unwrap()
    }

    /// Pixel that encodes its own coordinates.
    fn coords(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |r, c| Pixel::new(r as u8, c as u8, 0)).unwrap()
    }

    #[test]
    fn test_flip_horizontal_swaps_columns() {
        let flipped = flip_horizontal(&sample());
        assert_eq!(flipped.pixel(0, 0), Pixel::WHITE);
        assert_eq!(flipped.pixel(0, 1), Pixel::BLACK);
        assert_eq!(flipped.pixel(1, 0), Pixel::new(200, 100, 50));
        assert_eq!(flipped.pixel(1, 1), Pixel::new(10, 20, 30));
    }

    #[test]
    fn test_flip_vertical_swaps_rows() {
        let flipped = flip_vertical(&sample());
        assert_eq!(flipped.pixel(0, 0), Pixel::new(10, 20, 30));
        assert_eq!(flipped.pixel(1, 1), Pixel::WHITE);
    }

    #[test]
    fn test_flips_keep_dimensions_non_square() {
        let img = coords(4, 3);
        assert_eq!(flip_horizontal(&img).dimensions(), (4, 3));
        assert_eq!(flip_vertical(&img).dimensions(), (4, 3));
        assert_eq!(flip_horizontal(&img).pixel(2, 0), Pixel::new(2, 3, 0));
        assert_eq!(flip_vertical(&img).pixel(0, 1), Pixel::new(2, 1, 0));
    }

    #[test]
    fn test_flip_single_pixel() {
        let img = Image::filled(1, 1, Pixel::new(1, 2, 3)).unwrap();
        assert_eq!(flip_horizontal(&img), img);
        assert_eq!(flip_vertical(&img), img);
    }

    #[test]
    fn test_scale_5x5_to_3x2_table() {
        // row ratio 5/2 = 2.5 -> rows 0, 2
        // col ratio 5/3 = 1.666.. -> cols 0, 1, 3
        let out = scale(&coords(5, 5), 3, 2).unwrap();
        let expected = [[(0, 0), (0, 1), (0, 3)], [(2, 0), (2, 1), (2, 3)]];
        for (i, row) in expected.iter().enumerate() {
            for (j, &(r, c)) in row.iter().enumerate() {
                assert_eq!(out.pixel(i, j), Pixel::new(r, c, 0), "output ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_scale_4x4_to_2x2() {
        let out = scale(&coords(4, 4), 2, 2).unwrap();
        assert_eq!(out.pixel(0, 0), Pixel::new(0, 0, 0));
        assert_eq!(out.pixel(0, 1), Pixel::new(0, 2, 0));
        assert_eq!(out.pixel(1, 0), Pixel::new(2, 0, 0));
        assert_eq!(out.pixel(1, 1), Pixel::new(2, 2, 0));
    }

    #[test]
    fn test_scale_up_repeats_pixels() {
        let out = scale(&sample(), 4, 4).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.pixel(0, 0), Pixel::BLACK);
        assert_eq!(out.pixel(0, 1), Pixel::BLACK);
        assert_eq!(out.pixel(0, 2), Pixel::WHITE);
        assert_eq!(out.pixel(3, 3), Pixel::new(200, 100, 50));
    }

    #[test]
    fn test_scale_2x2_to_3x5() {
        // row ratio 2/5 = 0.4 -> rows 0, 0, 0, 1, 1
        // col ratio 2/3 -> cols 0, 0, 1
        let out = scale(&coords(2, 2), 3, 5).unwrap();
        assert_eq!(out.dimensions(), (3, 5));
        assert_eq!(out.pixel(2, 2), Pixel::new(0, 1, 0));
        assert_eq!(out.pixel(3, 1), Pixel::new(1, 0, 0));
        assert_eq!(out.pixel(4, 2), Pixel::new(1, 1, 0));
    }

    #[test]
    fn test_scale_identity() {
        let img = coords(3, 7);
        assert_eq!(scale(&img, 3, 7).unwrap(), img);
    }

    #[test]
    fn test_scale_zero_is_invalid() {
        assert!(matches!(scale(&sample(), 0, 2), Err(TransformError::InvalidParameter { .. })));
        assert!(matches!(scale(&sample(), 2, 0), Err(TransformError::InvalidParameter { .. })));
    }
}
