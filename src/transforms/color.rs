//! Color transforms: grayscale and linear blending

use log::debug;

use crate::error::TransformError;
use crate::raster::Image;
use crate::Result;

/// Replace every pixel with its luminance.
pub fn grayscale(image: &Image) -> Image {
    image.map(|p| p.luminance())
}

/// Linear blend of two same-size images.
///
/// Every output pixel is `first.blend(second, alpha)`, i.e. `alpha` parts of
/// `first` and `1 - alpha` parts of `second`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] when the images differ in
/// size or `alpha` lies outside `[0, 1]`.
pub fn blend(first: &Image, second: &Image, alpha: f64) -> Result<Image> {
    if !first.same_dimensions(second) {
        let (w1, h1) = first.dimensions();
        let (w2, h2) = second.dimensions();
        return Err(TransformError::invalid(
            "blend",
            format!("image dimensions differ: {}x{} vs {}x{}", w1, h1, w2, h2),
        ));
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(TransformError::invalid(
            "blend",
            format!("alpha must be in [0, 1], got {}", alpha),
        ));
    }

    debug!("blend {}x{} alpha={}", first.width(), first.height(), alpha);
    Ok(first.remap(|row, col| first.pixel(row, col).blend(second.pixel(row, col), alpha)))
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

    #[test]
    fn test_grayscale_values() {
        let gray = grayscale(&sample());
        assert_eq!(gray.dimensions(), (2, 2));
        assert_eq!(gray.pixel(0, 0), Pixel::BLACK);
        assert_eq!(gray.pixel(0, 1), Pixel::WHITE);
        assert_eq!(gray.pixel(1, 0), Pixel::gray(18));
        assert_eq!(gray.pixel(1, 1), Pixel::gray(124));
    }

    #[test]
    fn test_grayscale_leaves_source_untouched() {
        let img = sample();
        let before = img.clone();
        let _ = grayscale(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = sample();
        let b = Image::filled(2, 2, Pixel::new(9, 99, 199)).unwrap();
        assert_eq!(blend(&a, &b, 1.0).unwrap(), a);
        assert_eq!(blend(&a, &b, 0.0).unwrap(), b);
    }

    #[test]
    fn test_blend_half() {
        let a = Image::filled(1, 2, Pixel::WHITE).unwrap();
        let b = Image::filled(1, 2, Pixel::BLACK).unwrap();
        // 0.5 * 255 = 127.5 -> 127
        assert_eq!(blend(&a, &b, 0.5).unwrap().pixel(1, 0), Pixel::gray(127));
    }

    #[test]
    fn test_blend_dimension_mismatch() {
        let a = sample();
        let b = Image::filled(3, 2, Pixel::BLACK).unwrap();
        let err = blend(&a, &b, 0.5).unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameter { .. }));
        assert!(err.to_string().contains("2x2 vs 3x2"));
    }

    #[test]
    fn test_blend_alpha_out_of_range() {
        let a = sample();
        assert!(blend(&a, &a, 1.5).is_err());
        assert!(blend(&a, &a, -0.1).is_err());
        assert!(blend(&a, &a, f64::NAN).is_err());
    }
}
