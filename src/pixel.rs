//! 8-bit RGB pixel with blend and luminance arithmetic
//!
//! All channel math is done in `f64` and converted back with a truncating
//! cast, so results match a reference that uses `(int)` conversions.

use image::Rgb;

/// A single RGB color value with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Luminance weights for red, green and blue (ITU-R BT.601).
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Truncate a channel value toward zero into `0..=255`.
///
/// `as u8` from a float saturates at the range bounds and maps NaN to 0,
/// so out-of-range results can never wrap.
#[inline]
fn truncate_channel(v: f64) -> u8 {
    v as u8
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a pixel from its red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray pixel with all three channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear combination of two pixels.
    ///
    /// Each channel is `alpha * self + (1 - alpha) * other`, truncated toward
    /// zero. `alpha` is expected in `[0, 1]`; outside that range the result
    /// saturates at 0 or 255 rather than wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph::pixel::Pixel;
    ///
    /// let mixed = Pixel::new(10, 255, 0).blend(Pixel::new(200, 0, 255), 0.5);
    /// assert_eq!(mixed, Pixel::new(105, 127, 127));
    /// ```
    pub fn blend(self, other: Pixel, alpha: f64) -> Pixel {
        let mix = |a: u8, b: u8| truncate_channel(alpha * a as f64 + (1.0 - alpha) * b as f64);
        Pixel::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Gray pixel carrying this pixel's luminance.
    ///
    /// `L = 0.299 R + 0.587 G + 0.114 B`, summed left to right and truncated.
    pub fn luminance(self) -> Pixel {
        let [wr, wg, wb] = LUMA_WEIGHTS;
        let level = self.r as f64 * wr + self.g as f64 * wg + self.b as f64 * wb;
        Pixel::gray(truncate_channel(level))
    }

    /// True when all three channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(rgb: Rgb<u8>) -> Self {
        Pixel::from(rgb.0)
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(p: Pixel) -> Self {
        Rgb(p.channels())
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Pixel::new(10, 20, 30);
        let b = Pixel::new(200, 100, 50);
        assert_eq!(a.blend(b, 1.0), a);
        assert_eq!(a.blend(b, 0.0), b);
    }

    #[test]
    fn test_blend_truncates() {
        // 0.75 * 10 + 0.25 * 200 = 57.5 -> 57
        let out = Pixel::new(10, 255, 0).blend(Pixel::new(200, 0, 255), 0.75);
        assert_eq!(out, Pixel::new(57, 191, 63));
    }

    #[test]
    fn test_blend_white_half() {
        assert_eq!(Pixel::WHITE.blend(Pixel::WHITE, 0.5), Pixel::WHITE);
    }

    #[test]
    fn test_blend_out_of_range_alpha_saturates() {
        let a = Pixel::new(255, 0, 128);
        let b = Pixel::new(0, 255, 128);
        assert_eq!(a.blend(b, 2.0), Pixel::new(255, 0, 128));
        assert_eq!(a.blend(b, -1.0), Pixel::new(0, 255, 128));
    }

    #[test]
    fn test_blend_nan_alpha_is_black() {
        assert_eq!(Pixel::WHITE.blend(Pixel::WHITE, f64::NAN), Pixel::BLACK);
    }

    #[test]
    fn test_luminance_white_is_exact() {
        // The weights sum to one and the products add up to exactly 255.0
        assert_eq!(Pixel::WHITE.luminance(), Pixel::WHITE);
    }

    #[test]
    fn test_luminance_values() {
        assert_eq!(Pixel::new(10, 20, 30).luminance(), Pixel::gray(18));
        assert_eq!(Pixel::new(200, 100, 50).luminance(), Pixel::gray(124));
        assert_eq!(Pixel::BLACK.luminance(), Pixel::BLACK);
    }

    #[test]
    fn test_luminance_of_gray_may_drop_by_one() {
        // 1 * (0.299 + 0.587 + 0.114) lands just under 1.0
        assert_eq!(Pixel::gray(1).luminance(), Pixel::gray(0));
        assert_eq!(Pixel::gray(3).luminance(), Pixel::gray(3));
    }

    #[test]
    fn test_rgb_conversion() {
        let p = Pixel::new(1, 2, 3);
        let rgb: Rgb<u8> = p.into();
        assert_eq!(rgb, Rgb([1, 2, 3]));
        assert_eq!(Pixel::from(rgb), p);
    }

    #[test]
    fn test_channel_array_conversion() {
        let p = Pixel::from([200, 100, 50]);
        assert_eq!(p, Pixel::new(200, 100, 50));
        assert_eq!(p.channels(), [200, 100, 50]);
    }

    #[test]
    fn test_is_gray() {
        assert!(Pixel::gray(42).is_gray());
        assert!(!Pixel::new(1, 1, 2).is_gray());
    }
}
