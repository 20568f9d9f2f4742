//! Plain-text dump of pixel values
//!
//! Pixels print as `(  r,  g,  b)  ` with each channel right-aligned to three
//! columns; every row starts on a fresh line.

use crate::pixel::Pixel;
use crate::raster::Image;

/// Format one pixel, including its two trailing spaces.
pub fn format_pixel(p: Pixel) -> String {
    format!("({:>3},{:>3},{:>3})  ", p.r, p.g, p.b)
}

/// Format an image; the output begins with a newline before the first row.
///
/// # Examples
///
/// ```
/// use pixmorph::pixel::Pixel;
/// use pixmorph::print::format_image;
/// use pixmorph::raster::Image;
///
/// let img = Image::filled(1, 1, Pixel::new(7, 80, 255)).unwrap();
/// assert_eq!(format_image(&img), "\n(  7, 80,255)  ");
/// ```
pub fn format_image(image: &Image) -> String {
    let mut out = String::with_capacity(image.pixels().len() * 15 + image.height());
    for row in image.rows() {
        out.push('\n');
        for &p in row {
            out.push_str(&format_pixel(p));
        }
    }
    out
}
