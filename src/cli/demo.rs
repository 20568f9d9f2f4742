//! Demo command: a printed walkthrough of every transform on one image

use std::path::Path;
use std::process::ExitCode;

use crate::pixel::Pixel;
use crate::print::{format_image, format_pixel};
use crate::raster::Image;
use crate::transforms::{flip_horizontal, flip_vertical, grayscale, scale};
use crate::Result;

use super::{fail, open_input, EXIT_SUCCESS};

/// Width and height of the scaled section of the demo.
const DEMO_SCALE: (usize, usize) = (3, 5);

/// Build the demo report for `image`.
pub(crate) fn demo_report(image: &Image) -> Result<String> {
    let (w, h) = DEMO_SCALE;
    let sections = [
        ("original", image.clone()),
        ("flipped horizontally", flip_horizontal(image)),
        ("flipped vertically", flip_vertical(image)),
        ("grayscale", grayscale(image)),
        ("scaled to 3x5", scale(image, w, h)?),
    ];

    let mut out = String::new();
    for (title, img) in &sections {
        out.push_str(title);
        out.push_str(&format_image(img));
        out.push_str("\n\n");
    }
    out.push_str("white blended with white at 0.5\n");
    out.push_str(&format_pixel(Pixel::WHITE.blend(Pixel::WHITE, 0.5)));
    out.push('\n');
    Ok(out)
}

/// Print the demo report for the image at `input`.
pub fn run_demo(input: &Path) -> ExitCode {
    let image = match open_input(input) {
        Ok(img) => img,
        Err(code) => return code,
    };
    match demo_report(&image) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => fail(e),
    }
}
