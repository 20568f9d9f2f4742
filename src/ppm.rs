//! Plain-text PPM (`P3`) decoding
//!
//! The layout is a whitespace-separated token stream:
//!
//! ```text
//! P3
//! # optional comments run to end of line
//! <cols> <rows>
//! <max value>
//! r g b  r g b  ...   (rows * cols triples, row-major)
//! ```
//!
//! The format token and max value are read but otherwise ignored: channels are
//! always treated as 8-bit. Other file formats are delegated to the `image`
//! crate by [`load_image`].

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::TransformError;
use crate::pixel::Pixel;
use crate::raster::Image;
use crate::Result;

/// Magic token identifying plain-text PPM data.
pub const PLAIN_PPM_MAGIC: &str = "P3";

/// Whitespace tokenizer that skips `#` comments.
struct Tokens<'a> {
    lines: std::str::Lines<'a>,
    current: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines(), current: "".split_whitespace() }
    }

    /// Next token, or a `MalformedImage` error naming what was expected.
    fn require(&mut self, what: &str) -> Result<&'a str> {
        self.next()
            .ok_or_else(|| TransformError::malformed(format!("unexpected end of data, expected {}", what)))
    }

    fn int(&mut self, what: &str) -> Result<u64> {
        let token = self.require(what)?;
        token
            .parse::<u64>()
            .map_err(|_| TransformError::malformed(format!("expected {}, found '{}'", what, token)))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(token) = self.current.next() {
                return Some(token);
            }
            let line = self.lines.next()?;
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            self.current = line.split_whitespace();
        }
    }
}

/// Parse plain-text PPM data held in a string.
///
/// # Examples
///
/// ```
/// use pixmorph::ppm::parse_ppm;
/// use pixmorph::pixel::Pixel;
///
/// let img = parse_ppm("P3\n2 1\n255\n255 0 0  0 0 255\n").unwrap();
/// assert_eq!(img.dimensions(), (2, 1));
/// assert_eq!(img.pixel(0, 1), Pixel::new(0, 0, 255));
/// ```
///
/// # Errors
///
/// Returns [`TransformError::MalformedImage`] when the format token, a
/// dimension, the max value or any channel is missing or not an integer, when
/// a dimension is zero, or when a channel exceeds 255.
pub fn parse_ppm(text: &str) -> Result<Image> {
    let mut tokens = Tokens::new(text);

    tokens.require("format token")?;
    let cols = dimension(tokens.int("column count")?, "column count")?;
    let rows = dimension(tokens.int("row count")?, "row count")?;
    tokens.int("max channel value")?;

    let count = cols
        .checked_mul(rows)
        .ok_or_else(|| TransformError::malformed(format!("{}x{} is too large", cols, rows)))?;
    // A pixel takes at least six bytes of text ("0 0 0 "), so a header that
    // claims more pixels than the data can hold must not size the buffer
    let mut pixels = Vec::with_capacity(count.min(text.len() / 6));
    for i in 0..count {
        let mut channel = |name: &str| -> Result<u8> {
            let what = format!("{} channel of pixel {} (row {}, col {})", name, i, i / cols, i % cols);
            let value = tokens.int(&what)?;
            u8::try_from(value).map_err(|_| {
                TransformError::malformed(format!("{} is {}, must be in 0..=255", what, value))
            })
        };
        let r = channel("red")?;
        let g = channel("green")?;
        let b = channel("blue")?;
        pixels.push(Pixel::new(r, g, b));
    }

    debug!("decoded plain PPM: {}x{} ({} pixels)", cols, rows, count);
    Image::from_pixels(cols, rows, pixels).map_err(|e| TransformError::malformed(e.to_string()))
}

fn dimension(value: u64, what: &str) -> Result<usize> {
    if value == 0 {
        return Err(TransformError::malformed(format!("{} must be at least 1", what)));
    }
    usize::try_from(value)
        .map_err(|_| TransformError::malformed(format!("{} {} is too large", what, value)))
}

/// Decode plain-text PPM data from a reader.
pub fn decode_ppm<R: Read>(mut reader: R) -> Result<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| TransformError::malformed(format!("PPM data is not valid text: {}", e)))?;
    parse_ppm(&text)
}

/// True if the data starts (after leading whitespace) with the `P3` token.
pub fn is_plain_ppm(bytes: &[u8]) -> bool {
    let start = bytes.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(bytes.len());
    let rest = &bytes[start..];
    rest.starts_with(PLAIN_PPM_MAGIC.as_bytes())
        && rest.get(PLAIN_PPM_MAGIC.len()).map_or(true, |b| b.is_ascii_whitespace() || *b == b'#')
}

/// Load an image from disk.
///
/// Plain-text PPM files are decoded by [`parse_ppm`]; anything else (binary
/// PPM, PNG, ...) goes through the `image` crate and is converted to RGB8.
pub fn load_image(path: &Path) -> Result<Image> {
    let bytes = fs::read(path)?;
    if is_plain_ppm(&bytes) {
        return decode_ppm(bytes.as_slice());
    }
    let decoded = image::load_from_memory(&bytes)?;
    debug!(
        "decoded {} via image crate: {}x{}",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Image::from_rgb_image(&decoded.to_rgb8()).map_err(|e| TransformError::malformed(e.to_string()))
}
