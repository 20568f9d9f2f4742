//! Single-image transform operations and their string syntax
//!
//! Used by the CLI to chain operations (`--then flip-v --then scale:8x4`).

use std::fmt;
use std::str::FromStr;

use super::color::grayscale;
use super::geometric::{flip_horizontal, flip_vertical, scale};
use crate::error::TransformError;
use crate::raster::Image;
use crate::Result;

/// A transform that maps one image to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Scale { width: usize, height: usize },
}

impl Transform {
    /// Apply this transform, returning a new image.
    pub fn apply(&self, image: &Image) -> Result<Image> {
        match *self {
            Transform::FlipHorizontal => Ok(flip_horizontal(image)),
            Transform::FlipVertical => Ok(flip_vertical(image)),
            Transform::Grayscale => Ok(grayscale(image)),
            Transform::Scale { width, height } => scale(image, width, height),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::FlipHorizontal => write!(f, "flip-h"),
            Transform::FlipVertical => write!(f, "flip-v"),
            Transform::Grayscale => write!(f, "gray"),
            Transform::Scale { width, height } => write!(f, "scale:{}x{}", width, height),
        }
    }
}

impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        parse_transform_str(s)
    }
}

/// Apply transforms left to right.
pub fn apply_transforms(image: &Image, transforms: &[Transform]) -> Result<Image> {
    let mut current = image.clone();
    for t in transforms {
        current = t.apply(&current)?;
    }
    Ok(current)
}

/// Parse a transform from its string form.
///
/// Accepted forms:
/// - `flip-h` / `mirror-h`
/// - `flip-v` / `mirror-v`
/// - `gray` / `grayscale`
/// - `scale:WxH` (e.g. `scale:16x8`)
pub fn parse_transform_str(s: &str) -> Result<Transform> {
    let s = s.trim();
    let (op, params) = match s.split_once(':') {
        Some((op, params)) => (op.trim(), Some(params.trim())),
        None => (s, None),
    };

    let op_lower = op.to_lowercase();
    match (op_lower.as_str(), params) {
        ("flip-h" | "mirror-h", None) => Ok(Transform::FlipHorizontal),
        ("flip-v" | "mirror-v", None) => Ok(Transform::FlipVertical),
        ("gray" | "grayscale", None) => Ok(Transform::Grayscale),
        ("scale", Some(size)) => {
            let (width, height) = parse_size(size)?;
            Ok(Transform::Scale { width, height })
        }
        ("scale", None) => Err(TransformError::invalid("scale", "expected scale:WxH")),
        ("flip-h" | "mirror-h" | "flip-v" | "mirror-v" | "gray" | "grayscale", Some(_)) => {
            Err(TransformError::invalid(op, "takes no parameters"))
        }
        _ => Err(TransformError::invalid("transform", format!("unknown operation '{}'", op))),
    }
}

/// Parse `WxH` into positive dimensions.
pub fn parse_size(s: &str) -> Result<(usize, usize)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| TransformError::invalid("size", format!("expected WxH, got '{}'", s)))?;
    let parse = |v: &str| -> Result<usize> {
        match v.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(TransformError::invalid(
                "size",
                format!("'{}' is not a positive integer in '{}'", v, s),
            )),
        }
    };
    Ok((parse(w)?, parse(h)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn test_parse_simple_ops() {
        assert_eq!(parse_transform_str("flip-h").unwrap(), Transform::FlipHorizontal);
        assert_eq!(parse_transform_str("mirror-v").unwrap(), Transform::FlipVertical);
        assert_eq!(parse_transform_str(" GRAY ").unwrap(), Transform::Grayscale);
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(
            parse_transform_str("scale:3x5").unwrap(),
            Transform::Scale { width: 3, height: 5 }
        );
        assert!(parse_transform_str("scale").is_err());
        assert!(parse_transform_str("scale:0x5").is_err());
        assert!(parse_transform_str("scale:-1x5").is_err());
        assert!(parse_transform_str("scale:3").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = parse_transform_str("rotate:90").unwrap_err();
        assert!(err.to_string().contains("unknown operation 'rotate'"));
        assert!(parse_transform_str("flip-h:2").is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for t in [
            Transform::FlipHorizontal,
            Transform::FlipVertical,
            Transform::Grayscale,
            Transform::Scale { width: 4, height: 2 },
        ] {
            assert_eq!(t.to_string().parse::<Transform>().unwrap(), t);
        }
    }

    #[test]
    fn test_apply_transforms_in_order() {
        let img = Image::from_fn(2, 1, |_, c| Pixel::gray(c as u8 * 100)).unwrap();
        let out = apply_transforms(
            &img,
            &[Transform::FlipHorizontal, Transform::Scale { width: 4, height: 1 }],
        )
        .unwrap();
        assert_eq!(out.dimensions(), (4, 1));
        assert_eq!(out.pixel(0, 0), Pixel::gray(100));
        assert_eq!(out.pixel(0, 3), Pixel::gray(0));
    }

    #[test]
    fn test_apply_transforms_empty_is_identity() {
        let img = Image::filled(2, 2, Pixel::new(1, 2, 3)).unwrap();
        assert_eq!(apply_transforms(&img, &[]).unwrap(), img);
    }
}
