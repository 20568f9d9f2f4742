//! Pixmorph - small raster-image transformation library
//!
//! This library provides functionality to:
//! - Decode plain-text PPM (and, through the `image` crate, other formats)
//! - Mirror, grayscale, resize and blend RGB images
//! - Morph one image into another as a paced sequence of frames
//! - Render frames to a terminal or an in-memory frame sink

pub mod cli;
pub mod config;
pub mod error;
pub mod morph;
pub mod pixel;
pub mod ppm;
pub mod print;
pub mod raster;
pub mod sink;
pub mod transforms;

pub use error::TransformError;
pub use morph::{morph, Morph, MorphFrame};
pub use pixel::Pixel;
pub use raster::Image;
pub use sink::FrameSink;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, TransformError>;
