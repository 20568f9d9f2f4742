//! Pure image transforms
//!
//! Every function here reads its input image(s) and returns a freshly
//! allocated result; inputs are never modified.
//!
//! # Module Structure
//!
//! - [`geometric`] - Horizontal/vertical mirroring and nearest-neighbor scaling
//! - [`color`] - Grayscale and linear blending
//! - [`types`] - The `Transform` enum and its string syntax

pub mod color;
pub mod geometric;
pub mod types;

// Re-export main functions at the module level for convenience
pub use color::{blend, grayscale};
pub use geometric::{flip_horizontal, flip_vertical, scale};
pub use types::{apply_transforms, parse_size, parse_transform_str, Transform};
